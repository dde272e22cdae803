//! docfx invocation and child-process lifecycle.
//!
//! The tool holds at most one generation process and one serve process.
//! Starting either role first terminates any prior process of both roles
//! (best effort, never retried). Pids are recorded in role files under
//! the documentation staging folder so the replacement policy also holds
//! across separate tool invocations.

pub mod invocation;
pub mod launcher;
pub mod pidfile;

pub use invocation::DocfxInvocation;
pub use launcher::{Launcher, RunnerError};
pub use pidfile::{PidFile, Role};
