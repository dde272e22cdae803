//! Construction of docfx command lines.

use std::path::{Path, PathBuf};

/// Default name of the docfx executable on PATH.
pub const DEFAULT_DOCFX_BIN: &str = "docfx";

/// A fully assembled docfx invocation.
///
/// Arguments are held as an argv vector, not a shell string; keys and
/// values in `-m` pairs are passed as single `key=value` arguments, which
/// is what a shell would hand docfx for `-m "key"="value"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocfxInvocation {
    pub(crate) bin: String,
    pub(crate) working_dir: PathBuf,
    pub(crate) args: Vec<String>,
    pub(crate) resident: bool,
}

impl DocfxInvocation {
    /// Build a generation run:
    /// `docfx "<config>" -o "<output>" [-t <template>] [-m "K"="V" ...]
    /// [--serve [--open-browser]]`, run from the documentation folder.
    pub fn generate(
        docs_dir: &Path,
        config_path: &Path,
        output_path: &Path,
        template: &str,
        metadata: &[(String, String)],
        serve: bool,
        open_browser: bool,
    ) -> Self {
        let mut args = vec![
            config_path.display().to_string(),
            "-o".to_string(),
            output_path.display().to_string(),
        ];

        if !template.is_empty() {
            args.push("-t".to_string());
            args.push(template.to_string());
        }

        for (key, value) in metadata {
            args.push("-m".to_string());
            args.push(format!("{key}={value}"));
        }

        if serve {
            args.push("--serve".to_string());
            if open_browser {
                args.push("--open-browser".to_string());
            }
        }

        Self {
            bin: DEFAULT_DOCFX_BIN.to_string(),
            working_dir: docs_dir.to_path_buf(),
            args,
            resident: serve,
        }
    }

    /// Build a serve run: `docfx serve "<output>" --open-browser`, run
    /// from the documentation folder.
    pub fn serve(docs_dir: &Path, output_path: &Path, open_browser: bool) -> Self {
        let mut args = vec!["serve".to_string(), output_path.display().to_string()];
        if open_browser {
            args.push("--open-browser".to_string());
        }

        Self {
            bin: DEFAULT_DOCFX_BIN.to_string(),
            working_dir: docs_dir.to_path_buf(),
            args,
            resident: true,
        }
    }

    /// Override the executable, e.g. from a tool settings file.
    pub fn with_bin(mut self, bin: &str) -> Self {
        self.bin = bin.to_string();
        self
    }

    /// Executable to run.
    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Working directory for the child process.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Argument vector.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the process stays resident (serving) rather than exiting
    /// when generation finishes.
    pub fn is_resident(&self) -> bool {
        self.resident
    }

    /// Human-readable command line for logging.
    pub fn display(&self) -> String {
        let mut line = self.bin.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(' ') {
                line.push('"');
                line.push_str(arg);
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn builds_minimal_generate_args() {
        let inv = DocfxInvocation::generate(
            Path::new("/pkg/Documentation"),
            Path::new("/pkg/Documentation/docfx.json"),
            Path::new("/pkg/Documentation/_site"),
            "",
            &[],
            false,
            false,
        );

        assert_eq!(
            inv.args(),
            &[
                "/pkg/Documentation/docfx.json",
                "-o",
                "/pkg/Documentation/_site",
            ]
        );
        assert_eq!(inv.bin(), "docfx");
        assert_eq!(inv.working_dir(), Path::new("/pkg/Documentation"));
        assert!(!inv.is_resident());
    }

    #[test]
    fn template_flag_only_when_set() {
        let docs = Path::new("docs");
        let with = DocfxInvocation::generate(
            docs,
            Path::new("docfx.json"),
            Path::new("_site"),
            "modern",
            &[],
            false,
            false,
        );
        let without = DocfxInvocation::generate(
            docs,
            Path::new("docfx.json"),
            Path::new("_site"),
            "",
            &[],
            false,
            false,
        );

        assert!(with.args().contains(&"-t".to_string()));
        assert!(with.args().contains(&"modern".to_string()));
        assert!(!without.args().contains(&"-t".to_string()));
    }

    #[test]
    fn metadata_pairs_become_m_flags_in_order() {
        let inv = DocfxInvocation::generate(
            Path::new("docs"),
            Path::new("docfx.json"),
            Path::new("_site"),
            "",
            &pairs(&[("_appTitle", "My Package"), ("_enableSearch", "true")]),
            false,
            false,
        );

        let args = inv.args();
        let first_m = args.iter().position(|a| a == "-m").unwrap();
        assert_eq!(args[first_m + 1], "_appTitle=My Package");
        assert_eq!(args[first_m + 2], "-m");
        assert_eq!(args[first_m + 3], "_enableSearch=true");
    }

    #[test]
    fn serve_flags_appended_last() {
        let inv = DocfxInvocation::generate(
            Path::new("docs"),
            Path::new("docfx.json"),
            Path::new("_site"),
            "",
            &[],
            true,
            true,
        );

        let args = inv.args();
        assert_eq!(args[args.len() - 2], "--serve");
        assert_eq!(args[args.len() - 1], "--open-browser");
        assert!(inv.is_resident());
    }

    #[test]
    fn builds_serve_invocation() {
        let inv = DocfxInvocation::serve(Path::new("docs"), Path::new("_site"), true);

        assert_eq!(inv.args(), &["serve", "_site", "--open-browser"]);
        assert!(inv.is_resident());

        let no_open = DocfxInvocation::serve(Path::new("docs"), Path::new("_site"), false);
        assert_eq!(no_open.args(), &["serve", "_site"]);
    }

    #[test]
    fn display_quotes_spaced_args() {
        let inv = DocfxInvocation::generate(
            Path::new("docs"),
            Path::new("docfx.json"),
            Path::new("out dir"),
            "",
            &[],
            false,
            false,
        )
        .with_bin("docfx-preview");

        assert_eq!(inv.display(), r#"docfx-preview docfx.json -o "out dir""#);
    }
}
