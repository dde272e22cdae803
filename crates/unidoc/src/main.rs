//! unidoc CLI - docfx helper for locally developed Unity packages.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod settings;

#[derive(Parser)]
#[command(name = "unidoc")]
#[command(about = "Configure and run docfx for locally developed Unity packages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Unity project root (defaults to unidoc.toml setting or ".")
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List locally developed packages and their docgen status
    List,

    /// Create a docgen configuration for a package
    Init {
        /// Package name or path
        package: String,

        /// Site output directory, relative to the documentation folder
        #[arg(long, default_value = "_site")]
        output: String,

        /// docfx config file, relative to the documentation folder
        #[arg(long, default_value = "docfx.json")]
        config_file: String,

        /// Do not stage the starter documentation files
        #[arg(long)]
        no_template: bool,
    },

    /// Print a package's docgen configuration
    Show {
        /// Package name or path
        package: String,
    },

    /// Edit configuration fields (saved immediately)
    Set {
        /// Package name or path
        package: String,

        /// Site output directory
        #[arg(long)]
        output: Option<String>,

        /// docfx config file
        #[arg(long)]
        config_file: Option<String>,

        /// docfx template name or path (empty string clears it)
        #[arg(long)]
        template: Option<String>,
    },

    /// Edit docfx metadata pairs (saved immediately)
    Meta {
        /// Package name or path
        package: String,

        #[command(subcommand)]
        action: MetaAction,
    },

    /// Stage artifacts and run docfx for a package
    Generate {
        /// Package name or path
        package: String,

        /// Keep docfx resident, serving the generated site
        #[arg(long)]
        serve: bool,

        /// Open the browser once serving (implies --serve)
        #[arg(long)]
        open: bool,
    },

    /// Serve a previously generated site
    Serve {
        /// Package name or path
        package: String,

        /// Do not open the browser
        #[arg(long)]
        no_open: bool,
    },

    /// Terminate any docfx processes recorded for a package
    Stop {
        /// Package name or path
        package: String,
    },
}

#[derive(Subcommand)]
pub enum MetaAction {
    /// Set a key to a value
    Set { key: String, value: String },

    /// Remove a key
    Remove { key: String },

    /// List all pairs
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let settings = settings::load()?;
    let project_root = cli
        .project
        .unwrap_or_else(|| PathBuf::from(&settings.project.root));

    // Execute command
    match cli.command {
        Commands::List => {
            commands::list::run(&project_root).await?;
        }
        Commands::Init {
            package,
            output,
            config_file,
            no_template,
        } => {
            commands::init::run(&project_root, &package, &output, &config_file, !no_template)
                .await?;
        }
        Commands::Show { package } => {
            commands::show::run(&project_root, &package).await?;
        }
        Commands::Set {
            package,
            output,
            config_file,
            template,
        } => {
            commands::set::run(&project_root, &package, output, config_file, template).await?;
        }
        Commands::Meta { package, action } => {
            commands::meta::run(&project_root, &package, action).await?;
        }
        Commands::Generate {
            package,
            serve,
            open,
        } => {
            commands::generate::run(
                &project_root,
                &settings.docfx.bin,
                &package,
                serve || open,
                open,
            )
            .await?;
        }
        Commands::Serve { package, no_open } => {
            commands::serve::run(&project_root, &settings.docfx.bin, &package, !no_open).await?;
        }
        Commands::Stop { package } => {
            commands::stop::run(&project_root, &package).await?;
        }
    }

    Ok(())
}
