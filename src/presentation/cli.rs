//! CLI Argument Parsing
//!
//! Global flags (--root, --json, --color, --verbose) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// BFG - scaffolding and artifact packaging for Stan projects
#[derive(Parser, Debug)]
#[command(name = "bfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tool root holding the template and the models directory
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project from the template (never overwrites an existing model)
    New {
        /// Project name, used as directory name and model file stem
        name: String,

        /// Directory holding all projects (relative to the tool root)
        #[arg(long, value_name = "DIR")]
        models_dir: Option<PathBuf>,
    },

    /// Move compiler output next to a model file into __compile__/
    Package {
        /// Path to the model file
        model: PathBuf,
    },

    /// Create the project, compile it with CmdStan, then package artifacts
    Build {
        /// Project name
        name: String,

        /// Directory holding all projects (relative to the tool root)
        #[arg(long, value_name = "DIR")]
        models_dir: Option<PathBuf>,

        /// Skip compilation and only package
        #[arg(long)]
        no_compile: bool,

        /// CmdStan installation directory
        #[arg(long, value_name = "DIR", conflicts_with = "no_compile")]
        cmdstan: Option<PathBuf>,
    },

    /// Install the bundled template into the tool root
    Init {
        /// Overwrite an existing template
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_new_with_global_flags() {
        let cli = Cli::try_parse_from(["bfg", "--root", "/srv/bfg", "new", "demo", "--json"]).unwrap();

        assert_eq!(cli.root, Some(PathBuf::from("/srv/bfg")));
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::New { ref name, models_dir: None } if name == "demo"
        ));
    }

    #[test]
    fn parse_build_flags() {
        let cli = Cli::try_parse_from(["bfg", "build", "demo", "--cmdstan", "/opt/cmdstan", "-vv"])
            .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Build {
                name,
                no_compile,
                cmdstan,
                ..
            } => {
                assert_eq!(name, "demo");
                assert!(!no_compile);
                assert_eq!(cmdstan, Some(PathBuf::from("/opt/cmdstan")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_compile_conflicts_with_cmdstan() {
        let result =
            Cli::try_parse_from(["bfg", "build", "demo", "--no-compile", "--cmdstan", "/opt"]);
        assert!(result.is_err());
    }

    #[test]
    fn new_requires_a_name() {
        assert!(Cli::try_parse_from(["bfg", "new"]).is_err());
    }

    #[test]
    fn parse_color_flag() {
        let cli = Cli::try_parse_from(["bfg", "--color", "never", "init"]).unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert!(matches!(cli.command, Commands::Init { force: false }));
    }
}
