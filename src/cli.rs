//! CLI definitions using clap
//!
//! Subcommands:
//! - `pick` (default) - interactive target menu, then run the choice
//! - `list` - print available targets
//! - `run <target>` - run one target directly

use clap::{Parser, Subcommand, ValueEnum};

use crate::session::DEFAULT_BINARY;

/// Lists Phing build targets and runs the chosen one.
///
/// Targets come from `phing -list` run inside the project root; the
/// selected target is executed there too, with its output printed.
#[derive(Parser, Debug)]
#[command(name = "phingrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root containing build.xml (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    pub project: String,

    /// Name of the phing binary to search for on PATH
    #[arg(short, long, global = true, default_value = DEFAULT_BINARY)]
    pub bin: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose a target from an interactive menu and run it (default)
    Pick,

    /// List available targets
    List(ListArgs),

    /// Run a target directly, skipping the menu
    Run(RunArgs),
}

/// Arguments for the `list` subcommand
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the `run` subcommand
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Target name to run (e.g., build, test)
    #[arg(required = true)]
    pub target: String,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON output
    Json,
    /// Bare target names, one per line
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_pick() {
        let cli = Cli::parse_from(["phingrun"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.project, ".");
        assert_eq!(cli.bin, "phing");
    }

    #[test]
    fn test_run_requires_target() {
        assert!(Cli::try_parse_from(["phingrun", "run"]).is_err());
        let cli = Cli::parse_from(["phingrun", "run", "build"]);
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.target, "build"),
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["phingrun", "list", "--project", "/srv/app"]);
        assert_eq!(cli.project, "/srv/app");
    }

    #[test]
    fn test_list_format() {
        let cli = Cli::parse_from(["phingrun", "list", "--format", "json"]);
        match cli.command {
            Some(Commands::List(args)) => assert!(matches!(args.format, OutputFormat::Json)),
            _ => panic!("expected list subcommand"),
        }
    }
}
