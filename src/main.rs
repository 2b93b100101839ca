//! phingrun CLI entry point
//!
//! Usage:
//!   phingrun              Pick a target from a menu and run it
//!   phingrun list         List available targets
//!   phingrun run <target> Run a target directly

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use phingrun::cli::{Cli, Commands, ListArgs, OutputFormat, RunArgs};
use phingrun::session::PhingSession;
use phingrun::ui::{select_and_run, TerminalUi};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = resolve_project_root(&cli.project);
    let session = PhingSession::discover(&cli.bin, &project_root)?;

    match cli.command.unwrap_or(Commands::Pick) {
        Commands::Pick => pick_target(&session),
        Commands::List(args) => list_targets(&session, args),
        Commands::Run(args) => run_target(&session, args),
    }
}

/// Show the menu and run whatever the user picks
fn pick_target(session: &PhingSession) -> Result<()> {
    let ui = TerminalUi::new();
    if let Some(outcome) = select_and_run(session, &ui)? {
        print!("{}", outcome.output);
        if !outcome.success {
            anyhow::bail!(
                "'{}' failed with exit code {:?}",
                outcome.command,
                outcome.exit_code
            );
        }
    }
    Ok(())
}

/// Print the discovered targets
fn list_targets(session: &PhingSession, args: ListArgs) -> Result<()> {
    let targets = session.list_targets()?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "project": session.project_root().display().to_string(),
                "targets": targets,
            }))?;
            println!("{}", json);
        }
        OutputFormat::Plain => {
            for target in &targets {
                println!("{}", target.name);
            }
        }
        OutputFormat::Table => {
            if targets.is_empty() {
                println!("No targets found.");
            } else {
                let width = targets.iter().map(|t| t.name.len()).max().unwrap_or(10);
                for target in &targets {
                    println!(
                        "  {:width$}  {}",
                        target.name.green(),
                        target.description,
                        width = width
                    );
                }
            }
        }
    }

    Ok(())
}

/// Run one target and print its combined output
fn run_target(session: &PhingSession, args: RunArgs) -> Result<()> {
    tracing::info!("running target {}", args.target);
    let outcome = session.run_target(&args.target)?;
    print!("{}", outcome.output);

    if outcome.success {
        Ok(())
    } else {
        anyhow::bail!(
            "Target '{}' failed with exit code {:?}",
            args.target,
            outcome.exit_code
        )
    }
}

/// Expand `~` in the project argument and make it a path
fn resolve_project_root(project: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(project).into_owned())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "phingrun=debug" } else { "phingrun=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_project_root_plain_path() {
        assert_eq!(resolve_project_root("/srv/app"), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_resolve_project_root_expands_tilde() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let resolved = resolve_project_root("~/app");
        assert!(!resolved.to_string_lossy().starts_with('~'));
        assert!(resolved.to_string_lossy().ends_with("/app"));
    }
}
