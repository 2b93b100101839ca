//! Target selection menu
//!
//! The host selection primitive sits behind [`SelectionUi`] so the
//! interactive cycle can be driven by a scripted implementation in tests.
//! [`TerminalUi`] is the real one: a numbered menu on stdout, one line of
//! input to pick.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::error::PhingResult;
use crate::listing::Target;
use crate::session::{PhingSession, RunOutcome};

/// Outcome of showing the selection menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index into the target list shown
    Target(usize),
    /// Menu dismissed without a choice
    Cancelled,
}

/// A modal selection-list primitive
pub trait SelectionUi {
    /// Present `targets` and return the user's choice.
    fn select(&self, targets: &[Target]) -> io::Result<Selection>;
}

/// Interactive terminal menu
#[derive(Debug, Default)]
pub struct TerminalUi;

impl TerminalUi {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionUi for TerminalUi {
    fn select(&self, targets: &[Target]) -> io::Result<Selection> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let width = targets.iter().map(|t| t.name.len()).max().unwrap_or(10);
        for (i, target) in targets.iter().enumerate() {
            writeln!(
                out,
                "  {:>3}) {:width$}  {}",
                i + 1,
                target.name.green(),
                target.description,
                width = width
            )?;
        }
        write!(out, "Target number (empty to cancel): ")?;
        out.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(Selection::Cancelled);
        }
        Ok(parse_choice(&line, targets.len()))
    }
}

/// Map one line of menu input to a selection.
///
/// Valid 1-based numbers select; anything else cancels.
fn parse_choice(line: &str, len: usize) -> Selection {
    match line.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Selection::Target(n - 1),
        _ => Selection::Cancelled,
    }
}

/// Run one full discovery/selection/execution cycle.
///
/// Lists targets, shows the menu, and runs the chosen target. Returns
/// `None` when there is nothing to show or the menu was cancelled; in
/// both cases no execution subprocess is spawned.
pub fn select_and_run(
    session: &PhingSession,
    ui: &dyn SelectionUi,
) -> PhingResult<Option<RunOutcome>> {
    let targets = session.list_targets()?;
    if targets.is_empty() {
        tracing::info!("no targets to show");
        return Ok(None);
    }

    match ui.select(&targets)? {
        Selection::Target(index) => {
            let outcome = session.run_selected(&targets, index)?;
            Ok(Some(outcome))
        }
        Selection::Cancelled => {
            tracing::info!("selection cancelled");
            println!("Cancelled");
            Ok(None)
        }
    }
}
