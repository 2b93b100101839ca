//! Parsing of phing's `-list` report
//!
//! The listing output is an externally-owned text format, so all of the
//! pattern matching lives behind this one function: raw text in, ordered
//! target list out.
//!
//! Expected shape (DefaultLogger):
//!
//! ```text
//! Main targets:
//! -------------
//! build  Build the project
//! test   Run tests
//! Subtargets:
//! ------------
//! clean
//! ```
//!
//! Only main targets are kept. A main target always carries a description;
//! names containing a dot come from an imported build file and are dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{PhingError, PhingResult};

/// Matches the two-section listing report; group 1 is the main-targets
/// block, group 2 the (discarded) subtargets block.
static SECTIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Main targets:\n?-+\n?(.*)Subtargets:\n?-+\n?(.*)").unwrap()
});

/// Splits a report line into name and description fields.
static FIELDS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// A runnable build target with its description
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Target {
    /// Target name as passed back to phing
    pub name: String,
    /// Human-readable description from the listing
    pub description: String,
}

impl Target {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Parse the combined output of `phing -list` into a sorted target list.
///
/// # Errors
/// * [`PhingError::ParseMismatch`] - output lacks the two-section shape
pub fn parse_listing(output: &str) -> PhingResult<Vec<Target>> {
    let caps = SECTIONS_RE
        .captures(output)
        .ok_or(PhingError::ParseMismatch)?;

    let mut targets = Vec::new();
    for line in caps[1].lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = FIELDS_RE.split(line);
        let name = match fields.next() {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };
        // Dotted names are declared in an imported build file; skip them.
        if name.contains('.') {
            continue;
        }

        let description = fields.collect::<Vec<_>>().join("  ");
        targets.push(Target::new(name, description));
    }

    targets.sort();
    Ok(targets)
}
