//! Executable location on the search path
//!
//! Thin wrapper around the `which` crate that returns every candidate for
//! a binary name in PATH order (including PATHEXT suffix matches on
//! Windows), plus the policy layer that picks, canonicalizes, and verifies
//! the first one.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{PhingError, PhingResult};

/// Find every candidate for `name` on the process's search path.
///
/// Candidates are returned in first-match-first order. An unset or empty
/// `PATH`, or a name with no matches, yields an empty vec; missing
/// directories on the path are skipped, never an error.
pub fn which_all(name: &str) -> Vec<PathBuf> {
    which_all_in(name, env::var_os("PATH"))
}

/// Like [`which_all`], but against an explicit search path.
pub fn which_all_in(name: &str, paths: Option<OsString>) -> Vec<PathBuf> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match which::which_in_all(name, paths, cwd) {
        Ok(candidates) => candidates.collect(),
        Err(e) => {
            tracing::debug!("path search for '{}' found nothing: {}", name, e);
            vec![]
        }
    }
}

/// Resolve the build-tool binary to a canonical, verified path.
///
/// Takes the first search-path candidate, canonicalizes it, and checks it
/// still exists and is executable. Any failure along the way is
/// [`PhingError::ToolNotFound`]; no subprocess is ever spawned here.
pub fn find_tool(name: &str) -> PhingResult<PathBuf> {
    find_tool_in(name, env::var_os("PATH"))
}

/// Like [`find_tool`], but against an explicit search path.
pub fn find_tool_in(name: &str, paths: Option<OsString>) -> PhingResult<PathBuf> {
    let not_found = || PhingError::ToolNotFound {
        binary: name.to_string(),
    };

    let candidates = which_all_in(name, paths);
    let first = candidates.first().ok_or_else(|| not_found())?;

    // The raw candidate may carry stray whitespace when PATH entries do.
    let trimmed = first.to_string_lossy().trim().to_string();
    let resolved = Path::new(&trimmed).canonicalize().map_err(|e| {
        tracing::debug!("cannot canonicalize '{}': {}", trimmed, e);
        not_found()
    })?;

    if !resolved.exists() || !is_executable(&resolved) {
        return Err(not_found());
    }

    Ok(resolved)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    // which already filtered on PATHEXT; existence is the only extra check.
    true
}
