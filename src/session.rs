//! Phing invocation session
//!
//! A [`PhingSession`] carries the resolved executable path and the project
//! root for one discovery/selection/execution cycle. It is built once at
//! discovery time and handed to the execution step, so nothing leaks
//! across invocations.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::error::{PhingError, PhingResult};
use crate::listing::{parse_listing, Target};
use crate::locate::find_tool;

/// Logger passed to phing so the listing stays plain text
pub const DEFAULT_LOGGER: &str = "phing.listener.DefaultLogger";

/// Name of the build-definition file expected under the project root
pub const BUILD_FILE: &str = "build.xml";

/// Default name of the phing binary
pub const DEFAULT_BINARY: &str = "phing";

/// Output of one phing invocation
#[derive(Debug)]
pub struct RunOutcome {
    /// Whether phing exited with code 0
    pub success: bool,
    /// Exit code if available
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr, decoded
    pub output: String,
    /// Command line that was executed (for display/logging)
    pub command: String,
}

/// One discovery/selection/execution cycle against a project root
#[derive(Debug, Clone)]
pub struct PhingSession {
    tool: PathBuf,
    project_root: PathBuf,
}

impl PhingSession {
    /// Create a session from an already-resolved tool path.
    pub fn new(tool: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            project_root: project_root.into(),
        }
    }

    /// Locate the build tool and validate the project root.
    ///
    /// Confirms `build.xml` exists directly under the root before anything
    /// is spawned. The file is also run through an XML parse purely to get
    /// malformed-XML diagnostics into the log; a parse failure is reported
    /// there and nowhere else.
    ///
    /// # Errors
    /// * [`PhingError::ToolNotFound`] - no usable binary on the search path
    /// * [`PhingError::BuildFileMissing`] - no `build.xml` in the root
    pub fn discover(binary: &str, project_root: &Path) -> PhingResult<Self> {
        let tool = find_tool(binary)?;
        tracing::debug!("resolved {} to {}", binary, tool.display());

        check_project_root(project_root)?;

        Ok(Self::new(tool, project_root))
    }

    /// Resolved path to the phing executable
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// Project root used as the working directory for every invocation
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run `phing -list` and parse the report into a sorted target list.
    ///
    /// A report that does not match the expected two-section shape is not
    /// an error here: it produces an empty list with a log diagnostic, so
    /// the caller shows nothing rather than a failure dialog.
    ///
    /// # Errors
    /// * [`PhingError::SpawnFailed`] - the listing process could not run
    pub fn list_targets(&self) -> PhingResult<Vec<Target>> {
        let outcome = self.invoke(&["-list", "-logger", DEFAULT_LOGGER])?;
        match parse_listing(&outcome.output) {
            Ok(targets) => Ok(targets),
            Err(PhingError::ParseMismatch) => {
                tracing::warn!(
                    "target listing from '{}' did not match the expected format",
                    outcome.command
                );
                Ok(vec![])
            }
            Err(e) => Err(e),
        }
    }

    /// Run a single target, returning its combined output.
    ///
    /// # Errors
    /// * [`PhingError::SpawnFailed`] - the process could not run
    pub fn run_target(&self, target: &str) -> PhingResult<RunOutcome> {
        self.invoke(&["-logger", DEFAULT_LOGGER, target])
    }

    /// Run a target picked by index from a previously discovered list.
    ///
    /// # Errors
    /// * [`PhingError::TargetOutOfRange`] - index does not point into `targets`
    /// * [`PhingError::SpawnFailed`] - the process could not run
    pub fn run_selected(&self, targets: &[Target], index: usize) -> PhingResult<RunOutcome> {
        let target = targets
            .get(index)
            .ok_or(PhingError::TargetOutOfRange {
                index,
                len: targets.len(),
            })?;
        tracing::info!("running target {}", target.name);
        self.run_target(&target.name)
    }

    /// Spawn phing with the given arguments, blocking until it exits.
    fn invoke(&self, args: &[&str]) -> PhingResult<RunOutcome> {
        let command_str = std::iter::once(self.tool.display().to_string())
            .chain(args.iter().map(|a| a.to_string()))
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!("executing: {} (cwd {})", command_str, self.project_root.display());

        let output = Command::new(&self.tool)
            .args(args)
            .current_dir(&self.project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| PhingError::SpawnFailed {
                command: command_str.clone(),
                error: e.to_string(),
            })?;

        Ok(RunOutcome {
            success: output.status.success(),
            exit_code: output.status.code(),
            output: combine_output(&output),
            command: command_str,
        })
    }
}

/// Decode and merge a child's stdout and stderr into one text blob.
///
/// Valid UTF-8 passes through unchanged; anything else is decoded lossily,
/// so text and raw-byte payloads with the same content print identically.
pub fn combine_output(output: &Output) -> String {
    let mut text = decode(&output.stdout);
    text.push_str(&decode(&output.stderr));
    text
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Confirm the project root holds a build file, and lint it as XML.
///
/// The XML parse exists only to get malformed-XML diagnostics into the
/// log; it never blocks discovery.
pub fn check_project_root(project_root: &Path) -> PhingResult<()> {
    let build_file = project_root.join(BUILD_FILE);
    if !build_file.is_file() {
        return Err(PhingError::BuildFileMissing {
            path: build_file.display().to_string(),
        });
    }
    check_build_file_xml(&build_file);
    Ok(())
}

/// Log-only XML well-formedness check of the build file.
fn check_build_file_xml(path: &Path) {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            if let Err(e) = roxmltree::Document::parse(&content) {
                tracing::warn!("{} is not well-formed XML: {}", path.display(), e);
            }
        }
        Err(e) => {
            tracing::warn!("could not read {}: {}", path.display(), e);
        }
    }
}
