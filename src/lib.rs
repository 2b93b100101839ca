//! phingrun - Phing target picker and runner
//!
//! Shells out to the [Phing](https://www.phing.info/) PHP build tool to
//! discover the build targets a project declares, presents them in a
//! selection menu, and runs the chosen one, printing its output.
//!
//! The pieces:
//! - [`locate`] - find the phing executable on PATH
//! - [`session`] - one discovery/selection/execution cycle against a root
//! - [`listing`] - parse the `-list` report into targets
//! - [`ui`] - the selection menu, behind a trait for testability

pub mod cli;
pub mod error;
pub mod listing;
pub mod locate;
pub mod session;
pub mod ui;

pub use cli::{Cli, Commands};
pub use error::{PhingError, PhingResult};
pub use listing::{parse_listing, Target};
pub use locate::{find_tool, which_all};
pub use session::{PhingSession, RunOutcome, BUILD_FILE, DEFAULT_BINARY, DEFAULT_LOGGER};
pub use ui::{select_and_run, Selection, SelectionUi, TerminalUi};
