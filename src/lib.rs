//! Prereq - declarative environment requirement checking.
//!
//! A requirement names an external prerequisite (an installed tool, a
//! reachable service) and carries the argv-style command that probes for
//! it. Checking runs the command and classifies the exit: fulfilled
//! (exit 0), missing (executable not found), or failed (nonzero exit,
//! with the captured output). A [`RequirementChecker`] memoizes results
//! by command identity so repeated checks don't re-run anything.
//!
//! # Modules
//!
//! - [`checker`] - Memoizing requirement checker service
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - YAML manifest loading and validation
//! - [`requirement`] - Requirement definition and checking
//! - [`status`] - Check status classification types
//!
//! # Example
//!
//! ```no_run
//! use prereq::{Requirement, RequirementChecker};
//!
//! let git = Requirement::new("Git", vec!["git".into(), "--version".into()]);
//! let mut checker = RequirementChecker::new();
//! assert!(checker.check(&git)?);
//! # Ok::<(), prereq::PrereqError>(())
//! ```

pub mod checker;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod requirement;
pub mod status;

pub use checker::RequirementChecker;
pub use error::{PrereqError, Result};
pub use manifest::Manifest;
pub use requirement::Requirement;
pub use status::{CheckReport, CheckStatus, MISSING_EXIT_CODE};
