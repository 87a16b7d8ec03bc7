//! Check status types for requirement results.
//!
//! Each requirement check produces a [`CheckStatus`] that describes
//! whether and how the probe command resolved.

/// Exit code reported for a command whose executable was not found.
///
/// Matches the conventional shell "command not found" code.
pub const MISSING_EXIT_CODE: i32 = 127;

/// The result of classifying a single requirement check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Command executed and returned exit code 0.
    Fulfilled,

    /// The command's executable could not be found or started.
    Missing,

    /// Command executed but returned a nonzero exit code.
    Failed {
        /// Exit code (None if killed by signal).
        exit_code: Option<i32>,
        /// Decoded, trimmed combined stdout+stderr.
        output: String,
    },
}

impl CheckStatus {
    /// Whether the requirement is fulfilled.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, CheckStatus::Fulfilled)
    }

    /// The exit code to report for this status.
    ///
    /// `Missing` maps to the fixed [`MISSING_EXIT_CODE`] sentinel; a
    /// signal-killed `Failed` has no code.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CheckStatus::Fulfilled => Some(0),
            CheckStatus::Missing => Some(MISSING_EXIT_CODE),
            CheckStatus::Failed { exit_code, .. } => *exit_code,
        }
    }
}

/// The result of checking a single requirement within a batch.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// The requirement's friendly name.
    pub name: String,
    /// How the check resolved.
    pub status: CheckStatus,
}
