//! Requirement definition and checking.
//!
//! A [`Requirement`] names an environment prerequisite and carries the
//! argv-style command that probes for it. Checking runs the command,
//! blocks until it exits, and classifies the outcome.

use crate::error::{PrereqError, Result};
use crate::status::CheckStatus;
use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};

/// A named environment prerequisite probed by running a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Friendly name shown in reports and errors.
    pub name: String,

    /// Argv-style invocation: executable first, then arguments.
    pub command: Vec<String>,

    /// If true, a failed check warns and returns false instead of erroring.
    #[serde(default)]
    pub warn: bool,
}

impl Requirement {
    /// Create a strict requirement (failures are errors).
    pub fn new(name: impl Into<String>, command: Vec<String>) -> Self {
        Self {
            name: name.into(),
            command,
            warn: false,
        }
    }

    /// Create a lenient requirement (failures warn and return false).
    pub fn lenient(name: impl Into<String>, command: Vec<String>) -> Self {
        Self {
            name: name.into(),
            command,
            warn: true,
        }
    }

    /// The command rendered for display in messages.
    pub fn rendered_command(&self) -> String {
        self.command.join(" ")
    }

    /// Run the probe command and classify the outcome, applying no policy.
    ///
    /// Blocks until the child exits. Stdout and stderr are captured and
    /// combined; the environment is inherited.
    ///
    /// # Errors
    ///
    /// Returns [`PrereqError::InvalidRequirement`] for an empty command,
    /// or [`PrereqError::Io`] for spawn failures other than not-found
    /// (those classify as [`CheckStatus::Missing`]).
    pub fn evaluate(&self) -> Result<CheckStatus> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(PrereqError::InvalidRequirement {
                name: self.name.clone(),
                message: "command is empty".to_string(),
            });
        };

        let output = match Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CheckStatus::Missing);
            }
            Err(e) => return Err(e.into()),
        };

        if output.status.success() {
            return Ok(CheckStatus::Fulfilled);
        }

        Ok(CheckStatus::Failed {
            exit_code: output.status.code(),
            output: combine_output(&output.stdout, &output.stderr),
        })
    }

    /// Check the requirement, applying the `warn` policy.
    ///
    /// # Errors
    ///
    /// With `warn` false, a missing executable returns
    /// [`PrereqError::RequirementMissing`] and a nonzero exit returns
    /// [`PrereqError::RequirementFailed`]. With `warn` true, both cases
    /// emit a single warning carrying the same message as the strict
    /// error, and return `Ok(false)`.
    pub fn check(&self) -> Result<bool> {
        let status = self.evaluate()?;
        self.apply_policy(&status, true)
    }

    /// Turn a classification into the caller-facing result per `warn`.
    ///
    /// `fresh` is false when the status came from a cache and was
    /// already reported once; a lenient replay then stays silent.
    pub(crate) fn apply_policy(&self, status: &CheckStatus, fresh: bool) -> Result<bool> {
        let error = match status {
            CheckStatus::Fulfilled => return Ok(true),
            CheckStatus::Missing => PrereqError::RequirementMissing {
                name: self.name.clone(),
                command: self.rendered_command(),
            },
            CheckStatus::Failed { exit_code, output } => PrereqError::RequirementFailed {
                name: self.name.clone(),
                command: self.rendered_command(),
                exit_code: *exit_code,
                output: output.clone(),
            },
        };

        if self.warn {
            if fresh {
                tracing::warn!("{}", error);
            }
            Ok(false)
        } else {
            Err(error)
        }
    }
}

/// Combine captured stdout and stderr, decode lossily, and trim.
fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = Vec::with_capacity(stdout.len() + stderr.len());
    combined.extend_from_slice(stdout);
    combined.extend_from_slice(stderr);
    String::from_utf8_lossy(&combined).trim().to_string()
}
