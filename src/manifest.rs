//! Manifest loading and validation.
//!
//! A manifest is a YAML file declaring the requirements to check:
//!
//! ```yaml
//! requirements:
//!   - name: Git
//!     command: [git, --version]
//!   - name: Docker
//!     command: [docker, info]
//!     warn: true
//! ```

use crate::error::{PrereqError, Result};
use crate::requirement::Requirement;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest file name, looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "prereq.yml";

/// A declared set of requirements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Requirements in declaration order.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl Manifest {
    /// Load and validate a manifest from a YAML file.
    ///
    /// # Errors
    ///
    /// [`PrereqError::ManifestNotFound`] if the file does not exist,
    /// [`PrereqError::ManifestParse`] on invalid YAML, and
    /// [`PrereqError::ManifestValidation`] for structural problems.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PrereqError::ManifestNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let manifest: Manifest =
            serde_yaml::from_str(&contents).map_err(|e| PrereqError::ManifestParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate manifest structure: non-empty names and commands, no
    /// duplicate names.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for requirement in &self.requirements {
            if requirement.name.trim().is_empty() {
                return Err(PrereqError::ManifestValidation {
                    message: "requirement with empty name".to_string(),
                });
            }
            if requirement.command.is_empty() {
                return Err(PrereqError::ManifestValidation {
                    message: format!("requirement '{}' has an empty command", requirement.name),
                });
            }
            if !seen.insert(requirement.name.as_str()) {
                return Err(PrereqError::ManifestValidation {
                    message: format!("duplicate requirement name '{}'", requirement.name),
                });
            }
        }
        Ok(())
    }
}

/// Resolve the manifest path: an explicit path wins, otherwise the
/// default file name in the given directory.
pub fn resolve_path(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => cwd.join(DEFAULT_MANIFEST),
    }
}
