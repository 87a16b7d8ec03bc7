//! Memoizing requirement checker.
//!
//! `RequirementChecker` evaluates requirements and caches results so the
//! same command checked multiple times only runs once per checker.

use crate::error::Result;
use crate::requirement::Requirement;
use crate::status::{CheckReport, CheckStatus};
use std::collections::HashMap;

/// Checks requirements, caching results keyed by command identity.
///
/// Two requirements with the same command share a cache entry even if
/// their names differ. The cache is owned and unsynchronized; concurrent
/// use from multiple threads needs external locking.
#[derive(Debug, Default)]
pub struct RequirementChecker {
    cache: HashMap<Vec<String>, CheckStatus>,
}

impl RequirementChecker {
    /// Create a checker with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a requirement, applying its `warn` policy.
    ///
    /// A cache hit skips re-invocation entirely: a cached `Fulfilled`
    /// returns true immediately, and a cached failure replays the same
    /// policy (strict re-raises from the cached diagnostics, lenient
    /// returns false without warning again).
    ///
    /// # Errors
    ///
    /// Same contract as [`Requirement::check`].
    pub fn check(&mut self, requirement: &Requirement) -> Result<bool> {
        let (status, cached) = self.lookup_or_evaluate(requirement)?;
        requirement.apply_policy(&status, !cached)
    }

    /// Classify a requirement with no policy, using the cache when possible.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors (empty command, non-not-found spawn
    /// failures). Those are not cached.
    pub fn status_of(&mut self, requirement: &Requirement) -> Result<CheckStatus> {
        let (status, _) = self.lookup_or_evaluate(requirement)?;
        Ok(status)
    }

    /// Classify a requirement, reporting whether the status was cached.
    pub(crate) fn lookup_or_evaluate(
        &mut self,
        requirement: &Requirement,
    ) -> Result<(CheckStatus, bool)> {
        if let Some(cached) = self.cache.get(&requirement.command) {
            tracing::debug!(
                "Requirement '{}' resolved from cache: {:?}",
                requirement.name,
                cached
            );
            return Ok((cached.clone(), true));
        }

        let status = requirement.evaluate()?;
        self.cache
            .insert(requirement.command.clone(), status.clone());
        Ok((status, false))
    }

    /// Check a batch of requirements, one report per requirement.
    ///
    /// Never fails fast on non-success: every requirement is classified
    /// and the caller decides what a gap means.
    ///
    /// # Errors
    ///
    /// Only evaluation errors (not failed checks) abort the batch.
    pub fn check_all(&mut self, requirements: &[Requirement]) -> Result<Vec<CheckReport>> {
        let mut reports = Vec::with_capacity(requirements.len());
        for requirement in requirements {
            let status = self.status_of(requirement)?;
            reports.push(CheckReport {
                name: requirement.name.clone(),
                status,
            });
        }
        Ok(reports)
    }

    /// Invalidate the cached result for a specific command.
    pub fn invalidate(&mut self, command: &[String]) {
        self.cache.remove(command);
    }

    /// Invalidate all cached results.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Number of cached entries.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
