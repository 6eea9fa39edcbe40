//! Configuration for genealogy behavior.

use crate::error::{GenealogyError, Result};
use serde::{Deserialize, Serialize};

/// What `create_with_parents` does with an empty parent list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyParentsPolicy {
    /// Fail with [`GenealogyError::NoParents`]
    #[default]
    Reject,
    /// Create an isolated virus with no parent edges.
    ///
    /// Nothing protects such a virus from being orphaned until the caller
    /// connects it, and [`check_invariants`](crate::VirusGenealogy::check_invariants)
    /// reports it as an orphan in the meantime.
    Allow,
}

/// Configuration for a [`VirusGenealogy`](crate::VirusGenealogy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenealogyConfig {
    /// Handling of creation requests without parents
    pub empty_parents: EmptyParentsPolicy,

    /// Cascades removing more viruses than this are logged at info level
    pub cascade_report_threshold: usize,
}

impl Default for GenealogyConfig {
    fn default() -> Self {
        Self {
            empty_parents: EmptyParentsPolicy::Reject,
            cascade_report_threshold: 64,
        }
    }
}

impl GenealogyConfig {
    /// Every non-stem virus must be created with a parent.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Parentless creation is allowed, for callers that connect right after.
    pub fn permissive() -> Self {
        Self {
            empty_parents: EmptyParentsPolicy::Allow,
            ..Default::default()
        }
    }

    /// Set the empty parent list policy
    pub fn with_empty_parents(mut self, policy: EmptyParentsPolicy) -> Self {
        self.empty_parents = policy;
        self
    }

    /// Set the cascade size above which removals are reported
    pub fn with_cascade_report_threshold(mut self, threshold: usize) -> Self {
        self.cascade_report_threshold = threshold;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GenealogyError::Config`] if the document is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GenealogyError::config("Failed to parse genealogy configuration", Some(e)))
    }
}
