//! Selector configuration
//!
//! The default configuration imposes no limits, which gives the plain
//! normalize-then-select behavior of the free functions.

use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// Tunables for a [`Selector`](crate::jsonpath::Selector)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Maximum number of accessors a path may contain; `None` for no limit
    pub max_depth: Option<usize>,
}

impl SelectorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject paths with more than `depth` accessors before traversal
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Remove the depth limit
    #[must_use]
    pub fn unlimited(mut self) -> Self {
        self.max_depth = None;
        self
    }
}

impl Validator for SelectorConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_limit(self.max_depth, "max_depth")
    }
}
