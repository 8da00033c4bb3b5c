//! Configured selector
//!
//! Ties path normalization, the configured depth limit and the selector
//! engine together. The predicates and typed extraction build on [`Selector::get`].

use serde_json::Value;

use super::selector_engine::SelectorEngine;
use crate::config::{ConfigResult, SelectorConfig, Validator};
use crate::jsonpath::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::normalized_paths::{AccessorList, normalize};

/// Path selector carrying a validated [`SelectorConfig`]
///
/// Holds no per-call state: every query re-normalizes its path, so repeated
/// calls with the same tree and path always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    /// Create a selector from a configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the configuration
    /// fails validation.
    pub fn new(config: SelectorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select the value at `path`, borrowing it from `root`
    ///
    /// # Errors
    ///
    /// Returns `InvalidPathPrefix` for a path not starting with `$`,
    /// `DepthLimitExceeded` when the configured limit is exceeded, or any
    /// traversal error from [`SelectorEngine::select`].
    pub fn get<'a>(&self, root: &'a Value, path: &str) -> JsonPathResult<&'a Value> {
        let tokens = normalize(path)?;
        self.select(root, &tokens)
    }

    /// Apply an already normalized accessor list to `node`
    ///
    /// # Errors
    ///
    /// Same as [`Selector::get`], minus the prefix check.
    pub fn select<'a>(&self, node: &'a Value, tokens: &AccessorList) -> JsonPathResult<&'a Value> {
        if let Some(limit) = self.config.max_depth {
            if tokens.depth() > limit {
                log::debug!("path {tokens} has {} accessors, limit is {limit}", tokens.depth());
                return Err(JsonPathError::depth_limit_exceeded(tokens.depth(), limit));
            }
        }
        SelectorEngine::select(node, tokens)
    }
}
