//! Existence and nullness predicates
//!
//! Each predicate only interprets the outcome of [`Selector::get`]; none of
//! them walks the tree on its own.

use serde_json::Value;

use crate::jsonpath::core_evaluator::Selector;
use crate::jsonpath::error::JsonPathResult;

impl Selector {
    /// Whether the value at `path` is `null`
    ///
    /// # Errors
    ///
    /// Propagates every error from [`Selector::get`], absence included.
    pub fn is_null(&self, root: &Value, path: &str) -> JsonPathResult<bool> {
        let value = self.get(root, path)?;
        Ok(value.is_null())
    }

    /// Whether anything, `null` included, lives at `path`
    ///
    /// A missing key or an out-of-range index answers `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Propagates every other error from [`Selector::get`].
    pub fn exists(&self, root: &Value, path: &str) -> JsonPathResult<bool> {
        match self.get(root, path) {
            Ok(_) => Ok(true),
            Err(e) if e.is_absence() => {
                log::trace!("{path:?} treated as absent: {e}");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Whether `path` is absent or `null`, i.e. would deserialize to a zero value
    ///
    /// # Errors
    ///
    /// Propagates non-absence errors from [`Selector::exists`].
    pub fn is_null_or_absent(&self, root: &Value, path: &str) -> JsonPathResult<bool> {
        if !self.exists(root, path)? {
            return Ok(true);
        }
        self.is_null(root, path)
    }
}
