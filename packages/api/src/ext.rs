//! Extension methods on `serde_json::Value`
//!
//! Lets a decoded tree be queried in place: `root.select_path("$.a.b")`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use dollarpath_core::jsonpath::{self, JsonPathResult, PropertyAccessResult};

/// Path queries available directly on a decoded JSON value
///
/// Every method uses the default, unlimited [`Selector`](crate::Selector).
pub trait JsonPathExt {
    /// See [`get`](crate::get)
    ///
    /// # Errors
    ///
    /// Returns the selection error for `path`.
    fn select_path(&self, path: &str) -> JsonPathResult<&Value>;

    /// See [`is_null`](crate::is_null)
    ///
    /// # Errors
    ///
    /// Returns the selection error for `path`, absence included.
    fn path_is_null(&self, path: &str) -> JsonPathResult<bool>;

    /// See [`exists`](crate::exists)
    ///
    /// # Errors
    ///
    /// Returns non-absence selection errors for `path`.
    fn path_exists(&self, path: &str) -> JsonPathResult<bool>;

    /// See [`is_null_or_absent`](crate::is_null_or_absent)
    ///
    /// # Errors
    ///
    /// Returns non-absence selection errors for `path`.
    fn path_is_null_or_absent(&self, path: &str) -> JsonPathResult<bool>;

    /// See [`classify`](crate::classify)
    ///
    /// # Errors
    ///
    /// Returns non-absence selection errors for `path`.
    fn classify_path(&self, path: &str) -> JsonPathResult<PropertyAccessResult<'_>>;

    /// See [`get_as`](crate::get_as)
    ///
    /// # Errors
    ///
    /// Returns the selection error for `path` or a `Deserialization` error.
    fn select_path_as<T: DeserializeOwned>(&self, path: &str) -> JsonPathResult<T>;
}

impl JsonPathExt for Value {
    fn select_path(&self, path: &str) -> JsonPathResult<&Value> {
        jsonpath::get(self, path)
    }

    fn path_is_null(&self, path: &str) -> JsonPathResult<bool> {
        jsonpath::is_null(self, path)
    }

    fn path_exists(&self, path: &str) -> JsonPathResult<bool> {
        jsonpath::exists(self, path)
    }

    fn path_is_null_or_absent(&self, path: &str) -> JsonPathResult<bool> {
        jsonpath::is_null_or_absent(self, path)
    }

    fn classify_path(&self, path: &str) -> JsonPathResult<PropertyAccessResult<'_>> {
        jsonpath::classify(self, path)
    }

    fn select_path_as<T: DeserializeOwned>(&self, path: &str) -> JsonPathResult<T> {
        jsonpath::get_as(self, path).inspect_err(|e| {
            tracing::debug!(path, error = %e, "typed path extraction failed");
        })
    }
}
