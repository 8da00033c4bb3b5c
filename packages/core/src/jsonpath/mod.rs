//! `$`-rooted path selection over decoded JSON
//!
//! Paths use a restricted dot/bracket syntax:
//!
//! ```text
//! path      := "$" accessor*
//! accessor  := "." key | "[" (quotedKey | index) "]"
//! quotedKey := "'" chars "'" | "\"" chars "\""
//! key       := [^.\[\]]+
//! index     := digit+
//! ```
//!
//! There are no wildcards, slices, filters or recursive descent, and no
//! escaping: keys containing `.`, `[`, `]`, `'` or `"` cannot be addressed.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use dollarpath_core::jsonpath;
//!
//! let root = json!({"store": {"book": [{"title": "A"}, {"title": "B"}]}});
//! assert_eq!(jsonpath::get(&root, "$.store.book[1].title")?, &json!("B"));
//! assert!(!jsonpath::exists(&root, "$.store.bicycle")?);
//! # Ok::<(), dollarpath_core::jsonpath::JsonPathError>(())
//! ```

pub mod core_evaluator;
pub mod deserializer;
pub mod error;
pub mod normalized_paths;
pub mod null_semantics;

pub use self::{
    core_evaluator::{Selector, SelectorEngine},
    error::{ErrorKind, JsonPathError, JsonPathResult},
    normalized_paths::{AccessorList, normalize},
    null_semantics::PropertyAccessResult,
};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Select the value at `path`, borrowing it from `root`
///
/// # Errors
///
/// `InvalidPathPrefix`, `KeyNotFound`, `IndexNotNumeric`, `IndexOutOfRange`
/// or `NotTraversable`, see [`JsonPathError`].
pub fn get<'a>(root: &'a Value, path: &str) -> JsonPathResult<&'a Value> {
    Selector::default().get(root, path)
}

/// Whether the value at `path` is `null`
///
/// # Errors
///
/// Propagates every error from [`get`].
pub fn is_null(root: &Value, path: &str) -> JsonPathResult<bool> {
    Selector::default().is_null(root, path)
}

/// Whether anything, `null` included, lives at `path`
///
/// # Errors
///
/// Propagates errors from [`get`] other than `KeyNotFound` and `IndexOutOfRange`.
pub fn exists(root: &Value, path: &str) -> JsonPathResult<bool> {
    Selector::default().exists(root, path)
}

/// Whether `path` is absent or `null`
///
/// # Errors
///
/// Propagates errors from [`exists`].
pub fn is_null_or_absent(root: &Value, path: &str) -> JsonPathResult<bool> {
    Selector::default().is_null_or_absent(root, path)
}

/// Classify the value at `path` as present, null or missing
///
/// # Errors
///
/// Propagates errors from [`exists`].
pub fn classify<'a>(root: &'a Value, path: &str) -> JsonPathResult<PropertyAccessResult<'a>> {
    Selector::default().classify(root, path)
}

/// Select the value at `path` and deserialize it into `T`
///
/// # Errors
///
/// Propagates errors from [`get`]; `Deserialization` on a type mismatch.
pub fn get_as<T: DeserializeOwned>(root: &Value, path: &str) -> JsonPathResult<T> {
    Selector::default().get_as(root, path)
}

/// Like [`get_as`], but `null` and absence yield `Ok(None)`
///
/// # Errors
///
/// Propagates errors from [`is_null_or_absent`] and [`get_as`].
pub fn get_opt_as<T: DeserializeOwned>(root: &Value, path: &str) -> JsonPathResult<Option<T>> {
    Selector::default().get_opt_as(root, path)
}
