//! dollarpath Prelude
//!
//! The types most callers need in scope.

pub use crate::ext::JsonPathExt;

pub use dollarpath_core::config::{ConfigurationError, SelectorConfig, Validator};
pub use dollarpath_core::jsonpath::{
    AccessorList, ErrorKind, JsonPathError, JsonPathResult, PropertyAccessResult, Selector,
};

pub use serde_json::Value;
