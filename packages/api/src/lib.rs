//! # dollarpath
//!
//! Select values from an already decoded JSON tree with `$`-rooted
//! dot/bracket paths, and tell an explicit `null` apart from a missing key or
//! index.
//!
//! ```rust
//! use dollarpath::prelude::*;
//! use serde_json::json;
//!
//! let root = json!({"a": null, "items": [1, 2]});
//!
//! assert_eq!(dollarpath::get(&root, "$.items[1]")?, &json!(2));
//! assert!(dollarpath::is_null(&root, "$.a")?);
//! assert!(dollarpath::exists(&root, "$['a']")?);
//! assert!(!root.path_exists("$.b")?);
//! assert!(root.path_is_null_or_absent("$.b")?);
//! # Ok::<(), JsonPathError>(())
//! ```
//!
//! ## Path syntax
//!
//! `$` selects the root. Accessors are `.key`, `['key']`, `["key"]` and
//! `[index]`, freely mixed. Quotes and brackets are stripped before splitting
//! on `.`, so keys containing `.`, `[`, `]`, `'` or `"` cannot be addressed.
//! Wildcards, slices, filters and recursive descent are not supported.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod ext;
pub mod prelude;

pub use ext::JsonPathExt;

pub use dollarpath_core::config::{ConfigurationError, SelectorConfig};
pub use dollarpath_core::jsonpath::{
    AccessorList, ErrorKind, JsonPathError, JsonPathResult, PropertyAccessResult, Selector,
    classify, exists, get, get_as, get_opt_as, is_null, is_null_or_absent, normalize,
};
