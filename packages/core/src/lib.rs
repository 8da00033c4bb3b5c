//! # dollarpath core
//!
//! Path normalizer, node selector and null/absence predicates for
//! `serde_json::Value` trees. The public facade lives in the `dollarpath`
//! crate; this crate holds the implementation.
//!
//! All operations are synchronous and pure: the tree is only borrowed, and no
//! state survives between calls.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod jsonpath;

pub use crate::config::{ConfigurationError, SelectorConfig};
pub use crate::jsonpath::{
    AccessorList, ErrorKind, JsonPathError, JsonPathResult, PropertyAccessResult, Selector,
};
