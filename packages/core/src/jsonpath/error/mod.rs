//! JSONPath error handling module
//!
//! Error taxonomy shared by the normalizer, the selector, the null/absence
//! predicates and typed extraction.

mod constructors;
mod types;

pub use types::{ErrorKind, JsonPathError, JsonPathResult};
