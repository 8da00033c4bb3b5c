//! Null vs missing value semantics
//!
//! The JSON `null` value is distinct from a missing member or element. A path
//! may select a node whose value is `null`; that is different from a path
//! whose key or index does not exist.
//!
//! This module provides the predicates and the classification that expose
//! this distinction to deserialization code.

mod predicates;
mod property_access;

pub use property_access::PropertyAccessResult;
