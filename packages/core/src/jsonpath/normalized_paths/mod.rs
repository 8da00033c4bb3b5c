//! Path normalizer
//!
//! A path is `$` followed by any mix of `.name`, `['name']`, `["name"]` and
//! `[index]` accessors. Normalization strips quotes, turns `[` into `.`, drops
//! `]` and splits on `.`, producing an [`AccessorList`].

pub mod parser;
pub mod types;

pub use parser::normalize;
pub use types::AccessorList;
