//! Node selection over decoded JSON trees

pub mod engine;
pub mod selector_engine;

pub use engine::Selector;
pub use selector_engine::{SelectorEngine, node_type};
