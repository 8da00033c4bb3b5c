//! Selector application engine
//!
//! Walks a decoded JSON tree one accessor at a time. Each token is resolved
//! against the node it lands on: a key for objects, a decimal index for
//! arrays. Scalars cannot be stepped into.

use serde_json::Value;

use crate::jsonpath::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::normalized_paths::AccessorList;

/// Engine for applying an accessor list to a JSON value
pub struct SelectorEngine;

impl SelectorEngine {
    /// Resolve `tokens` against `node`, borrowing the terminal value
    ///
    /// An empty list returns `node` itself. The returned value may be `null`.
    ///
    /// # Errors
    ///
    /// - `KeyNotFound` if an object has no member named by the token
    /// - `IndexNotNumeric` if an array token is not a decimal integer
    /// - `IndexOutOfRange` if an array index is negative or past the end
    /// - `NotTraversable` if a token is applied to a scalar
    pub fn select<'a>(node: &'a Value, tokens: &AccessorList) -> JsonPathResult<&'a Value> {
        let mut current = node;

        for (step, token) in tokens.iter().enumerate() {
            current = Self::apply_token(current, token, step, tokens)?;
        }

        Ok(current)
    }

    fn apply_token<'a>(
        node: &'a Value,
        token: &str,
        step: usize,
        tokens: &AccessorList,
    ) -> JsonPathResult<&'a Value> {
        match node {
            Value::Object(map) => map.get(token).ok_or_else(|| {
                log::trace!("key {token:?} missing at {}", tokens.prefix(step));
                JsonPathError::key_not_found(token, tokens.prefix(step))
            }),
            Value::Array(items) => {
                let Ok(index) = token.parse::<i64>() else {
                    return Err(JsonPathError::index_not_numeric(token, tokens.prefix(step)));
                };
                usize::try_from(index)
                    .ok()
                    .and_then(|i| items.get(i))
                    .ok_or_else(|| {
                        log::trace!(
                            "index {index} outside 0..{} at {}",
                            items.len(),
                            tokens.prefix(step)
                        );
                        JsonPathError::index_out_of_range(index, items.len(), tokens.prefix(step))
                    })
            }
            scalar => Err(JsonPathError::not_traversable(
                token,
                node_type(scalar),
                tokens.prefix(step),
            )),
        }
    }
}

/// Human-readable name of a JSON node's type
#[must_use]
pub fn node_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
