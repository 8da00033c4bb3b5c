//! Path string normalization
//!
//! Folds the dot and bracket accessor forms into one dot-separated token
//! stream. There is no escaping: keys containing `.`, `[`, `]`, `'` or `"`
//! cannot be addressed.

use super::types::AccessorList;
use crate::jsonpath::error::{JsonPathError, JsonPathResult};

/// Normalize a `$`-rooted path into its accessor list
///
/// `$.a['b'][0]` and `$.a.b.0` produce the same tokens. The element before the
/// first separator is always discarded, so `$` alone yields an empty list and
/// `$.` yields a single empty token.
///
/// # Errors
///
/// Returns [`JsonPathError::InvalidPathPrefix`] if `path` does not start with `$`.
pub fn normalize(path: &str) -> JsonPathResult<AccessorList> {
    let Some(rest) = path.strip_prefix('$') else {
        log::debug!("rejecting path without $ prefix: {path:?}");
        return Err(JsonPathError::invalid_path_prefix(path));
    };

    let folded: String = rest
        .chars()
        .filter_map(|c| match c {
            '"' | '\'' | ']' => None,
            '[' => Some('.'),
            other => Some(other),
        })
        .collect();

    let tokens = AccessorList::from_tokens(folded.split('.').skip(1));
    log::trace!("normalized {path:?} into {} token(s)", tokens.depth());
    Ok(tokens)
}
