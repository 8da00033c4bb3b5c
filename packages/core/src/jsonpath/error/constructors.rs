//! Error constructor functions
//!
//! Factory methods used by the normalizer and selector so call sites stay short.

use super::types::JsonPathError;

impl JsonPathError {
    pub fn invalid_path_prefix(path: impl Into<String>) -> Self {
        Self::InvalidPathPrefix { path: path.into() }
    }

    pub fn key_not_found(key: impl Into<String>, at: impl Into<String>) -> Self {
        Self::KeyNotFound {
            key: key.into(),
            at: at.into(),
        }
    }

    pub fn index_not_numeric(token: impl Into<String>, at: impl Into<String>) -> Self {
        Self::IndexNotNumeric {
            token: token.into(),
            at: at.into(),
        }
    }

    pub fn index_out_of_range(index: i64, len: usize, at: impl Into<String>) -> Self {
        Self::IndexOutOfRange {
            index,
            len,
            at: at.into(),
        }
    }

    pub fn not_traversable(
        token: impl Into<String>,
        node_type: &'static str,
        at: impl Into<String>,
    ) -> Self {
        Self::NotTraversable {
            token: token.into(),
            node_type,
            at: at.into(),
        }
    }

    #[must_use]
    pub fn depth_limit_exceeded(depth: usize, limit: usize) -> Self {
        Self::DepthLimitExceeded { depth, limit }
    }

    /// Creates a deserialization error for a value selected at `path`
    ///
    /// # Arguments
    /// * `path` - The path whose value failed to deserialize
    /// * `target_type` - Name of the requested Rust type
    /// * `source` - The underlying serde error
    pub fn deserialization(
        path: impl Into<String>,
        target_type: &'static str,
        source: &serde_json::Error,
    ) -> Self {
        Self::Deserialization {
            path: path.into(),
            target_type,
            message: source.to_string(),
        }
    }
}
