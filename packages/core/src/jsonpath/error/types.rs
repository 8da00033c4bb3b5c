//! JSON Path Error Types
//!
//! Core error types for path normalization, node selection and typed extraction.

/// Fieldless classification of a [`JsonPathError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Path does not start with `$`
    InvalidPathPrefix,
    /// Object step referenced an absent key
    KeyNotFound,
    /// Array step token is not an integer
    IndexNotNumeric,
    /// Array step index is negative or past the end
    IndexOutOfRange,
    /// Step applied to a scalar node
    NotTraversable,
    /// Accessor list longer than the configured depth limit
    DepthLimitExceeded,
    /// Selected value could not be deserialized into the requested type
    Deserialization,
}

/// Main JSON Path error type
///
/// Traversal errors carry the offending token and the dotted prefix of the
/// path that had already been resolved when the step failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonPathError {
    #[error("first char must be $: '{path}'")]
    InvalidPathPrefix { path: String },

    #[error("object key not found: '{key}' at {at}")]
    KeyNotFound { key: String, at: String },

    #[error("array index not number: '{token}' at {at}")]
    IndexNotNumeric { token: String, at: String },

    #[error("array index out of range: {index} at {at} (len {len})")]
    IndexOutOfRange { index: i64, len: usize, at: String },

    #[error("node is not object or array: cannot select '{token}' from {node_type} at {at}")]
    NotTraversable {
        token: String,
        node_type: &'static str,
        at: String,
    },

    #[error("path depth {depth} exceeds limit {limit}")]
    DepthLimitExceeded { depth: usize, limit: usize },

    #[error("cannot deserialize value at '{path}' into {target_type}: {message}")]
    Deserialization {
        path: String,
        target_type: &'static str,
        message: String,
    },
}

/// Result type for JSON Path operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    /// Classification of this error without its payload
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPathPrefix { .. } => ErrorKind::InvalidPathPrefix,
            Self::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            Self::IndexNotNumeric { .. } => ErrorKind::IndexNotNumeric,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::NotTraversable { .. } => ErrorKind::NotTraversable,
            Self::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            Self::Deserialization { .. } => ErrorKind::Deserialization,
        }
    }

    /// True when the error means "nothing lives at this path"
    ///
    /// Only a missing object key or an out-of-range array index count as
    /// absence. Every other kind is a genuine failure of the query.
    #[must_use]
    pub fn is_absence(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::KeyNotFound | ErrorKind::IndexOutOfRange
        )
    }
}
