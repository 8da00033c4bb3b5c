//! Configuration validation
//!
//! Validation trait and error type shared by selector configuration.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if a setting is outside
    /// its valid range.
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate an optional limit: `None` means unlimited, `Some(0)` is rejected
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the limit is `Some(0)`.
    pub fn validate_limit(limit: Option<usize>, name: &str) -> ConfigResult<()> {
        if limit == Some(0) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot be zero (use None for no limit)"
            )));
        }
        Ok(())
    }
}
