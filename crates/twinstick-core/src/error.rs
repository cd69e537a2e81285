//! Configuration error types.
//!
//! Runtime paths never fail: guarded controller paths are no-ops. Errors only
//! surface while loading and validating a [`crate::config::GameConfig`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error enum for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has mistyped fields.
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A tuning value is outside its safe operating range.
    #[error("config value '{name}' = {value} is outside safe range {safe_range}")]
    UnsafeValue {
        /// Dotted path of the field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Returns an error unless `value` is finite and strictly positive.
pub fn require_positive(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::UnsafeValue {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is finite and not negative.
pub fn require_non_negative(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::UnsafeValue {
            name,
            value,
            safe_range: "[0.0, ∞)",
        })
    }
}
