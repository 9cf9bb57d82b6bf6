// src/numerics/config.rs
// Limits for the bounded (`checked_*`) cofactor operations.

use std::collections::HashMap;

use crate::numerics::types::error::MatrixError;

/// Errors raised while parsing a [`NumericsConfig`] parameter string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed parameter: '{0}' is not of the form key=value")]
    MalformedEntry(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Unsupported parameter: {0}")]
    UnsupportedParameter(String),
}

/// Configuration for [`Matrix::checked_determinant`] and
/// [`Matrix::checked_inverse`].
///
/// Cofactor expansion costs O(n!), so callers that accept matrices from
/// elsewhere can cap the order they are willing to expand.
///
/// [`Matrix::checked_determinant`]: crate::Matrix::checked_determinant
/// [`Matrix::checked_inverse`]: crate::Matrix::checked_inverse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericsConfig {
    /// Largest square order the checked operations will expand
    pub max_cofactor_order: usize,
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self {
            max_cofactor_order: 8, // 8! = 40320 terms
        }
    }
}

impl NumericsConfig {
    /// Configuration for callers that only expect 2x2 to 4x4 input
    pub fn for_small_matrices() -> Self {
        Self {
            max_cofactor_order: 4,
        }
    }

    /// No limit; the checked operations behave like the plain ones
    pub fn unbounded() -> Self {
        Self {
            max_cofactor_order: usize::MAX,
        }
    }

    /// Parse configuration from a parameter string such as
    /// `"max_cofactor_order=6"`.
    ///
    /// Missing keys keep their defaults; unknown keys are rejected.
    pub fn from_parameters(parameters: &str) -> Result<Self, ConfigError> {
        let params = parse_parameters(parameters)?;
        let mut config = Self::default();

        for (key, value) in &params {
            match key.as_str() {
                "max_cofactor_order" => {
                    config.max_cofactor_order = match value.parse::<usize>() {
                        Ok(order) if order > 0 => order,
                        _ => {
                            return Err(ConfigError::InvalidValue {
                                key: key.clone(),
                                value: value.clone(),
                            })
                        }
                    };
                }
                _ => return Err(ConfigError::UnsupportedParameter(key.clone())),
            }
        }

        Ok(config)
    }

    pub(crate) fn check_order(&self, order: usize) -> Result<(), MatrixError> {
        if order > self.max_cofactor_order {
            tracing::debug!(order, limit = self.max_cofactor_order, "cofactor expansion over limit");
            return Err(MatrixError::OrderLimitExceeded {
                order,
                limit: self.max_cofactor_order,
            });
        }
        Ok(())
    }
}

/// Split a comma-separated `key=value` list into a map.
///
/// Whitespace around keys and values is ignored, as are empty entries.
pub fn parse_parameters(parameters: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut params = HashMap::new();
    for entry in parameters.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedEntry(entry.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::MalformedEntry(entry.to_string()));
        }
        params.insert(key.to_string(), value.trim().to_string());
    }
    Ok(params)
}
