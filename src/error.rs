//! Error types for client configuration.
//!
//! Configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials are rejected before a client is ever built. Errors raised
//! while talking to the webservice live in [`crate::clients::WebServiceError`].
//!
//! # Example
//!
//! ```rust
//! use prestashop_webservice::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`crate::WebServiceConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid PrestaShop webservice key.")]
    EmptyApiKey,

    /// Shop URL is invalid.
    #[error("Invalid shop URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://mystore.com').")]
    InvalidShopUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
    }

    #[test]
    fn test_invalid_shop_url_error_message() {
        let error = ConfigError::InvalidShopUrl {
            url: "mystore".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'mystore'"));
        assert!(message.contains("http or https"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _: &dyn std::error::Error = &ConfigError::EmptyApiKey;
    }
}
