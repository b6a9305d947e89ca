//! Configuration types for the webservice client.
//!
//! # Overview
//!
//! - [`WebServiceConfig`]: shop URL, API key and debug flag for one client
//! - [`WebServiceConfigBuilder`]: builder for [`WebServiceConfig`]
//! - [`ApiKey`]: a validated webservice key with masked debug output
//! - [`ShopUrl`]: a validated shop root URL
//!
//! # Example
//!
//! ```rust
//! use prestashop_webservice::{ApiKey, ShopUrl, WebServiceConfig};
//!
//! let config = WebServiceConfig::builder()
//!     .shop_url(ShopUrl::new("http://mystore.com/").unwrap())
//!     .api_key(ApiKey::new("ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ").unwrap())
//!     .debug(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.debug());
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ShopUrl};

use crate::error::ConfigError;

/// Credentials and behaviour switches for a [`crate::WebServiceClient`].
///
/// Immutable once built; the client takes ownership of it.
#[derive(Clone, Debug)]
pub struct WebServiceConfig {
    shop_url: ShopUrl,
    api_key: ApiKey,
    debug: bool,
    user_agent_prefix: Option<String>,
}

impl WebServiceConfig {
    /// Creates a new builder for constructing a `WebServiceConfig`.
    #[must_use]
    pub fn builder() -> WebServiceConfigBuilder {
        WebServiceConfigBuilder::new()
    }

    /// Returns the shop root URL.
    #[must_use]
    pub const fn shop_url(&self) -> &ShopUrl {
        &self.shop_url
    }

    /// Returns the webservice key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns whether every response is logged in full.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebServiceConfig>();
};

/// Builder for [`WebServiceConfig`].
///
/// `shop_url` and `api_key` are required. `debug` defaults to `false`.
#[derive(Debug, Default)]
pub struct WebServiceConfigBuilder {
    shop_url: Option<ShopUrl>,
    api_key: Option<ApiKey>,
    debug: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl WebServiceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop root URL (required).
    #[must_use]
    pub fn shop_url(mut self, url: ShopUrl) -> Self {
        self.shop_url = Some(url);
        self
    }

    /// Sets the webservice key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Enables or disables debug logging of every response.
    ///
    /// When enabled, the status line, headers and body of each response are
    /// emitted through `tracing` at debug level.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WebServiceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<WebServiceConfig, ConfigError> {
        let shop_url = self
            .shop_url
            .ok_or(ConfigError::MissingRequiredField { field: "shop_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(WebServiceConfig {
            shop_url,
            api_key,
            debug: self.debug.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_url() -> ShopUrl {
        ShopUrl::new("http://mystore.com").unwrap()
    }

    fn api_key() -> ApiKey {
        ApiKey::new("TESTKEY").unwrap()
    }

    #[test]
    fn test_builder_requires_shop_url() {
        let result = WebServiceConfig::builder().api_key(api_key()).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop_url" })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = WebServiceConfig::builder().shop_url(shop_url()).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = WebServiceConfig::builder()
            .shop_url(shop_url())
            .api_key(api_key())
            .build()
            .unwrap();

        assert_eq!(config.shop_url().as_ref(), "http://mystore.com");
        assert_eq!(config.api_key().as_ref(), "TESTKEY");
        assert!(!config.debug());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = WebServiceConfig::builder()
            .shop_url(shop_url())
            .api_key(api_key())
            .debug(true)
            .user_agent_prefix("Backoffice/2.1")
            .build()
            .unwrap();

        assert!(config.debug());
        assert_eq!(config.user_agent_prefix(), Some("Backoffice/2.1"));
    }

    #[test]
    fn test_config_debug_output_hides_key() {
        let config = WebServiceConfig::builder()
            .shop_url(shop_url())
            .api_key(api_key())
            .build()
            .unwrap();

        assert!(!format!("{config:?}").contains("TESTKEY"));
    }
}
