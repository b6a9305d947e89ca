//! Validated newtype wrappers for configuration values.
//!
//! These wrap raw strings and validate them on construction, so a
//! [`WebServiceClient`](crate::WebServiceClient) can never be built from an
//! empty key or a URL without a scheme.

use crate::error::ConfigError;
use std::fmt;

/// A validated PrestaShop webservice key.
///
/// The key is sent as the basic-auth username on every request. It is
/// masked in `Debug` output so it does not leak into logs.
///
/// # Example
///
/// ```rust
/// use prestashop_webservice::ApiKey;
///
/// let key = ApiKey::new("ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ").unwrap();
/// assert_eq!(key.as_ref(), "ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key.to_string()))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated shop root URL.
///
/// Resource URLs are built as `{shop_url}/api/{resource}`, so the stored
/// value never ends with `/`.
///
/// # Example
///
/// ```rust
/// use prestashop_webservice::ShopUrl;
///
/// let url = ShopUrl::new("http://mystore.com/").unwrap();
/// assert_eq!(url.as_ref(), "http://mystore.com");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "mystore.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ShopUrl {
    /// Creates a new validated shop URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopUrl`] if the URL has no `http` or
    /// `https` scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let url = raw.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidShopUrl { url: raw.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for ShopUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ShopUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
