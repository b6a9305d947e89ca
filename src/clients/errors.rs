//! Error types for webservice operations.
//!
//! Every public operation of [`WebServiceClient`](crate::WebServiceClient)
//! returns [`WebServiceError`], which has exactly four kinds:
//!
//! - [`WebServiceError::BadParameters`]: the options were incomplete; no
//!   request was sent
//! - [`WebServiceError::Transport`]: the request could not be sent or the
//!   response could not be read
//! - [`WebServiceError::Status`]: the server answered with a status other
//!   than 200 or 201
//! - [`WebServiceError::XmlParse`]: the response body was not well-formed XML
//!
//! The first and last point at client-side or data problems, the middle two
//! at server or network problems.
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_webservice::{OperationOptions, WebServiceError};
//!
//! match client.get(&OperationOptions::for_resource("orders").id("1")).await {
//!     Ok(doc) => println!("{}", client.document_to_string(&doc)?),
//!     Err(WebServiceError::Status(e)) if e.code == 404 => println!("no such order"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use thiserror::Error;

use crate::xml::XmlError;

/// Error returned when the operation options are missing required keys.
///
/// Raised while building the request, before any network activity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BadParametersError {
    /// Neither `url` nor `resource` was given.
    #[error("Bad parameters given: either 'url' or 'resource' is required.")]
    MissingTarget,

    /// A write was requested without `postXml`.
    #[error("Bad parameters given: 'postXml' is required to add a resource.")]
    MissingPostXml,
}

/// Error returned when the webservice answers with a non-success status.
///
/// Only 200 and 201 are successful; the body of any other response is never
/// parsed.
///
/// # Example
///
/// ```rust
/// use prestashop_webservice::clients::ServiceStatusError;
///
/// let error = ServiceStatusError::from_code(401);
/// assert_eq!(error.classification, "Unauthorized");
/// assert_eq!(
///     error.to_string(),
///     "This call to PrestaShop Web Services failed and returned an HTTP status of 401. That means: Unauthorized."
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("This call to PrestaShop Web Services failed and returned an HTTP status of {code}. That means: {classification}.")]
pub struct ServiceStatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Fixed description of the status.
    pub classification: String,
}

impl ServiceStatusError {
    /// Builds the error for `code` with its fixed classification text.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        let classification = match code {
            204 => "No content".to_string(),
            400 => "Bad Request".to_string(),
            401 => "Unauthorized".to_string(),
            404 => "Not Found".to_string(),
            405 => "Method Not Allowed".to_string(),
            500 => "Internal Server Error".to_string(),
            other => format!("Unexpected status {other}"),
        };
        Self {
            code,
            classification,
        }
    }
}

/// Unified error type for webservice operations.
#[derive(Debug, Error)]
pub enum WebServiceError {
    /// The options were missing required keys.
    #[error(transparent)]
    BadParameters(#[from] BadParametersError),

    /// Network, connection or TLS failure reported by the transport.
    #[error("Bad HTTP response: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status other than 200 or 201.
    #[error(transparent)]
    Status(#[from] ServiceStatusError),

    /// The response body could not be parsed as XML.
    #[error("Response XML parse error: {0}")]
    XmlParse(#[from] XmlError),
}

impl WebServiceError {
    /// Returns the HTTP status associated with the failure, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(e) => Some(e.code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::BadParameters(_) | Self::XmlParse(_) => None,
        }
    }

    /// Returns a short human-readable classification of the failure.
    #[must_use]
    pub fn classification(&self) -> &str {
        match self {
            Self::BadParameters(_) => "Bad parameters",
            Self::Transport(_) => "Transport failure",
            Self::Status(e) => &e.classification,
            Self::XmlParse(_) => "XML parse error",
        }
    }
}
