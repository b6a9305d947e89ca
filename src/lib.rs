//! # PrestaShop Webservice Rust Client
//!
//! A client for the PrestaShop webservice, a REST API that exchanges XML
//! documents over HTTP.
//!
//! ## Overview
//!
//! - Validated configuration via [`WebServiceConfig`] and
//!   [`WebServiceConfigBuilder`]
//! - Basic-auth authentication with the webservice key
//! - URL construction from [`OperationOptions`] (resource, id, filter,
//!   display, sort, limit and shop scope)
//! - `get` and `add` operations returning parsed XML [`Document`]s
//! - Typed failures through [`WebServiceError`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prestashop_webservice::{
//!     ApiKey, OperationOptions, ShopUrl, WebServiceClient, WebServiceConfig,
//! };
//!
//! let config = WebServiceConfig::builder()
//!     .shop_url(ShopUrl::new("http://mystore.com/")?)
//!     .api_key(ApiKey::new("ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ")?)
//!     .build()?;
//! let client = WebServiceClient::new(config)?;
//!
//! // GET http://mystore.com/api/customers?display=full&limit=10
//! let customers = client
//!     .get(&OperationOptions::for_resource("customers").display("full").limit("10"))
//!     .await?;
//!
//! // POST http://mystore.com/api/customers
//! let created = client
//!     .add(
//!         &OperationOptions::for_resource("customers")
//!             .post_xml("<prestashop><customer>...</customer></prestashop>"),
//!     )
//!     .await?;
//! println!("{}", client.document_to_string(&created)?);
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use prestashop_webservice::WebServiceError;
//!
//! match client.get(&options).await {
//!     Ok(doc) => { /* use the document */ }
//!     Err(WebServiceError::BadParameters(e)) => { /* fix the options */ }
//!     Err(WebServiceError::Status(e)) => println!("{} {}", e.code, e.classification),
//!     Err(WebServiceError::Transport(e)) => { /* network problem */ }
//!     Err(WebServiceError::XmlParse(e)) => { /* unexpected body */ }
//! }
//! ```
//!
//! ## Debugging
//!
//! With [`WebServiceConfigBuilder::debug`] enabled, the status line, headers
//! and body of every response are emitted through `tracing` at debug level.
//! The library never installs a subscriber.

pub mod clients;
pub mod config;
pub mod error;
pub mod xml;

pub use config::{ApiKey, ShopUrl, WebServiceConfig, WebServiceConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    BadParametersError, DataType, HttpMethod, HttpRequest, HttpResponse, OperationOptions,
    RequestBuilder, ServiceStatusError, WebServiceClient, WebServiceError,
};
pub use xml::{Document, Element, Node, XmlError};
