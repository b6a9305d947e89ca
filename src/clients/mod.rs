//! Webservice client layer.
//!
//! # Overview
//!
//! - [`WebServiceClient`]: executes `get` and `add` operations
//! - [`OperationOptions`]: what to operate on (resource, id, URL, filters,
//!   shop scope, XML body)
//! - [`RequestBuilder`]: turns options into an [`HttpRequest`] without I/O
//! - [`HttpResponse`]: status, headers and the buffered body of a response
//! - [`WebServiceError`]: the four ways an operation can fail
//!
//! # Status Handling
//!
//! Only 200 and 201 count as success. Any other status becomes a
//! [`ServiceStatusError`] and the body is never parsed.

mod errors;
mod http_request;
mod http_response;
mod options;
mod request_builder;
mod webservice_client;

pub use errors::{BadParametersError, ServiceStatusError, WebServiceError};
pub use http_request::{DataType, HttpMethod, HttpRequest};
pub use http_response::HttpResponse;
pub use options::{OperationOptions, READ_QUERY_PARAMS, WRITE_QUERY_PARAMS};
pub use request_builder::RequestBuilder;
pub use webservice_client::{WebServiceClient, SDK_VERSION};
