//! HTTP request types produced by the [`RequestBuilder`](super::RequestBuilder).

use std::fmt;

/// HTTP methods used by the webservice client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET, used to retrieve resources.
    Get,
    /// HTTP POST, used to add resources.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Content type of a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// XML encoded as UTF-8 (`text/xml; charset=UTF-8`).
    Xml,
}

impl DataType {
    /// Returns the `Content-Type` header value for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Xml => "text/xml; charset=UTF-8",
        }
    }
}

/// A fully resolved request: method, target URL and optional body.
///
/// Built without any I/O; executing it is the client's job. Bodies are
/// streamed with chunked transfer encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// Absolute target URL including any query string.
    pub url: String,
    /// The request body, if any.
    pub body: Option<String>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn test_xml_content_type() {
        assert_eq!(DataType::Xml.as_content_type(), "text/xml; charset=UTF-8");
    }
}
