//! Buffered HTTP response returned by the transport.

use std::borrow::Cow;

use bytes::Bytes;
use reqwest::Version;

use crate::clients::errors::ServiceStatusError;

/// The outcome of one executed request.
///
/// The body is read from the connection exactly once and kept in memory,
/// so debug logging and XML parsing share the same buffer.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// Protocol version the response arrived with.
    pub version: Version,
    /// HTTP status code.
    pub code: u16,
    /// Canonical reason phrase for the status, if known.
    pub reason: Option<&'static str>,
    /// Response headers in the order received.
    pub headers: Vec<(String, String)>,
    /// Raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates an HTTP/1.1 response from its parts.
    #[must_use]
    pub fn new(code: u16, headers: Vec<(String, String)>, body: impl Into<Bytes>) -> Self {
        let reason = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason());
        Self {
            version: Version::HTTP_11,
            code,
            reason,
            headers,
            body: body.into(),
        }
    }

    /// Sets the protocol version.
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Returns `true` for the two success codes, 200 and 201.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, 200 | 201)
    }

    /// Fails with the classified status unless the response succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceStatusError`] for every code other than 200 and 201.
    pub fn check_status(&self) -> Result<(), ServiceStatusError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(ServiceStatusError::from_code(self.code))
        }
    }

    /// Returns the status line, e.g. `HTTP/1.1 201 Created`.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.reason {
            Some(reason) => format!("{:?} {} {reason}", self.version, self.code),
            None => format!("{:?} {}", self.version, self.code),
        }
    }

    /// Returns the first value of header `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_and_201_are_ok() {
        for code in [200, 201] {
            let response = HttpResponse::new(code, Vec::new(), "");
            assert!(response.is_ok());
            assert!(response.check_status().is_ok());
        }
        for code in [202, 204, 301, 400, 401, 404, 405, 500] {
            let response = HttpResponse::new(code, Vec::new(), "");
            assert!(!response.is_ok());
            assert_eq!(response.check_status().unwrap_err().code, code);
        }
    }

    #[test]
    fn test_status_line_uses_canonical_reason() {
        assert_eq!(
            HttpResponse::new(201, Vec::new(), "").status_line(),
            "HTTP/1.1 201 Created"
        );
        assert_eq!(
            HttpResponse::new(599, Vec::new(), "").status_line(),
            "HTTP/1.1 599"
        );
    }

    #[test]
    fn test_status_line_reports_negotiated_version() {
        let response = HttpResponse::new(200, Vec::new(), "").with_version(Version::HTTP_2);
        assert_eq!(response.status_line(), "HTTP/2.0 200 OK");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            vec![("psws-version".to_string(), "8.1.0".to_string())],
            "",
        );
        assert_eq!(response.header("PSWS-Version"), Some("8.1.0"));
        assert_eq!(response.header("content-type"), None);
    }

    #[test]
    fn test_body_text_is_lossy() {
        let response = HttpResponse::new(200, Vec::new(), vec![b'o', b'k', 0xff]);
        assert_eq!(response.body_text(), "ok\u{fffd}");
    }
}
