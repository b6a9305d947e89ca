//! Client for the PrestaShop webservice.
//!
//! Each operation runs the same pipeline: build the request from the
//! options, execute it, check the status, then parse the buffered body.
//! Any failure ends the call; nothing is retried.

use futures::{future, stream};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

use crate::clients::errors::WebServiceError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::options::OperationOptions;
use crate::clients::request_builder::RequestBuilder;
use crate::config::WebServiceConfig;
use crate::xml::{Document, XmlError};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for retrieving and adding webservice resources.
///
/// Holds one `reqwest::Client` for its whole lifetime. Every request
/// authenticates with basic auth, using the API key as user name and an
/// empty password.
///
/// # Thread Safety
///
/// `WebServiceClient` is `Send + Sync`. The transport pools and synchronizes
/// its connections internally, so one client can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use prestashop_webservice::{ApiKey, OperationOptions, ShopUrl, WebServiceClient, WebServiceConfig};
///
/// let config = WebServiceConfig::builder()
///     .shop_url(ShopUrl::new("http://mystore.com/")?)
///     .api_key(ApiKey::new("ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ")?)
///     .build()?;
/// let client = WebServiceClient::new(config)?;
///
/// let order = client.get(&OperationOptions::for_resource("orders").id("1")).await?;
/// println!("{}", client.document_to_string(&order)?);
/// ```
#[derive(Debug)]
pub struct WebServiceClient {
    client: reqwest::Client,
    request_builder: RequestBuilder,
    config: WebServiceConfig,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebServiceClient>();
};

impl WebServiceClient {
    /// Creates a client for the configured shop.
    ///
    /// # Errors
    ///
    /// Returns [`WebServiceError::Transport`] if the HTTP client cannot be
    /// created, for example when the user agent prefix is not a valid header
    /// value.
    pub fn new(config: WebServiceConfig) -> Result<Self, WebServiceError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}PrestaShop Webservice Library v{SDK_VERSION} | Rust");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("text/xml"));

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            client,
            request_builder: RequestBuilder::new(config.shop_url()),
            config,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &WebServiceConfig {
        &self.config
    }

    /// Returns the request builder bound to this client's shop.
    #[must_use]
    pub const fn request_builder(&self) -> &RequestBuilder {
        &self.request_builder
    }

    /// Retrieves a resource (GET).
    ///
    /// `options` must carry either `url` (used verbatim) or `resource`, plus
    /// optionally `id`, `filter`, `display`, `sort`, `limit`, `id_shop` and
    /// `id_group_shop`.
    ///
    /// # Errors
    ///
    /// - [`WebServiceError::BadParameters`] if neither `url` nor `resource`
    ///   is set; no request is sent
    /// - [`WebServiceError::Transport`] on network failure
    /// - [`WebServiceError::Status`] for any status other than 200 or 201
    /// - [`WebServiceError::XmlParse`] if the body is not well-formed XML
    pub async fn get(&self, options: &OperationOptions) -> Result<Document, WebServiceError> {
        let request = self.request_builder.build_get(options)?;
        self.send(request).await
    }

    /// Adds a resource (POST) with `postXml` as the request body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), and additionally
    /// [`WebServiceError::BadParameters`] if `postXml` is missing.
    pub async fn add(&self, options: &OperationOptions) -> Result<Document, WebServiceError> {
        let request = self.request_builder.build_add(options)?;
        self.send(request).await
    }

    /// Renders a document as 2-space indented XML.
    ///
    /// Independent of any request; useful for logging and inspection.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the writer fails.
    #[allow(clippy::unused_self)]
    pub fn document_to_string(&self, doc: &Document) -> Result<String, XmlError> {
        doc.to_pretty_string()
    }

    async fn send(&self, request: HttpRequest) -> Result<Document, WebServiceError> {
        let response = self.execute(request).await?;
        response.check_status()?;
        Ok(Document::parse(&response.body)?)
    }

    /// Sends `request` and reads the whole response body into memory.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, WebServiceError> {
        tracing::trace!(method = %request.http_method, url = %request.url, "sending webservice request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        }
        .basic_auth(self.config.api_key().as_ref(), None::<&str>);

        if let Some(body_type) = request.body_type {
            req_builder = req_builder.header(CONTENT_TYPE, body_type.as_content_type());
        }

        // A streamed body has no known length, so it goes out chunked.
        if let Some(body) = request.body {
            let chunks = stream::once(future::ready(Ok::<_, std::io::Error>(body)));
            req_builder = req_builder.body(reqwest::Body::wrap_stream(chunks));
        }

        let res = req_builder.send().await?;
        let version = res.version();
        let code = res.status().as_u16();
        let headers: Vec<(String, String)> = res
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = res.bytes().await?;

        let response = HttpResponse::new(code, headers, body).with_version(version);
        if self.config.debug() {
            log_response(&response);
        }
        Ok(response)
    }
}

fn log_response(response: &HttpResponse) {
    tracing::debug!("Status: {}", response.status_line());
    tracing::debug!("====================Header======================");
    for (name, value) in &response.headers {
        tracing::debug!("{name} : {value}");
    }
    tracing::debug!("====================ResponseBody================");
    tracing::debug!("{}", response.body_text());
}
