//! Translation of [`OperationOptions`] into concrete [`HttpRequest`]s.
//!
//! The builder is a pure function of the shop URL and the options: it never
//! touches the network, so a missing `url`/`resource` or `postXml` is
//! reported before a connection is opened.

use crate::clients::errors::BadParametersError;
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::options::{OperationOptions, READ_QUERY_PARAMS, WRITE_QUERY_PARAMS};
use crate::config::ShopUrl;

/// Builds GET and POST requests relative to a shop root URL.
///
/// # Example
///
/// ```rust
/// use prestashop_webservice::{OperationOptions, RequestBuilder, ShopUrl};
///
/// let builder = RequestBuilder::new(&ShopUrl::new("http://mystore.com/").unwrap());
///
/// let request = builder
///     .build_get(&OperationOptions::for_resource("customers").display("[id,email]").limit("10"))
///     .unwrap();
/// assert_eq!(
///     request.url,
///     "http://mystore.com/api/customers?display=%5Bid%2Cemail%5D&limit=10"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    shop_url: String,
}

impl RequestBuilder {
    /// Creates a builder for the given shop.
    #[must_use]
    pub fn new(shop_url: &ShopUrl) -> Self {
        Self {
            shop_url: shop_url.as_ref().to_string(),
        }
    }

    /// Builds a GET request.
    ///
    /// An explicit `url` is used verbatim. Otherwise the URL is
    /// `{shop}/api/{resource}[/{id}]` followed by whichever of `filter`,
    /// `display`, `sort`, `limit`, `id_shop` and `id_group_shop` are set, in
    /// that order, each percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`BadParametersError::MissingTarget`] if neither `url` nor
    /// `resource` is set.
    pub fn build_get(&self, options: &OperationOptions) -> Result<HttpRequest, BadParametersError> {
        let url = if let Some(url) = &options.url {
            url.clone()
        } else {
            let resource = options
                .resource
                .as_deref()
                .ok_or(BadParametersError::MissingTarget)?;
            let mut url = self.resource_url(resource);
            if let Some(id) = &options.id {
                url.push('/');
                url.push_str(id);
            }
            append_query(url, options, &READ_QUERY_PARAMS)
        };

        Ok(HttpRequest {
            http_method: HttpMethod::Get,
            url,
            body: None,
            body_type: None,
        })
    }

    /// Builds a POST request carrying `postXml` as its body.
    ///
    /// The target is the explicit `url` when set, otherwise
    /// `{shop}/api/{resource}` (any `id` is ignored). `id_shop` and
    /// `id_group_shop` are appended as percent-encoded query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BadParametersError::MissingTarget`] if neither `url` nor
    /// `resource` is set, and [`BadParametersError::MissingPostXml`] if
    /// `postXml` is absent.
    pub fn build_add(&self, options: &OperationOptions) -> Result<HttpRequest, BadParametersError> {
        let target = match (&options.url, &options.resource) {
            (Some(url), _) => url.clone(),
            (None, Some(resource)) => self.resource_url(resource),
            (None, None) => return Err(BadParametersError::MissingTarget),
        };
        let body = options
            .post_xml
            .clone()
            .ok_or(BadParametersError::MissingPostXml)?;

        Ok(HttpRequest {
            http_method: HttpMethod::Post,
            url: append_query(target, options, &WRITE_QUERY_PARAMS),
            body: Some(body),
            body_type: Some(DataType::Xml),
        })
    }

    fn resource_url(&self, resource: &str) -> String {
        format!("{}/api/{resource}", self.shop_url)
    }
}

/// Appends the named options that are set, in `params` order.
fn append_query(mut url: String, options: &OperationOptions, params: &[&str]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|&key| {
            options
                .param(key)
                .map(|value| format!("{key}={}", urlencoding::encode(value)))
        })
        .collect();

    if !pairs.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&pairs.join("&"));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> RequestBuilder {
        RequestBuilder::new(&ShopUrl::new("http://mystore.com").unwrap())
    }

    #[test]
    fn test_get_by_id_has_no_query_string() {
        let request = builder()
            .build_get(&OperationOptions::for_resource("orders").id("1"))
            .unwrap();
        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "http://mystore.com/api/orders/1");
        assert!(request.body.is_none());
        assert!(request.body_type.is_none());
    }

    #[test]
    fn test_get_list_without_id() {
        let request = builder()
            .build_get(&OperationOptions::for_resource("customers"))
            .unwrap();
        assert_eq!(request.url, "http://mystore.com/api/customers");
    }

    #[test]
    fn test_get_appends_params_in_fixed_order() {
        let options = OperationOptions::for_resource("customers")
            .id_group_shop("3")
            .limit("10")
            .id_shop("2")
            .sort("[lastname_ASC]")
            .display("full")
            .filter("[1|5]");
        let request = builder().build_get(&options).unwrap();
        assert_eq!(
            request.url,
            "http://mystore.com/api/customers?filter=%5B1%7C5%5D&display=full\
             &sort=%5Blastname_ASC%5D&limit=10&id_shop=2&id_group_shop=3"
        );
    }

    #[test]
    fn test_get_only_present_params_appear() {
        let options = OperationOptions::for_resource("customers")
            .limit("10")
            .display("full");
        let request = builder().build_get(&options).unwrap();
        assert_eq!(
            request.url,
            "http://mystore.com/api/customers?display=full&limit=10"
        );
    }

    #[test]
    fn test_get_percent_encodes_values() {
        let options = OperationOptions::for_resource("products").limit("0, 5");
        let request = builder().build_get(&options).unwrap();
        assert_eq!(request.url, "http://mystore.com/api/products?limit=0%2C%205");
    }

    #[test]
    fn test_get_explicit_url_is_used_verbatim() {
        let options = OperationOptions::for_url("http://other.com/api/customers/1/")
            .resource("ignored")
            .limit("10");
        let request = builder().build_get(&options).unwrap();
        assert_eq!(request.url, "http://other.com/api/customers/1/");
    }

    #[test]
    fn test_get_without_target_fails() {
        let result = builder().build_get(&OperationOptions::new().id("1").limit("5"));
        assert_eq!(result, Err(BadParametersError::MissingTarget));
    }

    #[test]
    fn test_add_builds_xml_post() {
        let xml = "<prestashop><customer><firstname>John</firstname></customer></prestashop>";
        let request = builder()
            .build_add(&OperationOptions::for_resource("customers").post_xml(xml))
            .unwrap();
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.url, "http://mystore.com/api/customers");
        assert_eq!(request.body.as_deref(), Some(xml));
        assert_eq!(request.body_type, Some(DataType::Xml));
    }

    #[test]
    fn test_add_ignores_id_and_read_params() {
        let options = OperationOptions::for_resource("customers")
            .id("9")
            .display("full")
            .post_xml("<prestashop/>");
        let request = builder().build_add(&options).unwrap();
        assert_eq!(request.url, "http://mystore.com/api/customers");
    }

    #[test]
    fn test_add_appends_encoded_shop_scope() {
        let options = OperationOptions::for_resource("customers")
            .id_shop("1 2")
            .id_group_shop("3")
            .post_xml("<prestashop/>");
        let request = builder().build_add(&options).unwrap();
        assert_eq!(
            request.url,
            "http://mystore.com/api/customers?id_shop=1%202&id_group_shop=3"
        );
    }

    #[test]
    fn test_add_with_url_joins_existing_query() {
        let options = OperationOptions::for_url("http://mystore.com/api/customers?schema=blank")
            .id_shop("1")
            .post_xml("<prestashop/>");
        let request = builder().build_add(&options).unwrap();
        assert_eq!(
            request.url,
            "http://mystore.com/api/customers?schema=blank&id_shop=1"
        );
    }

    #[test]
    fn test_add_requires_post_xml() {
        let result = builder().build_add(&OperationOptions::for_resource("customers"));
        assert_eq!(result, Err(BadParametersError::MissingPostXml));
    }

    #[test]
    fn test_add_without_target_fails() {
        let result = builder().build_add(&OperationOptions::new().post_xml("<prestashop/>"));
        assert_eq!(result, Err(BadParametersError::MissingTarget));
    }
}
