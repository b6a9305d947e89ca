//! Operation options describing a single `get` or `add` call.

use serde::{Deserialize, Serialize};

/// Query parameters forwarded on reads, in the order they are appended.
pub const READ_QUERY_PARAMS: [&str; 6] = [
    "filter",
    "display",
    "sort",
    "limit",
    "id_shop",
    "id_group_shop",
];

/// Shop-scope parameters forwarded on writes, in the order they are appended.
pub const WRITE_QUERY_PARAMS: [&str; 2] = ["id_shop", "id_group_shop"];

/// Describes the target and parameters of one webservice operation.
///
/// Either `url` or `resource` must be set. `id` only applies together with
/// `resource`, and `post_xml` (serialized as `postXml`) is required by
/// writes and ignored by reads. When both `url` and `resource` are set the
/// explicit `url` wins.
///
/// Options are never modified by the client.
///
/// # Example
///
/// ```rust
/// use prestashop_webservice::OperationOptions;
///
/// let options = OperationOptions::for_resource("customers")
///     .display("full")
///     .limit("10");
/// assert_eq!(options.param("display"), Some("full"));
///
/// // From a loosely typed mapping; unknown keys are ignored.
/// let options = OperationOptions::from_pairs([
///     ("resource", "orders"),
///     ("id", "1"),
///     ("output_format", "JSON"),
/// ]);
/// assert_eq!(options.id.as_deref(), Some("1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationOptions {
    /// Resource name, e.g. `orders` or `customers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Identifier of a single resource entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Full URL overriding `resource` and `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// XML body of a write.
    #[serde(rename = "postXml", skip_serializing_if = "Option::is_none")]
    pub post_xml: Option<String>,
    /// Shop scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_shop: Option<String>,
    /// Shop group scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_group_shop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

impl OperationOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options targeting the named resource.
    #[must_use]
    pub fn for_resource(resource: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
            ..Self::default()
        }
    }

    /// Creates options targeting an explicit URL.
    #[must_use]
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Builds options from `(key, value)` pairs.
    ///
    /// Keys are matched against the recognized option names (`postXml` for
    /// the XML body); anything else is ignored. Later pairs override earlier
    /// ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            if let Some(slot) = options.slot_mut(key.as_ref()) {
                *slot = Some(value.into());
            }
        }
        options
    }

    /// Sets the resource name.
    #[must_use]
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Sets an explicit target URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the resource id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the XML body of a write.
    #[must_use]
    pub fn post_xml(mut self, xml: impl Into<String>) -> Self {
        self.post_xml = Some(xml.into());
        self
    }

    /// Sets the shop scope.
    #[must_use]
    pub fn id_shop(mut self, id_shop: impl Into<String>) -> Self {
        self.id_shop = Some(id_shop.into());
        self
    }

    /// Sets the shop group scope.
    #[must_use]
    pub fn id_group_shop(mut self, id_group_shop: impl Into<String>) -> Self {
        self.id_group_shop = Some(id_group_shop.into());
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Returns the value of a recognized option by its key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        let value = match key {
            "resource" => &self.resource,
            "id" => &self.id,
            "url" => &self.url,
            "postXml" => &self.post_xml,
            "id_shop" => &self.id_shop,
            "id_group_shop" => &self.id_group_shop,
            "filter" => &self.filter,
            "display" => &self.display,
            "sort" => &self.sort,
            "limit" => &self.limit,
            _ => return None,
        };
        value.as_deref()
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        let slot = match key {
            "resource" => &mut self.resource,
            "id" => &mut self.id,
            "url" => &mut self.url,
            "postXml" => &mut self.post_xml,
            "id_shop" => &mut self.id_shop,
            "id_group_shop" => &mut self.id_group_shop,
            "filter" => &mut self.filter,
            "display" => &mut self.display,
            "sort" => &mut self.sort,
            "limit" => &mut self.limit,
            _ => return None,
        };
        Some(slot)
    }
}

impl<K, V> FromIterator<(K, V)> for OperationOptions
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_fluent_setters() {
        let options = OperationOptions::for_resource("customers")
            .id("3")
            .filter("[1|5]")
            .display("full")
            .sort("[id_DESC]")
            .limit("10")
            .id_shop("1")
            .id_group_shop("2")
            .post_xml("<prestashop/>");

        for (key, expected) in [
            ("resource", "customers"),
            ("id", "3"),
            ("filter", "[1|5]"),
            ("display", "full"),
            ("sort", "[id_DESC]"),
            ("limit", "10"),
            ("id_shop", "1"),
            ("id_group_shop", "2"),
            ("postXml", "<prestashop/>"),
        ] {
            assert_eq!(options.param(key), Some(expected), "key {key}");
        }
        assert_eq!(options.param("url"), None);
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let options = OperationOptions::from_pairs([
            ("resource", "orders"),
            ("p", "ignored"),
            ("postXml", "<x/>"),
        ]);
        assert_eq!(
            options,
            OperationOptions::for_resource("orders").post_xml("<x/>")
        );
        assert_eq!(options.param("p"), None);
    }

    #[test]
    fn test_collect_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("url".to_string(), "http://mystore.com/api/orders/1".to_string());
        let options: OperationOptions = map.into_iter().collect();
        assert_eq!(options.url.as_deref(), Some("http://mystore.com/api/orders/1"));
    }

    #[test]
    fn test_deserialize_uses_post_xml_key_and_ignores_unknown() {
        let options: OperationOptions = serde_json::from_str(
            r#"{"resource":"customers","postXml":"<prestashop/>","schema":"blank"}"#,
        )
        .unwrap();
        assert_eq!(options.resource.as_deref(), Some("customers"));
        assert_eq!(options.post_xml.as_deref(), Some("<prestashop/>"));
    }

    #[test]
    fn test_serialize_skips_absent_options() {
        let json = serde_json::to_value(OperationOptions::for_resource("orders").id("1")).unwrap();
        assert_eq!(json, serde_json::json!({"resource": "orders", "id": "1"}));
    }
}
