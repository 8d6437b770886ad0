//
//  jenkins-cli
//  api/url_builder.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request URL construction
//!
//! Composes the server address, a resource path and a decoding [`Format`]
//! into a fully qualified request URL. JSON resources are read through the
//! `/api/json` endpoint that Jenkins exposes under every model object, while
//! configuration documents are addressed verbatim.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Suffix appended to resource paths decoded as JSON.
pub const API_SUFFIX: &str = "/api/json";

/// Decoding format of a resource, which also decides its URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Read through the JSON remote API (`{path}/api/json`)
    Json,
    /// Configuration documents, addressed verbatim (`{path}`)
    Xml,
}

/// Ordered query parameters.
///
/// Keys are kept sorted and each key may carry several values, so encoding a
/// given set of parameters always yields the same query string.
///
/// # Example
///
/// ```rust
/// use jenkins_cli::api::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.insert("TARGET", "release");
/// params.insert("BRANCH", "main");
/// assert_eq!(params.encode(), "BRANCH=main&TARGET=release");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value for `key`, keeping any values already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.entry(key.into()).or_default().push(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.values().map(Vec::len).sum()
    }

    /// Returns the first value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded`,
    /// sorted by key with values in insertion order.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.values {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Builds the request URL for a resource read.
///
/// # Parameters
///
/// * `base_url` - Server address without a trailing slash
/// * `path` - Resource path, empty for the root resource
/// * `format` - [`Format::Json`] appends [`API_SUFFIX`]; [`Format::Xml`] uses the path verbatim
/// * `params` - Optional query parameters; appended after `?` only when they encode to a non-empty string
///
/// Path segments are not escaped. Resource names are interpolated into `path`
/// by the caller, so a name containing `/`, `?` or `#` produces a malformed URL.
///
/// # Example
///
/// ```rust
/// use jenkins_cli::api::{build_url, Format, QueryParams};
///
/// let base = "https://ci.example.com";
/// assert_eq!(build_url(base, "", Format::Json, None), "https://ci.example.com/api/json");
///
/// let params: QueryParams = [("depth", "1")].into_iter().collect();
/// assert_eq!(
///     build_url(base, "/queue", Format::Json, Some(&params)),
///     "https://ci.example.com/queue/api/json?depth=1"
/// );
/// ```
pub fn build_url(base_url: &str, path: &str, format: Format, params: Option<&QueryParams>) -> String {
    let url = match format {
        Format::Json => format!("{}{}{}", base_url, path, API_SUFFIX),
        Format::Xml => format!("{}{}", base_url, path),
    };
    with_query(url, params)
}

/// Builds the URL of an action endpoint such as `build` or `createItem`.
///
/// Actions are addressed verbatim; the API suffix only applies to reads.
///
/// ```rust
/// use jenkins_cli::api::{action_url, QueryParams};
///
/// let params: QueryParams = [("name", "demo")].into_iter().collect();
/// assert_eq!(
///     action_url("https://ci.example.com", "/createItem", Some(&params)),
///     "https://ci.example.com/createItem?name=demo"
/// );
/// ```
pub fn action_url(base_url: &str, path: &str, params: Option<&QueryParams>) -> String {
    with_query(format!("{}{}", base_url, path), params)
}

fn with_query(mut url: String, params: Option<&QueryParams>) -> String {
    if let Some(params) = params {
        let query = params.encode();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://ci.local:8080";

    #[test]
    fn test_json_suffix() {
        assert_eq!(
            build_url(BASE, "/job/core", Format::Json, None),
            "http://ci.local:8080/job/core/api/json"
        );
    }

    #[test]
    fn test_xml_is_verbatim() {
        assert_eq!(
            build_url(BASE, "/job/core/config.xml", Format::Xml, None),
            "http://ci.local:8080/job/core/config.xml"
        );
    }

    #[test]
    fn test_empty_params_leave_url_unchanged() {
        let params = QueryParams::new();
        assert_eq!(
            build_url(BASE, "/queue", Format::Json, Some(&params)),
            "http://ci.local:8080/queue/api/json"
        );
    }

    #[test]
    fn test_query_is_sorted_and_encoded() {
        let mut params = QueryParams::new();
        params.insert("zeta", "last one");
        params.insert("alpha", "a&b");
        params.insert("alpha", "c");
        assert_eq!(params.encode(), "alpha=a%26b&alpha=c&zeta=last+one");
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("alpha"), Some("a&b"));
    }

    #[test]
    fn test_encoding_is_stable() {
        let first: QueryParams = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let second: QueryParams = [("c", "3"), ("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(first.encode(), second.encode());
        assert_eq!(
            action_url(BASE, "/job/x/buildWithParameters", Some(&first)),
            "http://ci.local:8080/job/x/buildWithParameters?a=1&b=2&c=3"
        );
    }

    #[test]
    fn test_names_are_not_escaped() {
        let url = build_url(BASE, &format!("/job/{}", "a b/c"), Format::Json, None);
        assert_eq!(url, "http://ci.local:8080/job/a b/c/api/json");
    }
}
