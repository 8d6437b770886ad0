//
//  jenkins-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Jenkins remote API
//!
//! This module provides the dispatch layer every resource operation goes
//! through: URL construction, credential injection, one transport round trip,
//! status checking and decoding.
//!
//! ## Features
//!
//! - Injectable [`Transport`], with [`HttpTransport`] as the default
//! - HTTP Basic authentication on every request
//! - JSON decoding for model objects, XML for configuration documents
//! - Queue item resolution for build triggers

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::common::{JenkinsError, Result};
use super::decode::{self, PendingItem};
use super::documents::{self, Document};
use super::queue::QueueItem;
use super::transport::{HttpTransport, RawResponse, Transport, TransportRequest};
use super::url_builder::{action_url, build_url, Format, QueryParams};
use crate::auth::Credentials;

/// Content type of configuration documents sent to the server.
const XML_CONTENT_TYPE: &str = "application/xml";

/// The client for a single Jenkins server.
///
/// A client owns the server address, the [`Credentials`] and the
/// [`Transport`]. It holds no other state, so one instance can be shared
/// between threads and used for any number of calls. Each call performs one
/// blocking round trip (two for build triggers that need queue resolution).
///
/// # Creating a Client
///
/// ```rust,no_run
/// use jenkins_cli::api::JenkinsClient;
/// use jenkins_cli::auth::Credentials;
///
/// let client = JenkinsClient::new(
///     "https://ci.example.com",
///     Credentials::new("deploy-bot", "11a2b3c4d5e6f7"),
/// )?;
/// for job in client.list_jobs()? {
///     println!("{}", job.name);
/// }
/// # Ok::<(), jenkins_cli::api::JenkinsError>(())
/// ```
///
/// # Resource names
///
/// Job and view names are interpolated into request paths as given. They are
/// not validated or escaped, so a name containing `/`, `?` or `#` addresses a
/// different resource or produces a malformed URL. Callers that accept names
/// from untrusted input must check them first.
#[derive(Clone)]
pub struct JenkinsClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    credentials: Credentials,
}

impl std::fmt::Debug for JenkinsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JenkinsClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl JenkinsClient {
    /// Creates a client that talks to `base_url` over [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`JenkinsError::InvalidUrl`] if `base_url` is not an absolute
    /// URL, or [`JenkinsError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Self::with_transport(base_url, credentials, HttpTransport::new()?)
    }

    /// Creates a client that sends its requests through `transport`.
    ///
    /// Trailing slashes are trimmed from `base_url`.
    pub fn with_transport(
        base_url: impl Into<String>,
        credentials: Credentials,
        transport: impl Transport + 'static,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|e| JenkinsError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            transport: Arc::new(transport),
            base_url,
            credentials,
        })
    }

    /// Returns the server address, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the URL a resource read for `path` would be sent to.
    pub fn request_url(&self, path: &str, format: Format, params: Option<&QueryParams>) -> String {
        build_url(&self.base_url, path, format, params)
    }

    /// Returns the URL an action POST for `path` would be sent to.
    pub fn action_url(&self, path: &str, params: Option<&QueryParams>) -> String {
        action_url(&self.base_url, path, params)
    }

    /// Authenticates and sends one request, then applies the status policy.
    fn send(&self, request: TransportRequest) -> Result<RawResponse> {
        let mut request = request;
        self.credentials.apply(&mut request);

        debug!(method = %request.method, url = %request.url, "Sending request");
        let url = request.url.clone();
        let response = self.transport.execute(request)?;
        trace!(status = response.status.as_u16(), bytes = response.body.len(), "Received response");

        decode::check_status(&url, response)
    }

    /// GETs a JSON resource and decodes it into `T`.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, path: &str, params: Option<&QueryParams>) -> Result<T> {
        self.get(path, Format::Json, params)
    }

    /// GETs a configuration document and decodes it into `D`.
    ///
    /// A document with a different root element is a decode error.
    pub(crate) fn get_document<D: Document>(&self, path: &str) -> Result<D> {
        let url = self.request_url(path, Format::Xml, None);
        let response = self.send(TransportRequest::new(Method::GET, &url))?;
        documents::parse(decode::xml_text(&url, &response)?, &url)
    }

    /// GETs a configuration document as text, exactly as the server sent it.
    pub(crate) fn get_xml_text(&self, path: &str) -> Result<String> {
        let url = self.request_url(path, Format::Xml, None);
        let response = self.send(TransportRequest::new(Method::GET, &url))?;
        decode::xml_text(&url, &response).map(str::to_string)
    }

    fn get<T: DeserializeOwned>(&self, path: &str, format: Format, params: Option<&QueryParams>) -> Result<T> {
        let url = self.request_url(path, format, params);
        let response = self.send(TransportRequest::new(Method::GET, &url))?;
        decode::decode(format, &url, &response)
    }

    /// POSTs to an action endpoint and discards the response body.
    pub(crate) fn post(&self, path: &str, params: Option<&QueryParams>) -> Result<()> {
        let url = self.action_url(path, params);
        self.send(TransportRequest::new(Method::POST, url))?;
        Ok(())
    }

    /// POSTs a configuration document serialized as XML.
    pub(crate) fn post_xml<D: Document>(&self, path: &str, params: Option<&QueryParams>, document: &D) -> Result<()> {
        self.post_xml_text(path, params, documents::encode(document)?)
    }

    /// POSTs XML text as the request body, byte for byte.
    pub(crate) fn post_xml_text(&self, path: &str, params: Option<&QueryParams>, xml: impl Into<Vec<u8>>) -> Result<()> {
        let url = self.action_url(path, params);
        let request = TransportRequest::new(Method::POST, url).with_body(xml.into(), XML_CONTENT_TYPE);
        self.send(request)?;
        Ok(())
    }

    /// POSTs to a build trigger endpoint and resolves the queue item it created.
    ///
    /// When the server answers with an empty body, the queue item number is
    /// taken from the `Location` header and fetched with a second request.
    pub(crate) fn post_for_queue_item(&self, path: &str, params: Option<&QueryParams>) -> Result<QueueItem> {
        let url = self.action_url(path, params);
        let response = self.send(TransportRequest::new(Method::POST, &url))?;

        match decode::pending_queue_item(&self.base_url, &url, &response)? {
            PendingItem::Inline(item) => Ok(item),
            PendingItem::Queued(number) => {
                debug!(number, "Resolving queued build");
                self.get_queue_item(number)
            }
        }
    }

    /// GETs an absolute URL and returns the body bytes untouched.
    pub(crate) fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send(TransportRequest::new(Method::GET, url))?;
        Ok(response.body)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport for unit tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use reqwest::header::{HeaderValue, LOCATION};
    use reqwest::StatusCode;

    use super::*;

    /// Replays canned responses in order and records every request.
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        responses: Arc<Mutex<VecDeque<RawResponse>>>,
        requests: Arc<Mutex<Vec<TransportRequest>>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, status: u16, body: &str) -> &Self {
            let status = StatusCode::from_u16(status).unwrap();
            self.responses
                .lock()
                .unwrap()
                .push_back(RawResponse::new(status, body));
            self
        }

        pub fn respond_bytes(&self, status: u16, body: Vec<u8>) -> &Self {
            let status = StatusCode::from_u16(status).unwrap();
            self.responses
                .lock()
                .unwrap()
                .push_back(RawResponse::new(status, body));
            self
        }

        pub fn respond_location(&self, status: u16, location: &'static str) -> &Self {
            let mut response = RawResponse::new(StatusCode::from_u16(status).unwrap(), "");
            response
                .headers
                .insert(LOCATION, HeaderValue::from_static(location));
            self.responses.lock().unwrap().push_back(response);
            self
        }

        pub fn requests(&self) -> Vec<TransportRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn urls(&self) -> Vec<String> {
            self.requests().into_iter().map(|r| r.url).collect()
        }
    }

    impl Transport for FakeTransport {
        fn execute(&self, request: TransportRequest) -> Result<RawResponse> {
            self.requests.lock().unwrap().push(request);
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no canned response left"))
        }
    }

    pub const BASE: &str = "http://ci.local:8080";

    /// A client wired to a fresh fake transport.
    pub fn client() -> (JenkinsClient, FakeTransport) {
        let fake = FakeTransport::new();
        let client = JenkinsClient::with_transport(BASE, Credentials::new("alice", "secret"), fake.clone()).unwrap();
        (client, fake)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{client, FakeTransport, BASE};
    use super::*;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

    #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq)]
    #[serde(rename = "thing")]
    struct Thing {
        name: String,
    }

    impl Document for Thing {
        const ROOT: &'static str = "thing";
    }

    #[test]
    fn test_trims_trailing_slash() {
        let client = JenkinsClient::with_transport(
            "http://ci.local:8080///",
            Credentials::anonymous(),
            FakeTransport::new(),
        )
        .unwrap();
        assert_eq!(client.base_url(), BASE);
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = JenkinsClient::with_transport("ci.local", Credentials::anonymous(), FakeTransport::new()).unwrap_err();
        assert!(matches!(err, JenkinsError::InvalidUrl(_)));
    }

    #[test]
    fn test_every_request_is_authenticated() {
        let (client, fake) = client();
        fake.respond(200, r#"{"name":"a"}"#).respond(200, "").respond(200, "bytes");

        let _: Thing = client.get_json("/job/a", None).unwrap();
        client.post("/view/all/addJobToView", None).unwrap();
        client.get_bytes("http://ci.local:8080/job/a/1/consoleText").unwrap();

        for request in fake.requests() {
            assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Basic YWxpY2U6c2VjcmV0");
        }
    }

    #[test]
    fn test_json_status_failure() {
        let (client, fake) = client();
        fake.respond(404, r#"{"name":"ignored"}"#);
        let err = client.get_json::<Thing>("/job/missing", None).unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_xml_status_failure_ignores_body() {
        let (client, fake) = client();
        fake.respond(500, "<thing><name>looks valid</name></thing>");
        let err = client.get_document::<Thing>("/job/a/config.xml").unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_document_root_is_checked() {
        let (client, fake) = client();
        fake.respond(200, "<project><name>a</name></project>");
        let err = client.get_document::<Thing>("/job/a/config.xml").unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("<project>"));
    }

    #[test]
    fn test_xml_text_is_untouched() {
        let (client, fake) = client();
        let xml = "<?xml version='1.1' encoding='UTF-8'?>\n<project>\n  <builders/>\n</project>\n";
        fake.respond(200, xml).respond(200, "");

        let text = client.get_xml_text("/job/a/config.xml").unwrap();
        assert_eq!(text, xml);

        client.post_xml_text("/job/a/config.xml", None, text).unwrap();
        let request = &fake.requests()[1];
        assert_eq!(request.url, "http://ci.local:8080/job/a/config.xml");
        assert_eq!(request.body.as_deref(), Some(xml.as_bytes()));
    }

    #[test]
    fn test_post_xml_sends_document() {
        let (client, fake) = client();
        fake.respond(200, "");
        let params: QueryParams = [("name", "a")].into_iter().collect();
        client
            .post_xml("/createItem", Some(&params), &Thing { name: "a".to_string() })
            .unwrap();

        let request = &fake.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "http://ci.local:8080/createItem?name=a");
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/xml");
        let body = String::from_utf8(request.body.clone().unwrap()).unwrap();
        assert_eq!(body, "<thing><name>a</name></thing>");
    }

    #[test]
    fn test_queue_item_resolution() {
        let (client, fake) = client();
        fake.respond_location(201, "http://ci.local:8080/queue/item/42/")
            .respond(200, r#"{"id":42,"why":"In the quiet period"}"#);

        let item = client.post_for_queue_item("/job/a/build", None).unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(
            fake.urls(),
            vec![
                "http://ci.local:8080/job/a/build".to_string(),
                "http://ci.local:8080/queue/item/42/api/json".to_string(),
            ]
        );
        assert_eq!(fake.requests()[1].method, Method::GET);
    }

    #[test]
    fn test_queue_item_resolution_bad_location() {
        let (client, fake) = client();
        fake.respond_location(201, "http://ci.local:8080/queue/");

        let err = client.post_for_queue_item("/job/a/build", None).unwrap_err();
        assert!(matches!(err, JenkinsError::Location(_)));
        assert_eq!(fake.requests().len(), 1);
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JenkinsClient>();
    }
}
