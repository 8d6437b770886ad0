//
//  jenkins-cli
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP transport
//!
//! The [`Transport`] trait is the seam between the client and the network.
//! [`HttpTransport`] is the production implementation on top of the blocking
//! `reqwest` client; tests substitute an in-memory implementation.
//!
//! A transport executes exactly one request per call, adds no retries and
//! never follows redirects, so `Location` headers reach the response decoder.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Method, StatusCode};

use super::common::Result;

/// An outbound HTTP request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attaches a body together with its content type.
    pub fn with_body(mut self, body: Vec<u8>, content_type: &'static str) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        self.body = Some(body);
        self
    }
}

/// A fully read HTTP response.
///
/// The body is read completely by the transport, which releases the
/// underlying connection before the response is handed to the decoder.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Returns the `Location` header, if present and valid UTF-8.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    /// 2xx and 3xx responses count as success; redirects are not followed.
    pub fn is_success(&self) -> bool {
        self.status.is_success() || self.status.is_redirection()
    }
}

/// Executes HTTP requests on behalf of a [`JenkinsClient`](super::JenkinsClient).
///
/// Implementations must be safe to share between threads; the client holds a
/// transport behind an `Arc` and issues calls from whichever thread calls it.
pub trait Transport: Send + Sync {
    /// Performs one synchronous round trip.
    ///
    /// # Errors
    ///
    /// Returns [`JenkinsError::Network`](super::JenkinsError::Network) for DNS,
    /// connection, TLS and timeout failures. A response with an error status
    /// is not a transport failure and is returned as `Ok`.
    fn execute(&self, request: TransportRequest) -> Result<RawResponse>;
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Creates a transport with no request timeout.
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: Self::builder().build()?,
        })
    }

    /// Creates a transport that aborts requests taking longer than `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: Self::builder().timeout(timeout).build()?,
        })
    }

    fn builder() -> reqwest::blocking::ClientBuilder {
        Client::builder()
            .user_agent(format!("jk/{}", crate::VERSION))
            .redirect(Policy::none())
            // the blocking client defaults to 30s; no deadline unless asked for
            .timeout(None::<Duration>)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: TransportRequest) -> Result<RawResponse> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(RawResponse::new(StatusCode::OK, "").is_success());
        assert!(RawResponse::new(StatusCode::CREATED, "").is_success());
        assert!(RawResponse::new(StatusCode::FOUND, "").is_success());
        assert!(!RawResponse::new(StatusCode::NOT_FOUND, "").is_success());
        assert!(!RawResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "").is_success());
    }

    #[test]
    fn test_location_header() {
        let mut response = RawResponse::new(StatusCode::CREATED, "");
        assert_eq!(response.location(), None);
        response.headers.insert(
            LOCATION,
            HeaderValue::from_static("http://ci.local/queue/item/9/"),
        );
        assert_eq!(response.location(), Some("http://ci.local/queue/item/9/"));
    }

    #[test]
    fn test_with_body_sets_content_type() {
        let request = TransportRequest::new(Method::POST, "http://ci.local/createItem")
            .with_body(b"<project/>".to_vec(), "application/xml");
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/xml");
        assert_eq!(request.body.as_deref(), Some(&b"<project/>"[..]));
    }
}
