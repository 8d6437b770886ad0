//
//  jenkins-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Jenkins authenticates remote API calls with HTTP Basic authentication,
//! using a username and an API token generated from the user's profile page.
//!
//! [`Credentials`] are attached to every request the client sends, including
//! requests to endpoints that allow anonymous reads. Callers with public,
//! read-only access use [`Credentials::anonymous`], which sends an empty
//! username and token.
//!
//! ## Example
//!
//! ```rust
//! use jenkins_cli::auth::Credentials;
//!
//! let credentials = Credentials::new("deploy-bot", "11a2b3c4d5e6f7");
//! assert_eq!(credentials.username(), "deploy-bot");
//!
//! // The token never shows up in debug output
//! assert!(!format!("{credentials:?}").contains("11a2b3c4d5e6f7"));
//! ```

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::api::transport::TransportRequest;

/// Username and API token used for HTTP Basic authentication.
///
/// Credentials are immutable once created and are only held in memory; this
/// layer never persists them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    api_token: String,
}

impl Credentials {
    /// Creates credentials from a username and an API token.
    pub fn new(username: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_token: api_token.into(),
        }
    }

    /// Empty credentials for servers that allow anonymous read access.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Returns the `Authorization` header value for these credentials.
    ///
    /// The value is marked sensitive so the HTTP stack redacts it from its
    /// own debug output.
    pub fn header_value(&self) -> HeaderValue {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.api_token));
        // base64 output is always a valid header value
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
            .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
        value.set_sensitive(true);
        value
    }

    /// Applies Basic authentication to an outbound request, replacing any
    /// `Authorization` header already present.
    pub fn apply(&self, request: &mut TransportRequest) {
        request.headers.insert(AUTHORIZATION, self.header_value());
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .finish()
    }
}
