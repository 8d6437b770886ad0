//
//  jenkins-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Jenkins remote API
//!
//! This module provides the error taxonomy shared by every layer of the
//! client: the transport, the response decoders and the resource operations.
//!
//! # Overview
//!
//! - [`JenkinsError`] - Unified error type for all API operations
//! - [`Result`] - Convenience alias used throughout [`crate::api`]
//!
//! # Example
//!
//! ```rust
//! use jenkins_cli::api::common::JenkinsError;
//!
//! fn describe(err: &JenkinsError) -> &'static str {
//!     if err.is_decode() {
//!         "server returned something unexpected"
//!     } else if matches!(err, JenkinsError::Network(_)) {
//!         "server unreachable"
//!     } else {
//!         "request rejected"
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - Errors are never logged or recovered inside the library; they are
//!   returned to the immediate caller unchanged
//! - The `Network` variant converts automatically from `reqwest::Error`

use thiserror::Error;

/// Result alias for Jenkins API operations.
pub type Result<T> = std::result::Result<T, JenkinsError>;

/// Unified error type for all Jenkins API operations.
///
/// # Variants
///
/// | Variant | Meaning |
/// |---------|---------|
/// | `Network` | DNS, connect, TLS or timeout failure from the HTTP stack |
/// | `InvalidJson` | The body did not match the expected JSON shape |
/// | `InvalidXml` | The body did not match the expected XML document |
/// | `Status` | The server answered with a non-success status code |
/// | `Location` | A queue-item pointer was expected but missing or unparsable |
/// | `Encode` | A configuration document could not be serialized |
/// | `InvalidUrl` | The configured server address is not a usable URL |
///
/// # Example
///
/// ```rust
/// use jenkins_cli::api::common::JenkinsError;
///
/// let err = JenkinsError::Status {
///     status: 500,
///     url: "https://ci.example.com/createItem?name=demo".to_string(),
/// };
/// assert!(err.to_string().contains("500"));
/// assert!(!err.is_decode());
/// ```
#[derive(Error, Debug)]
pub enum JenkinsError {
    /// A network-level error occurred during the request.
    ///
    /// The underlying `reqwest::Error` is kept intact so callers can inspect
    /// connection, timeout and TLS details.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Response from {url} did not match the expected shape: {source}")]
    InvalidJson {
        /// The URL that produced the body
        url: String,
        /// The decoder error
        #[source]
        source: serde_json::Error,
    },

    /// The response body could not be decoded as the expected XML document.
    #[error("Response from {url} is not a valid configuration document: {reason}")]
    InvalidXml {
        /// The URL that produced the body
        url: String,
        /// Description of the decoder failure
        reason: String,
    },

    /// The server answered with a status code outside the success range.
    ///
    /// The literal code is embedded in the message.
    #[error("HTTP {status} returned by {url}")]
    Status {
        /// The HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// A queued build was expected but the `Location` header was missing
    /// or did not point at a queue item.
    #[error("Could not resolve queue item: {0}")]
    Location(String),

    /// A configuration document could not be serialized to XML.
    #[error("Failed to encode configuration document: {0}")]
    Encode(String),

    /// The server address could not be parsed as a URL.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl JenkinsError {
    /// Returns `true` when the server answered but its body did not match
    /// the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::InvalidJson { .. } | Self::InvalidXml { .. })
    }

    /// Returns the HTTP status code carried by a status failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
