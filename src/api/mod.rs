//
//  jenkins-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides a synchronous client for the Jenkins remote API.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: The [`JenkinsClient`] and the dispatch path every call takes
//! - [`url_builder`]: Request URL construction and [`QueryParams`]
//! - [`transport`]: The pluggable [`Transport`] seam and its `reqwest` implementation
//! - [`decode`]: Status policy, JSON/XML decoding and queue-item resolution
//! - [`jobs`], [`builds`], [`queue`], [`views`]: Resource operations and their models
//! - [`documents`]: XML configuration documents for jobs and views
//! - [`common`]: The shared error type
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jenkins_cli::api::JenkinsClient;
//! use jenkins_cli::auth::Credentials;
//!
//! let client = JenkinsClient::new("https://ci.example.com", Credentials::new("alice", "token"))?;
//! let job = client.get_job("core")?;
//! if let Some(last) = job.last_build {
//!     let build = client.get_build(&job.name, last.number)?;
//!     let log = client.get_build_console_output(&build)?;
//!     println!("{}", String::from_utf8_lossy(&log));
//! }
//! # Ok::<(), jenkins_cli::api::JenkinsError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result`]. Any status outside 2xx/3xx becomes
//! [`JenkinsError::Status`] with the literal code, whatever the operation.

pub mod builds;
pub mod client;
pub mod common;
pub mod decode;
pub mod documents;
pub mod jobs;
pub mod queue;
pub mod transport;
pub mod url_builder;
pub mod views;

pub use builds::{Artifact, Build, BuildRef};
pub use client::JenkinsClient;
pub use common::{JenkinsError, Result};
pub use documents::{Document, ListView, MavenJobConfig};
pub use jobs::Job;
pub use queue::{Executable, Queue, QueueItem, Task};
pub use transport::{HttpTransport, RawResponse, Transport, TransportRequest};
pub use url_builder::{action_url, build_url, Format, QueryParams, API_SUFFIX};
pub use views::View;
