//
//  jenkins-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Jenkins CLI Library
//!
//! A synchronous client library for the Jenkins remote API, and the core of
//! the `jk` command-line tool.
//!
//! ## Overview
//!
//! Every operation is one blocking HTTP round trip (two for build triggers,
//! which resolve the queue item the server points at). The client holds no
//! state beyond the server address and credentials, so a single instance can
//! be shared across threads.
//!
//! ## Features
//!
//! - **Jobs**: list, inspect, create and reconfigure jobs; trigger builds
//! - **Builds**: inspect builds, read console logs, download artifacts
//! - **Queue**: inspect the build queue and individual queue items
//! - **Views**: create list views, add jobs, inspect views
//! - **Pluggable transport**: swap the HTTP stack for tests or custom networking
//!
//! ## Module Structure
//!
//! - [`api`]: The [`JenkinsClient`] and resource operations
//! - [`auth`]: Credentials and HTTP Basic authentication
//! - [`config`]: Configuration file management for `jk`
//! - [`output`]: Table and JSON output
//! - [`cli`]: Command-line interface definitions using clap
//! - [`util`]: Formatting helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use jenkins_cli::api::{JenkinsClient, QueryParams};
//! use jenkins_cli::auth::Credentials;
//!
//! let client = JenkinsClient::new("https://ci.example.com", Credentials::new("alice", "token"))?;
//!
//! let mut params = QueryParams::new();
//! params.insert("BRANCH", "main");
//! let item = client.trigger_build("core", Some(&params))?;
//! println!("queued as #{}: {:?}", item.id, item.why);
//! # Ok::<(), jenkins_cli::api::JenkinsError>(())
//! ```

/// Jenkins remote API client.
///
/// URL construction, authentication, transport, response decoding and the
/// resource operations built on them.
pub mod api;

/// Credentials and HTTP Basic authentication.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/jk/config.toml`
/// - macOS: `~/Library/Application Support/jk/config.toml`
/// - Windows: `%APPDATA%\jk\config.toml`
pub mod config;

/// Output formatting for tables and JSON.
pub mod output;

/// Formatting helpers.
pub mod util;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use jenkins_cli::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the API client.
pub use api::JenkinsClient;

/// Re-export of the configuration struct.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "jk";

/// Application version constant.
///
/// Derived from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use jenkins_cli::VERSION;
///
/// println!("jk version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: Server and network issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// The server answered 401 or 403. Check the user name and API token.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The requested job, build, view or queue item does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// The server could not be reached.
    pub const NETWORK_ERROR: i32 = 32;

    /// The server answered with something unexpected.
    ///
    /// A 5xx status, or a body that did not decode into the expected shape.
    pub const SERVER_ERROR: i32 = 33;

    /// Maps an error chain to an exit code.
    ///
    /// The first [`JenkinsError`](crate::api::JenkinsError) found in the chain
    /// decides the code; anything else is a general [`ERROR`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use jenkins_cli::api::JenkinsError;
    /// use jenkins_cli::exit_codes;
    ///
    /// let err = anyhow::Error::new(JenkinsError::Status { status: 404, url: "u".into() })
    ///     .context("Failed to get job 'core'");
    /// assert_eq!(exit_codes::for_error(&err), exit_codes::NOT_FOUND);
    /// ```
    pub fn for_error(err: &anyhow::Error) -> i32 {
        use crate::api::JenkinsError;

        let Some(api) = err.chain().find_map(|e| e.downcast_ref::<JenkinsError>()) else {
            return ERROR;
        };
        match api {
            JenkinsError::Status { status: 401 | 403, .. } => AUTH_ERROR,
            JenkinsError::Status { status: 404, .. } => NOT_FOUND,
            JenkinsError::Status { status, .. } if *status >= 500 => SERVER_ERROR,
            JenkinsError::Network(_) => NETWORK_ERROR,
            e if e.is_decode() => SERVER_ERROR,
            _ => ERROR,
        }
    }
}
