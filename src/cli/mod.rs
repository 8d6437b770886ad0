//
//  jenkins-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod build;
mod completion;
mod config;
mod job;
mod queue;
mod view;

pub use build::BuildCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use job::JobCommand;
pub use queue::QueueCommand;
pub use view::ViewCommand;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::api::{HttpTransport, JenkinsClient};
use crate::auth::Credentials;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// Jenkins CLI - Work with a Jenkins server from the command line
#[derive(Parser, Debug)]
#[command(
    name = "jk",
    version,
    about = "Work with a Jenkins server from the command line",
    long_about = "jk is a CLI for the Jenkins remote API.\n\n\
                  It lists jobs, inspects builds and the queue, triggers builds, \
                  and manages job and view configuration.",
    propagate_version = true,
    after_help = "Use 'jk <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Jenkins server URL
    #[arg(long, short = 's', global = true, env = "JENKINS_URL")]
    pub server: Option<String>,

    /// User name for Basic authentication
    #[arg(long, short = 'u', global = true, env = "JENKINS_USER")]
    pub user: Option<String>,

    /// API token of the user
    #[arg(long, global = true, env = "JENKINS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.format())
    }

    /// Builds a client from the flags, falling back to the configuration file.
    pub fn client(&self) -> Result<JenkinsClient> {
        let config = Config::load().unwrap_or_default();
        self.client_with(&config)
    }

    /// Builds a client from the flags, falling back to `config`.
    ///
    /// Missing credentials mean anonymous access.
    pub fn client_with(&self, config: &Config) -> Result<JenkinsClient> {
        let server = self
            .server
            .clone()
            .or_else(|| config.server.url.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No Jenkins server configured. Pass --server, set JENKINS_URL, \
                     or run 'jk config set server.url <URL>'."
                )
            })?;
        let user = self.user.clone().or_else(|| config.server.user.clone()).unwrap_or_default();
        let token = self.token.clone().or_else(|| config.server.token.clone()).unwrap_or_default();

        let transport = match self.timeout.or(config.server.timeout_secs) {
            Some(secs) => HttpTransport::with_timeout(Duration::from_secs(secs)),
            None => HttpTransport::new(),
        }
        .context("Failed to create HTTP client")?;

        debug!(server = %server, user = %user, "Using Jenkins server");
        JenkinsClient::with_transport(server, Credentials::new(user, token), transport)
            .context("Invalid Jenkins server URL")
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage jobs
    #[command(visible_alias = "j")]
    Job(JobCommand),

    /// Inspect builds
    #[command(visible_alias = "b")]
    Build(BuildCommand),

    /// Inspect the build queue
    #[command(visible_alias = "q")]
    Queue(QueueCommand),

    /// Manage views
    View(ViewCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
