//
//  jenkins-cli
//  api/jobs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Job API
//!
//! Read operations decode the JSON representation of a job. Creation and
//! configuration go through the XML configuration document, see
//! [`MavenJobConfig`].

use serde::{Deserialize, Serialize};

use super::builds::BuildRef;
use super::client::JenkinsClient;
use super::common::Result;
use super::documents::MavenJobConfig;
use super::queue::QueueItem;
use super::url_builder::QueryParams;

/// A job as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub name: String,
    pub url: String,
    pub display_name: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub buildable: bool,
    /// Status ball color, such as `blue`, `red` or `blue_anime` while building
    pub color: Option<String>,
    pub in_queue: bool,
    pub builds: Vec<BuildRef>,
    pub last_build: Option<BuildRef>,
    pub last_successful_build: Option<BuildRef>,
    pub last_failed_build: Option<BuildRef>,
    pub next_build_number: u64,
    pub queue_item: Option<QueueItem>,
}

impl Job {
    /// Returns `true` while a build of this job is running.
    pub fn is_building(&self) -> bool {
        self.color.as_deref().is_some_and(|c| c.ends_with("_anime"))
    }
}

/// Top-level listing returned by the server root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct JobList {
    jobs: Vec<Job>,
}

fn job_path(name: &str) -> String {
    format!("/job/{name}")
}

fn config_path(name: &str) -> String {
    format!("{}/config.xml", job_path(name))
}

fn create_params(name: &str) -> QueryParams {
    [("name", name)].into_iter().collect()
}

impl JenkinsClient {
    /// Lists every top-level job, in server order.
    ///
    /// `GET /api/json`
    pub fn list_jobs(&self) -> Result<Vec<Job>> {
        let list: JobList = self.get_json("", None)?;
        Ok(list.jobs)
    }

    /// Returns a job by name.
    ///
    /// `GET /job/{name}/api/json`
    pub fn get_job(&self, name: &str) -> Result<Job> {
        self.get_json(&job_path(name), None)
    }

    /// Returns the configuration document of a Maven job.
    ///
    /// `GET /job/{name}/config.xml`
    ///
    /// Fails with [`JenkinsError::InvalidXml`](super::JenkinsError::InvalidXml)
    /// for jobs of other types, such as freestyle `<project>` jobs.
    pub fn get_job_config(&self, name: &str) -> Result<MavenJobConfig> {
        self.get_document(&config_path(name))
    }

    /// Returns the configuration document of any job as the server sent it.
    ///
    /// `GET /job/{name}/config.xml`
    pub fn get_job_config_xml(&self, name: &str) -> Result<String> {
        self.get_xml_text(&config_path(name))
    }

    /// Creates a job named `name` from a configuration document.
    ///
    /// `POST /createItem?name={name}`
    ///
    /// # Parameters
    ///
    /// * `config` - The document the new job is created from
    /// * `name` - The name of the new job, passed as a query parameter
    pub fn create_job(&self, config: &MavenJobConfig, name: &str) -> Result<()> {
        self.post_xml("/createItem", Some(&create_params(name)), config)
    }

    /// Creates a job named `name` from XML text, sent unchanged.
    pub fn create_job_xml(&self, xml: &str, name: &str) -> Result<()> {
        self.post_xml_text("/createItem", Some(&create_params(name)), xml)
    }

    /// Replaces the configuration of an existing job.
    ///
    /// `POST /job/{name}/config.xml`
    pub fn update_job(&self, name: &str, config: &MavenJobConfig) -> Result<()> {
        self.post_xml(&config_path(name), None, config)
    }

    /// Replaces the configuration of an existing job with XML text, sent
    /// unchanged.
    pub fn update_job_xml(&self, name: &str, xml: &str) -> Result<()> {
        self.post_xml_text(&config_path(name), None, xml)
    }

    /// Schedules a build and returns the queue item the server created.
    ///
    /// # Parameters
    ///
    /// * `name` - The job to build
    /// * `params` - Build parameters. `None` triggers a plain build through
    ///   `/job/{name}/build`. `Some` always uses
    ///   `/job/{name}/buildWithParameters`, even when the map is empty.
    ///
    /// # Returns
    ///
    /// The queue item as it stands right after the trigger. The build itself
    /// starts later; poll [`JenkinsClient::get_queue_item`] to follow it.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use jenkins_cli::api::{JenkinsClient, QueryParams};
    /// use jenkins_cli::auth::Credentials;
    ///
    /// let client = JenkinsClient::new("https://ci.example.com", Credentials::new("alice", "token"))?;
    /// let mut params = QueryParams::new();
    /// params.insert("BRANCH", "release/2.1");
    /// let item = client.trigger_build("core", Some(&params))?;
    /// println!("queued as #{}", item.id);
    /// # Ok::<(), jenkins_cli::api::JenkinsError>(())
    /// ```
    pub fn trigger_build(&self, name: &str, params: Option<&QueryParams>) -> Result<QueueItem> {
        match params {
            None => self.post_for_queue_item(&format!("{}/build", job_path(name)), None),
            Some(params) => self.post_for_queue_item(&format!("{}/buildWithParameters", job_path(name)), Some(params)),
        }
    }
}
