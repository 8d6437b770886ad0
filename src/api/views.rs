//
//  jenkins-cli
//  api/views.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! View API

use serde::{Deserialize, Serialize};

use super::client::JenkinsClient;
use super::common::Result;
use super::documents::ListView;
use super::jobs::Job;
use super::url_builder::QueryParams;

/// A view as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub jobs: Vec<Job>,
}

impl JenkinsClient {
    /// Returns a view and the jobs it lists.
    ///
    /// `GET /view/{name}/api/json`
    pub fn get_view(&self, name: &str) -> Result<View> {
        self.get_json(&format!("/view/{name}"), None)
    }

    /// Creates a list view from its configuration document.
    ///
    /// The view name is taken from `view.name`.
    ///
    /// `POST /createView?name={view.name}`
    pub fn create_view(&self, view: &ListView) -> Result<()> {
        let params: QueryParams = [("name", view.name.as_str())].into_iter().collect();
        self.post_xml("/createView", Some(&params), view)
    }

    /// Adds an existing job to an existing view.
    ///
    /// `POST /view/{view_name}/addJobToView?name={job_name}`
    pub fn add_job_to_view(&self, view_name: &str, job_name: &str) -> Result<()> {
        let params: QueryParams = [("name", job_name)].into_iter().collect();
        self.post(&format!("/view/{view_name}/addJobToView"), Some(&params))
    }
}
