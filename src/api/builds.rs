//
//  jenkins-cli
//  api/builds.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build API
//!
//! Builds are read-only. Console output and artifacts are sub-resources of a
//! build and are addressed through the build's own URL, so they can only be
//! fetched from a [`Build`] obtained from the server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::JenkinsClient;
use super::common::Result;

/// A single run of a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Build {
    pub number: u64,
    pub id: String,
    /// Absolute URL of the build, as reported by the server
    pub url: String,
    pub display_name: String,
    pub full_display_name: Option<String>,
    pub description: Option<String>,
    /// `SUCCESS`, `UNSTABLE`, `FAILURE`, `NOT_BUILT`, `ABORTED`, or absent while running
    pub result: Option<String>,
    pub building: bool,
    /// Epoch milliseconds when the build was scheduled to start
    pub timestamp: i64,
    /// Milliseconds, zero while the build runs
    pub duration: i64,
    pub estimated_duration: i64,
    pub artifacts: Vec<Artifact>,
}

impl Build {
    /// Returns the start time as a UTC timestamp.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Returns the build status, reporting `BUILDING` while it runs.
    pub fn status(&self) -> &str {
        if self.building {
            "BUILDING"
        } else {
            self.result.as_deref().unwrap_or("UNKNOWN")
        }
    }

    fn sub_resource(&self, name: &str) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), name)
    }
}

/// A file archived by a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Artifact {
    pub display_path: Option<String>,
    pub file_name: String,
    /// Path relative to the build's artifact root
    pub relative_path: String,
}

/// Lightweight reference to a build, as embedded in jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildRef {
    pub number: u64,
    pub url: String,
}

impl JenkinsClient {
    /// Returns build `number` of job `job_name`.
    ///
    /// `GET /job/{name}/{number}/api/json`
    pub fn get_build(&self, job_name: &str, number: u64) -> Result<Build> {
        self.get_json(&format!("/job/{job_name}/{number}"), None)
    }

    /// Returns the console log of a build, byte for byte.
    ///
    /// `GET {build.url}/consoleText`
    pub fn get_build_console_output(&self, build: &Build) -> Result<Vec<u8>> {
        self.get_bytes(&build.sub_resource("consoleText"))
    }

    /// Returns the content of an artifact, byte for byte.
    ///
    /// `GET {build.url}/artifact/{relative_path}`
    pub fn get_artifact(&self, build: &Build, artifact: &Artifact) -> Result<Vec<u8>> {
        let path = format!("artifact/{}", artifact.relative_path);
        self.get_bytes(&build.sub_resource(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::testing::client;
    use super::*;

    const BUILD: &str = r##"{
        "_class": "hudson.model.FreeStyleBuild",
        "actions": [{"_class": "hudson.model.CauseAction"}],
        "artifacts": [
            {"displayPath": "app.tar.gz", "fileName": "app.tar.gz", "relativePath": "dist/app.tar.gz"}
        ],
        "building": false,
        "displayName": "#7",
        "duration": 93021,
        "estimatedDuration": 90000,
        "fullDisplayName": "core #7",
        "id": "7",
        "number": 7,
        "result": "SUCCESS",
        "timestamp": 1760870000000,
        "url": "http://ci.local:8080/job/core/7/"
    }"##;

    #[test]
    fn test_get_build() {
        let (client, fake) = client();
        fake.respond(200, BUILD);

        let build = client.get_build("core", 7).unwrap();
        assert_eq!(fake.urls(), vec!["http://ci.local:8080/job/core/7/api/json".to_string()]);
        assert_eq!(build.number, 7);
        assert_eq!(build.status(), "SUCCESS");
        assert_eq!(build.artifacts[0].relative_path, "dist/app.tar.gz");
        assert_eq!(build.started_at().unwrap().timestamp_millis(), 1760870000000);
    }

    #[test]
    fn test_running_build_status() {
        let build = Build {
            building: true,
            ..Default::default()
        };
        assert_eq!(build.status(), "BUILDING");
        assert_eq!(Build::default().status(), "UNKNOWN");
    }

    #[test]
    fn test_console_output_is_passthrough() {
        let (client, fake) = client();
        let log = b"Started by user alice\r\n\x1b[32mok\x1b[0m\n\xff\xfe".to_vec();
        fake.respond_bytes(200, log.clone());

        let build = Build {
            url: "http://ci.local:8080/job/core/7/".to_string(),
            ..Default::default()
        };
        let output = client.get_build_console_output(&build).unwrap();
        assert_eq!(output, log);
        assert_eq!(fake.urls(), vec!["http://ci.local:8080/job/core/7/consoleText".to_string()]);
    }

    #[test]
    fn test_artifact_is_passthrough() {
        let (client, fake) = client();
        let bytes = vec![0x1f, 0x8b, 0x08, 0x00, 0x00, 0x0a];
        fake.respond_bytes(200, bytes.clone());

        let build: Build = serde_json::from_str(BUILD).unwrap();
        let content = client.get_artifact(&build, &build.artifacts[0]).unwrap();
        assert_eq!(content, bytes);
        assert_eq!(
            fake.urls(),
            vec!["http://ci.local:8080/job/core/7/artifact/dist/app.tar.gz".to_string()]
        );
    }

    #[test]
    fn test_artifact_status_failure() {
        let (client, fake) = client();
        fake.respond(404, "Not Found");

        let build: Build = serde_json::from_str(BUILD).unwrap();
        let err = client.get_artifact(&build, &build.artifacts[0]).unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
