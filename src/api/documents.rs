//
//  jenkins-cli
//  api/documents.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! XML configuration documents
//!
//! Jobs and views are created and updated by posting their full
//! configuration document. The types here mirror the parts of the
//! `config.xml` schema this client models; elements they do not model are
//! ignored when decoding and omitted when encoding.
//!
//! Element names follow the server's schema, including the fully qualified
//! class names used for build steps, triggers and publishers. Decoding checks
//! the root element first, so a freestyle `<project>` is never read as a
//! Maven job.
//!
//! ```rust
//! use jenkins_cli::api::documents::{MavenJobConfig, ShellStep};
//!
//! let mut config = MavenJobConfig::new("clean install");
//! config.description = "Nightly build".to_string();
//! config.prebuilders.shell.push(ShellStep::new("./bootstrap.sh"));
//!
//! let xml = config.to_xml()?;
//! assert!(xml.starts_with("<maven2-moduleset"));
//! assert_eq!(MavenJobConfig::from_xml(&xml)?, config);
//! # Ok::<(), jenkins_cli::api::JenkinsError>(())
//! ```

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::common::{JenkinsError, Result};

/// A configuration document with a fixed root element.
pub trait Document: Serialize + DeserializeOwned {
    /// Name of the root element, such as `maven2-moduleset`.
    const ROOT: &'static str;
}

pub(crate) fn encode<D: Document>(document: &D) -> Result<String> {
    quick_xml::se::to_string(document).map_err(|e| JenkinsError::Encode(e.to_string()))
}

/// Returns the name of the first element in `xml`.
pub fn root_element(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.name().as_ref()).into_owned())
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

/// Decodes `xml` as `D`, rejecting documents of another type.
///
/// `source` names where the document came from in errors.
pub(crate) fn parse<D: Document>(xml: &str, source: &str) -> Result<D> {
    let invalid = |reason: String| JenkinsError::InvalidXml {
        url: source.to_string(),
        reason,
    };

    match root_element(xml) {
        Some(root) if root == D::ROOT => {}
        Some(root) => return Err(invalid(format!("expected a <{}> document, found <{root}>", D::ROOT))),
        None => return Err(invalid("no root element".to_string())),
    }
    quick_xml::de::from_str(xml).map_err(|e| invalid(e.to_string()))
}

/// Configuration document of a Maven job (`maven2-moduleset`).
///
/// This is a partial model. Elements it does not cover, such as the
/// children of `<scm>`, `<buildWrappers>`, `<reporters>` or build steps
/// other than shell steps, are dropped on decode and absent on encode.
/// Re-posting a decoded server document therefore loses them; send the raw
/// text with [`JenkinsClient::update_job_xml`](super::JenkinsClient::update_job_xml)
/// when the document has to survive unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "maven2-moduleset", rename_all = "camelCase")]
pub struct MavenJobConfig {
    #[serde(rename = "@plugin", default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keep_dependencies: bool,
    #[serde(default)]
    pub properties: JobProperties,
    #[serde(default = "ClassRef::null_scm")]
    pub scm: ClassRef,
    #[serde(default = "enabled")]
    pub can_roam: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub block_build_when_downstream_building: bool,
    #[serde(default)]
    pub block_build_when_upstream_building: bool,
    #[serde(default)]
    pub triggers: Triggers,
    #[serde(default)]
    pub concurrent_build: bool,
    #[serde(rename = "rootPOM", default, skip_serializing_if = "Option::is_none")]
    pub root_pom: Option<String>,
    #[serde(default)]
    pub goals: String,
    #[serde(default = "enabled")]
    pub aggregator_style_build: bool,
    #[serde(default)]
    pub incremental_build: bool,
    // sic: the server's element name
    #[serde(rename = "ignoreUpstremChanges", default)]
    pub ignore_upstream_changes: bool,
    #[serde(default)]
    pub archiving_disabled: bool,
    #[serde(default)]
    pub site_archiving_disabled: bool,
    #[serde(default)]
    pub fingerprinting_disabled: bool,
    #[serde(default)]
    pub resolve_dependencies: bool,
    #[serde(default)]
    pub process_plugins: bool,
    #[serde(default = "default_validation_level")]
    pub maven_validation_level: i32,
    #[serde(default)]
    pub run_headless: bool,
    #[serde(default)]
    pub disable_trigger_downstream_projects: bool,
    #[serde(default = "ClassRef::default_settings")]
    pub settings: ClassRef,
    #[serde(default = "ClassRef::default_global_settings")]
    pub global_settings: ClassRef,
    #[serde(default)]
    pub publishers: Publishers,
    #[serde(default)]
    pub prebuilders: Builders,
    #[serde(default)]
    pub postbuilders: Builders,
    #[serde(default)]
    pub run_post_steps_if_result: RunPostStepsIfResult,
}

impl MavenJobConfig {
    /// A minimal Maven job running `goals` against the default `pom.xml`.
    pub fn new(goals: impl Into<String>) -> Self {
        Self {
            plugin: None,
            description: String::new(),
            keep_dependencies: false,
            properties: JobProperties::default(),
            scm: ClassRef::null_scm(),
            can_roam: enabled(),
            disabled: false,
            block_build_when_downstream_building: false,
            block_build_when_upstream_building: false,
            triggers: Triggers::default(),
            concurrent_build: false,
            root_pom: Some("pom.xml".to_string()),
            goals: goals.into(),
            aggregator_style_build: enabled(),
            incremental_build: false,
            ignore_upstream_changes: false,
            archiving_disabled: false,
            site_archiving_disabled: false,
            fingerprinting_disabled: false,
            resolve_dependencies: false,
            process_plugins: false,
            maven_validation_level: default_validation_level(),
            run_headless: false,
            disable_trigger_downstream_projects: false,
            settings: ClassRef::default_settings(),
            global_settings: ClassRef::default_global_settings(),
            publishers: Publishers::default(),
            prebuilders: Builders::default(),
            postbuilders: Builders::default(),
            run_post_steps_if_result: RunPostStepsIfResult::default(),
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        encode(self)
    }

    /// Decodes a `maven2-moduleset` document. Other job types are rejected.
    pub fn from_xml(xml: &str) -> Result<Self> {
        parse(xml, "<document>")
    }
}

impl Document for MavenJobConfig {
    const ROOT: &'static str = "maven2-moduleset";
}

fn enabled() -> bool {
    true
}

/// Level used by the server when none is configured.
fn default_validation_level() -> i32 {
    -1
}

/// An element identified only by its `class` attribute, such as
/// `<scm class="hudson.scm.NullSCM"/>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassRef {
    #[serde(rename = "@class", default)]
    pub class: String,
    #[serde(rename = "@plugin", default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
}

impl ClassRef {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            plugin: None,
        }
    }

    fn null_scm() -> Self {
        Self::new("hudson.scm.NullSCM")
    }

    fn default_settings() -> Self {
        Self::new("jenkins.mvn.DefaultSettingsProvider")
    }

    fn default_global_settings() -> Self {
        Self::new("jenkins.mvn.DefaultGlobalSettingsProvider")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobProperties {
    #[serde(
        rename = "hudson.model.ParametersDefinitionProperty",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parameters: Option<ParametersDefinitionProperty>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParametersDefinitionProperty {
    #[serde(rename = "parameterDefinitions", default)]
    pub definitions: ParameterDefinitions,
}

/// Build parameters, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinitions {
    #[serde(rename = "hudson.model.StringParameterDefinition", default)]
    pub strings: Vec<StringParameter>,
    #[serde(rename = "hudson.model.BooleanParameterDefinition", default)]
    pub booleans: Vec<BooleanParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringParameter {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub trim: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanParameter {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Triggers {
    #[serde(rename = "hudson.triggers.TimerTrigger", default)]
    pub timer: Vec<CronTrigger>,
    #[serde(rename = "hudson.triggers.SCMTrigger", default)]
    pub scm: Vec<CronTrigger>,
}

/// A trigger driven by a cron-style schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CronTrigger {
    pub spec: String,
}

impl CronTrigger {
    pub fn new(spec: impl Into<String>) -> Self {
        Self { spec: spec.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publishers {
    #[serde(rename = "hudson.tasks.ArtifactArchiver", default)]
    pub artifact_archivers: Vec<ArtifactArchiver>,
    #[serde(rename = "hudson.tasks.Mailer", default)]
    pub mailers: Vec<Mailer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactArchiver {
    /// Comma separated Ant-style patterns
    pub artifacts: String,
    #[serde(default)]
    pub allow_empty_archive: bool,
    #[serde(default)]
    pub only_if_successful: bool,
    #[serde(default)]
    pub fingerprint: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mailer {
    /// Whitespace separated addresses
    pub recipients: String,
    #[serde(default)]
    pub dont_notify_every_unstable_build: bool,
    #[serde(default)]
    pub send_to_individuals: bool,
}

/// Shell build steps run before or after the Maven build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Builders {
    #[serde(rename = "hudson.tasks.Shell", default)]
    pub shell: Vec<ShellStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellStep {
    pub command: String,
}

impl ShellStep {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

/// Result threshold for running post-build steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPostStepsIfResult {
    pub name: String,
    pub ordinal: i32,
    pub color: String,
    pub complete_build: bool,
}

impl Default for RunPostStepsIfResult {
    /// Run post steps on `FAILURE` or better.
    fn default() -> Self {
        Self {
            name: "FAILURE".to_string(),
            ordinal: 2,
            color: "RED".to_string(),
            complete_build: true,
        }
    }
}

/// Configuration document of a list view (`hudson.model.ListView`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "hudson.model.ListView", rename_all = "camelCase")]
pub struct ListView {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub filter_executors: bool,
    #[serde(default)]
    pub filter_queue: bool,
    #[serde(default)]
    pub job_names: JobNames,
    #[serde(default)]
    pub columns: Columns,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_regex: Option<String>,
    #[serde(default)]
    pub recurse: bool,
}

impl ListView {
    /// A view named `name` with the standard set of columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Columns::standard(),
            ..Default::default()
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        encode(self)
    }

    pub fn from_xml(xml: &str) -> Result<Self> {
        parse(xml, "<document>")
    }
}

impl Document for ListView {
    const ROOT: &'static str = "hudson.model.ListView";
}

/// Jobs explicitly listed in a view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobNames {
    #[serde(rename = "string", default)]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    #[serde(rename = "$value", default)]
    pub columns: Vec<ViewColumn>,
}

impl Columns {
    /// The columns a new list view gets in the web UI.
    pub fn standard() -> Self {
        Self {
            columns: vec![
                ViewColumn::Status,
                ViewColumn::Weather,
                ViewColumn::Job,
                ViewColumn::LastSuccess,
                ViewColumn::LastFailure,
                ViewColumn::LastDuration,
                ViewColumn::BuildButton,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewColumn {
    #[serde(rename = "hudson.views.StatusColumn")]
    Status,
    #[serde(rename = "hudson.views.WeatherColumn")]
    Weather,
    #[serde(rename = "hudson.views.JobColumn")]
    Job,
    #[serde(rename = "hudson.views.LastSuccessColumn")]
    LastSuccess,
    #[serde(rename = "hudson.views.LastFailureColumn")]
    LastFailure,
    #[serde(rename = "hudson.views.LastDurationColumn")]
    LastDuration,
    #[serde(rename = "hudson.views.BuildButtonColumn")]
    BuildButton,
}
