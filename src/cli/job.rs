//
//  jenkins-cli
//  cli/job.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Job commands

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::documents::root_element;
use crate::api::{Job, QueryParams, QueueItem};
use crate::output::{format_bool, format_job_color, print_field, print_header, write_json, TableOutput, TableRow};

use super::GlobalOptions;

/// Manage jobs
#[derive(Args, Debug)]
pub struct JobCommand {
    #[command(subcommand)]
    pub command: JobSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum JobSubcommand {
    /// List top-level jobs
    #[command(visible_alias = "ls")]
    List,

    /// Show a job
    View(NameArgs),

    /// Print or save a job's config.xml
    Config(ConfigArgs),

    /// Create a job from a config.xml file
    Create(FileArgs),

    /// Replace a job's configuration with a config.xml file
    Update(FileArgs),

    /// Trigger a build
    Build(BuildArgs),
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Job name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Job name
    pub name: String,

    /// Write the document to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Job name
    pub name: String,

    /// Path to the config.xml document
    #[arg(long, short = 'f')]
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Job name
    pub name: String,

    /// Build parameter, repeatable
    #[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Use the parameterized trigger even without parameters
    #[arg(long)]
    pub with_parameters: bool,
}

impl BuildArgs {
    /// `None` unless parameters were given or explicitly requested.
    pub fn query_params(&self) -> Option<QueryParams> {
        if self.params.is_empty() && !self.with_parameters {
            return None;
        }
        Some(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect())
    }
}

fn parse_param(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

impl TableRow for Job {
    fn headers() -> &'static [&'static str] {
        &["NAME", "STATUS", "URL"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.name.clone(),
            format_job_color(self.color.as_deref(), color),
            self.url.clone(),
        ]
    }
}

impl TableOutput for Job {
    fn print_table(&self, color: bool) {
        print_header(self.display_name.as_deref().unwrap_or(&self.name));
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            println!("{}\n", description);
        }
        print_field("Status", &format_job_color(self.color.as_deref(), color), color);
        print_field("Buildable", &format_bool(self.buildable, color), color);
        print_field("In queue", &format_bool(self.in_queue, color), color);
        print_field("Next build", &format!("#{}", self.next_build_number), color);
        for (label, build) in [
            ("Last build", &self.last_build),
            ("Last success", &self.last_successful_build),
            ("Last failure", &self.last_failed_build),
        ] {
            if let Some(build) = build {
                print_field(label, &format!("#{}", build.number), color);
            }
        }
        print_field("URL", &self.url, color);
    }
}

impl TableOutput for QueueItem {
    fn print_table(&self, color: bool) {
        print_field("Queue item", &format!("#{}", self.id), color);
        if !self.task.name.is_empty() {
            print_field("Job", &self.task.name, color);
        }
        if let Some(why) = &self.why {
            print_field("Waiting", why, color);
        }
        if let Some(build) = &self.executable {
            print_field("Build", &format!("#{} {}", build.number, build.url), color);
        }
    }
}

impl JobCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            JobSubcommand::List => self.list(global),
            JobSubcommand::View(args) => self.view(args, global),
            JobSubcommand::Config(args) => self.config(args, global),
            JobSubcommand::Create(args) => self.create(args, global),
            JobSubcommand::Update(args) => self.update(args, global),
            JobSubcommand::Build(args) => self.build(args, global),
        }
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let jobs = client.list_jobs().context("Failed to list jobs")?;

        let writer = global.writer();
        if jobs.is_empty() && !global.json {
            writer.write_info("No jobs found");
            return Ok(());
        }
        writer.write_list(&jobs)
    }

    fn view(&self, args: &NameArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let job = client
            .get_job(&args.name)
            .with_context(|| format!("Failed to get job '{}'", args.name))?;
        global.writer().write(&job)
    }

    fn config(&self, args: &ConfigArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let xml = client
            .get_job_config_xml(&args.name)
            .with_context(|| format!("Failed to get configuration of '{}'", args.name))?;

        if global.json {
            return write_json(&serde_json::json!({ "name": args.name, "config": xml }));
        }

        match &args.output {
            Some(path) => {
                std::fs::write(path, &xml).with_context(|| format!("Failed to write {}", path.display()))?;
                global
                    .writer()
                    .write_success(&format!("Saved configuration of {} to {}", args.name, path.display()));
            }
            None if xml.ends_with('\n') => print!("{xml}"),
            None => println!("{xml}"),
        }
        Ok(())
    }

    fn create(&self, args: &FileArgs, global: &GlobalOptions) -> Result<()> {
        let xml = read_document(&args.file)?;
        let client = global.client()?;
        client
            .create_job_xml(&xml, &args.name)
            .with_context(|| format!("Failed to create job '{}'", args.name))?;

        global
            .writer()
            .write_success(&format!("Created job {}", style(&args.name).cyan()));
        Ok(())
    }

    fn update(&self, args: &FileArgs, global: &GlobalOptions) -> Result<()> {
        let xml = read_document(&args.file)?;
        let client = global.client()?;
        client
            .update_job_xml(&args.name, &xml)
            .with_context(|| format!("Failed to update job '{}'", args.name))?;

        global
            .writer()
            .write_success(&format!("Updated job {}", style(&args.name).cyan()));
        Ok(())
    }

    fn build(&self, args: &BuildArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let params = args.query_params();
        let item = client
            .trigger_build(&args.name, params.as_ref())
            .with_context(|| format!("Failed to trigger a build of '{}'", args.name))?;

        let writer = global.writer();
        writer.write_success(&format!("Queued a build of {}", style(&args.name).cyan()));
        writer.write(&item)
    }
}

/// Reads a config.xml file. The text is sent as is, so only the presence of a
/// root element is checked.
fn read_document(path: &Path) -> Result<String> {
    let xml = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if root_element(&xml).is_none() {
        bail!("{} is not an XML document", path.display());
    }
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_args(params: &[(&str, &str)], with_parameters: bool) -> BuildArgs {
        BuildArgs {
            name: "core".to_string(),
            params: params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            with_parameters,
        }
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("BRANCH=main").unwrap(), ("BRANCH".to_string(), "main".to_string()));
        assert_eq!(parse_param("EXPR=a=b").unwrap(), ("EXPR".to_string(), "a=b".to_string()));
        assert_eq!(parse_param("EMPTY=").unwrap(), ("EMPTY".to_string(), String::new()));
        assert!(parse_param("=main").is_err());
        assert!(parse_param("BRANCH").is_err());
    }

    #[test]
    fn test_query_params_keep_nil_distinction() {
        assert!(build_args(&[], false).query_params().is_none());

        let empty = build_args(&[], true).query_params().unwrap();
        assert!(empty.is_empty());

        let params = build_args(&[("BRANCH", "main")], false).query_params().unwrap();
        assert_eq!(params.get("BRANCH"), Some("main"));
    }

    #[test]
    fn test_read_document_keeps_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.xml");
        let xml = "<?xml version='1.1' encoding='UTF-8'?>\n<project>\n  <buildWrappers/>\n</project>\n";
        std::fs::write(&path, xml).unwrap();
        assert_eq!(read_document(&path).unwrap(), xml);

        std::fs::write(&path, "not xml at all").unwrap();
        assert!(read_document(&path).is_err());
    }

    #[test]
    fn test_job_row() {
        let job = Job {
            name: "core".to_string(),
            color: Some("blue".to_string()),
            url: "http://ci.local:8080/job/core/".to_string(),
            ..Default::default()
        };
        assert_eq!(job.row(false), vec!["core", "passing", "http://ci.local:8080/job/core/"]);
    }
}
