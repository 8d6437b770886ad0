//
//  jenkins-cli
//  cli/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build commands

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use crate::api::{Build, JenkinsClient};
use crate::output::{format_result, print_field, print_header, TableBuilder, TableOutput};
use crate::util::{format_duration, format_size, format_time_millis};

use super::GlobalOptions;

/// Inspect builds
#[derive(Args, Debug)]
pub struct BuildCommand {
    #[command(subcommand)]
    pub command: BuildSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BuildSubcommand {
    /// Show a build and its artifacts
    View(BuildRefArgs),

    /// Print a build's console log
    #[command(visible_alias = "logs")]
    Log(BuildRefArgs),

    /// Download an artifact of a build
    Artifact(ArtifactArgs),
}

#[derive(Args, Debug)]
pub struct BuildRefArgs {
    /// Job name
    pub job: String,

    /// Build number
    pub number: u64,
}

#[derive(Args, Debug)]
pub struct ArtifactArgs {
    /// Job name
    pub job: String,

    /// Build number
    pub number: u64,

    /// Relative path of the artifact, as shown by 'jk build view'
    pub path: String,

    /// Write the artifact to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl TableOutput for Build {
    fn print_table(&self, color: bool) {
        let title = self
            .full_display_name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.number));
        print_header(&title);
        print_field("Result", &format_result(self.status(), color), color);
        print_field("Started", &format_time_millis(self.timestamp), color);
        if !self.building {
            let duration = Duration::from_millis(self.duration.max(0) as u64);
            print_field("Duration", &format_duration(duration), color);
        }
        print_field("URL", &self.url, color);

        if !self.artifacts.is_empty() {
            println!();
            TableBuilder::new()
                .color(color)
                .headers(["ARTIFACT", "PATH"])
                .rows(
                    self.artifacts
                        .iter()
                        .map(|a| vec![a.file_name.clone(), a.relative_path.clone()]),
                )
                .print();
        }
    }
}

impl BuildCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            BuildSubcommand::View(args) => self.view(args, global),
            BuildSubcommand::Log(args) => self.log(args, global),
            BuildSubcommand::Artifact(args) => self.artifact(args, global),
        }
    }

    fn view(&self, args: &BuildRefArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let build = fetch_build(&client, &args.job, args.number)?;
        global.writer().write(&build)
    }

    fn log(&self, args: &BuildRefArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let build = fetch_build(&client, &args.job, args.number)?;
        let log = client
            .get_build_console_output(&build)
            .context("Failed to fetch console output")?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&log)?;
        stdout.flush()?;
        Ok(())
    }

    fn artifact(&self, args: &ArtifactArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let build = fetch_build(&client, &args.job, args.number)?;

        let Some(artifact) = build.artifacts.iter().find(|a| a.relative_path == args.path) else {
            let known: Vec<&str> = build.artifacts.iter().map(|a| a.relative_path.as_str()).collect();
            if known.is_empty() {
                bail!("Build #{} of '{}' has no artifacts", args.number, args.job);
            }
            bail!(
                "No artifact '{}' in build #{}. Available: {}",
                args.path,
                args.number,
                known.join(", ")
            );
        };

        let content = client
            .get_artifact(&build, artifact)
            .with_context(|| format!("Failed to download {}", artifact.relative_path))?;

        match &args.output {
            Some(path) => {
                std::fs::write(path, &content).with_context(|| format!("Failed to write {}", path.display()))?;
                global.writer().write_success(&format!(
                    "Saved {} ({}) to {}",
                    artifact.file_name,
                    format_size(content.len() as u64),
                    path.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&content)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

fn fetch_build(client: &JenkinsClient, job: &str, number: u64) -> Result<Build> {
    client
        .get_build(job, number)
        .with_context(|| format!("Failed to get build #{} of '{}'", number, job))
}
