//
//  jenkins-cli
//  cli/view.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! View commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::{Job, ListView, View};
use crate::output::{print_header, TableBuilder, TableOutput, TableRow};

use super::GlobalOptions;

/// Manage views
#[derive(Args, Debug)]
pub struct ViewCommand {
    #[command(subcommand)]
    pub command: ViewSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ViewSubcommand {
    /// Show a view and its jobs
    Show {
        /// View name
        name: String,
    },

    /// Create a list view
    Create(CreateArgs),

    /// Add a job to a view
    AddJob {
        /// View name
        view: String,

        /// Job name
        job: String,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// View name
    pub name: String,

    /// Job to list in the view, repeatable
    #[arg(long = "job")]
    pub jobs: Vec<String>,

    /// Also list jobs whose names match this regular expression
    #[arg(long)]
    pub regex: Option<String>,

    /// View description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

impl CreateArgs {
    fn document(&self) -> ListView {
        let mut view = ListView::new(self.name.clone());
        view.description = self.description.clone();
        view.job_names.names = self.jobs.clone();
        view.include_regex = self.regex.clone();
        view
    }
}

impl TableOutput for View {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            println!("{}\n", description);
        }
        if self.jobs.is_empty() {
            println!("No jobs in this view");
            return;
        }
        TableBuilder::new()
            .color(color)
            .headers(Job::headers().iter().copied())
            .rows(self.jobs.iter().map(|job| job.row(color)))
            .print();
    }
}

impl ViewCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ViewSubcommand::Show { name } => self.show(name, global),
            ViewSubcommand::Create(args) => self.create(args, global),
            ViewSubcommand::AddJob { view, job } => self.add_job(view, job, global),
        }
    }

    fn show(&self, name: &str, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let view = client
            .get_view(name)
            .with_context(|| format!("Failed to get view '{}'", name))?;
        global.writer().write(&view)
    }

    fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        client
            .create_view(&args.document())
            .with_context(|| format!("Failed to create view '{}'", args.name))?;

        global
            .writer()
            .write_success(&format!("Created view {}", style(&args.name).cyan()));
        Ok(())
    }

    fn add_job(&self, view: &str, job: &str, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        client
            .add_job_to_view(view, job)
            .with_context(|| format!("Failed to add '{}' to view '{}'", job, view))?;

        global.writer().write_success(&format!(
            "Added {} to view {}",
            style(job).cyan(),
            style(view).cyan()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_document() {
        let args = CreateArgs {
            name: "release".to_string(),
            jobs: vec!["core".to_string(), "docs".to_string()],
            regex: Some("release-.*".to_string()),
            description: None,
        };
        let view = args.document();
        assert_eq!(view.name, "release");
        assert_eq!(view.job_names.names, vec!["core", "docs"]);
        assert_eq!(view.include_regex.as_deref(), Some("release-.*"));
        assert!(!view.columns.columns.is_empty());
    }
}
