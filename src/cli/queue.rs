//
//  jenkins-cli
//  cli/queue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build queue commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::QueueItem;
use crate::output::TableRow;
use crate::util::{format_time_millis, truncate};

use super::GlobalOptions;

/// Inspect the build queue
#[derive(Args, Debug)]
pub struct QueueCommand {
    #[command(subcommand)]
    pub command: QueueSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum QueueSubcommand {
    /// List queued builds
    #[command(visible_alias = "ls")]
    List,

    /// Show a queue item
    Item {
        /// Queue item number
        number: u64,
    },
}

impl TableRow for QueueItem {
    fn headers() -> &'static [&'static str] {
        &["#", "JOB", "SINCE", "WHY"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.task.name.clone(),
            format_time_millis(self.in_queue_since),
            truncate(self.why.as_deref().unwrap_or("-"), 60),
        ]
    }
}

impl QueueCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            QueueSubcommand::List => self.list(global),
            QueueSubcommand::Item { number } => self.item(*number, global),
        }
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let queue = client.get_queue().context("Failed to get the build queue")?;

        let writer = global.writer();
        if queue.items.is_empty() && !global.json {
            writer.write_info("The build queue is empty");
            return Ok(());
        }
        writer.write_list(&queue.items)
    }

    fn item(&self, number: u64, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let item = client
            .get_queue_item(number)
            .with_context(|| format!("Failed to get queue item #{}", number))?;
        global.writer().write(&item)
    }
}
