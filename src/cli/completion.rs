//
//  jenkins-cli
//  cli/completion.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `jk completion <SHELL>`

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use super::{Cli, GlobalOptions};

/// Print a shell completion script
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl CompletionCommand {
    pub fn run(&self, _global: &GlobalOptions) -> Result<()> {
        let mut out: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(std::io::stdout()),
        };

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, crate::APP_NAME, &mut out);
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_script_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jk.bash");
        let command = CompletionCommand {
            shell: Shell::Bash,
            output: Some(path.clone()),
        };
        let global = GlobalOptions::default();

        command.run(&global).unwrap();

        let script = std::fs::read_to_string(&path).unwrap();
        assert!(script.contains("jk"));
    }
}
