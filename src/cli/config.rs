//
//  jenkins-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Configuration commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, KEYS};

use super::GlobalOptions;

/// Keys whose values are never echoed back in full.
const SECRET_KEYS: &[&str] = &["server.token"];

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the value of a key
    Get {
        /// Configuration key, such as server.url
        key: String,
    },

    /// Set the value of a key
    Set {
        /// Configuration key, such as server.url
        key: String,

        /// New value
        value: String,
    },

    /// Remove a key
    Unset {
        /// Configuration key
        key: String,
    },

    /// List all keys and their values
    #[command(visible_alias = "ls")]
    List,

    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get { key } => self.get(key, global),
            ConfigSubcommand::Set { key, value } => self.set(key, value, global),
            ConfigSubcommand::Unset { key } => self.unset(key, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, key: &str, global: &GlobalOptions) -> Result<()> {
        if !KEYS.contains(&key) {
            bail!("Unknown configuration key '{}'. Valid keys: {}", key, KEYS.join(", "));
        }
        let value = Config::load()?.get(key);

        if global.json {
            let result = serde_json::json!({ "key": key, "value": value });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }
        Ok(())
    }

    fn set(&self, key: &str, value: &str, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.set(key, value)?;
        config.save()?;

        if global.json {
            let result = serde_json::json!({ "success": true, "key": key });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(key).cyan(),
                display_value(key, value)
            );
        }
        Ok(())
    }

    fn unset(&self, key: &str, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        if !config.unset(key) {
            bail!("Unknown configuration key '{}'. Valid keys: {}", key, KEYS.join(", "));
        }
        config.save()?;

        if !global.json {
            println!("{} Unset {}", style("✓").green(), style(key).cyan());
        }
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        if global.json {
            let map: serde_json::Map<String, serde_json::Value> = KEYS
                .iter()
                .map(|key| {
                    let value = config.get(key).map(|v| display_value(key, &v));
                    (key.to_string(), serde_json::json!(value))
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
            return Ok(());
        }

        for key in KEYS {
            match config.get(key) {
                Some(value) => println!("{} = {}", style(key).cyan(), display_value(key, &value)),
                None => println!("{} = {}", style(key).cyan(), style("(not set)").dim()),
            }
        }
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;
        if global.json {
            let result = serde_json::json!({ "path": path.display().to_string(), "exists": path.exists() });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}

/// Masks secrets, keeping the last four characters.
fn display_value(key: &str, value: &str) -> String {
    if !SECRET_KEYS.contains(&key) {
        return value.to_string();
    }
    let count = value.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = value.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
