//
//  jenkins-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jenkins_cli::cli::{Cli, Commands};
use jenkins_cli::exit_codes;

fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command and exit
    match run(cli) {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("JK_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Job(cmd) => cmd.run(&cli.global),
        Commands::Build(cmd) => cmd.run(&cli.global),
        Commands::Queue(cmd) => cmd.run(&cli.global),
        Commands::View(cmd) => cmd.run(&cli.global),
        Commands::Config(cmd) => cmd.run(&cli.global),
        Commands::Completion(cmd) => cmd.run(&cli.global),
        Commands::Version => {
            println!("jk version {}", jenkins_cli::VERSION);
            Ok(())
        }
    }
}
