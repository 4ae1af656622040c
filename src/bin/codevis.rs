//! Codevis CLI Binary
//!
//! Renders the package tree of a filesystem snapshot.

use anyhow::Context;
use clap::Parser;
use codevis::logging::init_logging;
use codevis::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: &Cli) -> anyhow::Result<String> {
    let mut context = CliContext::new(cli.workspace.clone(), cli.config.clone())
        .context("failed to load configuration")?;

    let logging = cli.logging_config(&context.config().logging);
    init_logging(Some(&logging)).context("failed to initialize logging")?;

    if let Some(suffix) = &cli.suffix {
        context
            .set_source_suffix(suffix.clone())
            .context("invalid --suffix")?;
    }

    let output = context.execute(&cli.command)?;
    Ok(output)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
