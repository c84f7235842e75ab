mod catalog;
mod cli;
mod commands;
mod error;
mod executor;
mod managers;
mod utils;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};
use cli::{Cli, Command};
use colored::Colorize;
use managers::OsFamily;
use std::process::ExitCode;
use utils::SystemRunner;

fn main() -> ExitCode {
    // A broken embedded catalog is a build defect; nothing can run without it
    let catalog = match catalog::load_embedded_catalog()
        .context("Embedded language catalog is invalid")
    {
        Ok(catalog) => catalog,
        Err(e) => return report(e),
    };

    let cli = match Cli::command()
        .after_help(cli::help_footer(&catalog))
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors fail
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Setup logging
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    match run(cli, &catalog) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => report(e),
    }
}

fn run(cli: Cli, catalog: &catalog::Catalog) -> Result<bool> {
    let runner = SystemRunner::new();
    let family = OsFamily::current();

    match cli.command {
        Command::Install { language, dry_run } => {
            commands::install::run(catalog, &runner, family, &language, dry_run)
        }
        Command::List { json } => {
            commands::list::run(catalog, &runner, family, json)?;
            Ok(true)
        }
    }
}

fn report(e: anyhow::Error) -> ExitCode {
    eprintln!("{} {:#}", "Error:".red().bold(), e);
    ExitCode::FAILURE
}
