//! CoNLL writer CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use conll_cli::logging::{LogConfig, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_convert, run_fields, run_template};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Dispatch a subcommand. `Ok(false)` means some documents failed.
fn run(command: Command) -> Result<bool> {
    match command {
        Command::Convert(args) => {
            let result = run_convert(&args)?;
            if !args.stdout {
                print_summary(&result);
            }
            Ok(!result.has_errors())
        }
        Command::Fields => run_fields().map(|()| true),
        Command::Template(args) => run_template(&args).map(|()| true),
    }
}

/// Build logging configuration from CLI flags.
///
/// An explicit `-v`/`-q` or `--log-level` disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), Into::into);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        with_ansi,
        ..LogConfig::default()
    }
}
