//! medscreen CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::Level;

use medscreen_cli::commands::run;
use medscreen_cli::config::RunConfig;
use medscreen_cli::logging::{LogConfig, LogFormat, init_logging};
use medscreen_cli::summary::print_summary;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_from_cli(cli) {
        Ok(summary) => {
            print_summary(&summary);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run_from_cli(cli: Cli) -> anyhow::Result<medscreen_cli::commands::RunSummary> {
    let config = RunConfig::resolve(
        cli.data_dir,
        cli.results,
        cli.vocabulary,
        cli.report,
        cli.min_outliers,
    )?;
    run(&config)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level: cli
            .verbosity
            .tracing_level_filter()
            .into_level()
            .unwrap_or(Level::ERROR),
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config.level = match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
