//! Farm order manager CLI.

use clap::{ColorChoice, Parser};
use farm_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod tables;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{
    run_add, run_close, run_import, run_labels, run_list, run_order, run_orders, run_reset,
    run_sender, run_stats,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let data_dir = cli.data_dir.clone();
    let result = match cli.command {
        Command::Import(args) => run_import(&args, &data_dir),
        Command::Add(args) => run_add(&args, &data_dir),
        Command::List => run_list(&data_dir),
        Command::Orders => run_orders(&data_dir),
        Command::Order(args) => run_order(&args, &data_dir),
        Command::Reset => run_reset(&data_dir),
        Command::Close(args) => run_close(&args, &data_dir),
        Command::Stats(args) => run_stats(&args, &data_dir),
        Command::Sender(args) => run_sender(&args, &data_dir),
        Command::Labels(args) => run_labels(&args, &data_dir),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
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
