//! blinko - command-line client for a Blinko note server
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use blinko::cli::{self, Cli};
use blinko::core::logging;
use blinko::render::OutputFormat;
use blinko::render::error::render_error;
use blinko::util::env::should_use_color;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayVersion | ErrorKind::DisplayHelp) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let err = cli::args::parse_error(&e);
            eprintln!("{}", render_error(&err, false, should_use_color(false)));
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(logging::parse_log_level_from_env)
        .unwrap_or_default();
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    let log_file = logging::parse_log_file_from_env();
    logging::init(log_level, log_format, log_file, cli.verbose);

    let command = if cli.help { None } else { cli.invocation() };
    let render = cli.render_options();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = cli::dispatch(command, cli.config.as_deref(), render, &mut out).await;
    let _ = out.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), category = %e.category(), "Command failed: {e}");
            let json = render.format == OutputFormat::Json;
            let color = should_use_color(cli.no_color);
            eprintln!("{}", render_error(&e, json, color));
            ExitCode::FAILURE
        }
    }
}
