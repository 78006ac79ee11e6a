//! fibo: the n-th Fibonacci number, in various ways.

use std::process::ExitCode;

use fibo_cli::CLIResultPresenter;
use fibo_lib::{app, config, errors};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => return errors::report_usage(&err),
    };

    let presenter = CLIResultPresenter::new(config.print());
    match app::run(&config, &presenter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => errors::report(&err, &presenter),
    }
}
