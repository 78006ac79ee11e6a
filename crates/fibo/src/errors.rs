//! Error reporting and exit codes.

use std::process::ExitCode;

use clap::error::ErrorKind;

use fibo_cli::presenter::ResultPresenter;
use fibo_core::calculator::FibError;
use fibo_core::constants::exit_codes;

/// Exit code for a failed argument parse. Help and version are successes.
#[must_use]
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::ERROR_USAGE,
    }
}

/// Exit code for an error returned by `app::run`.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::Overflow { .. }) => exit_codes::ERROR_UNSUPPORTED,
        _ => exit_codes::ERROR_USAGE,
    }
}

/// Print a clap parse outcome (help text goes to stdout, errors to stderr).
pub fn report_usage(err: &clap::Error) -> ExitCode {
    // Nothing left to report to if the terminal is gone.
    let _ = err.print();
    ExitCode::from(usage_exit_code(err))
}

/// Hand an application error to the presenter and pick the exit code.
pub fn report(err: &anyhow::Error, presenter: &dyn ResultPresenter) -> ExitCode {
    let _ = presenter.present_error(&format!("{err:#}"));
    ExitCode::from(exit_code_for(err))
}
