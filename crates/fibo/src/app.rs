//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use fibo_cli::presenter::ResultPresenter;
use fibo_core::digits::estimated_digits;
use fibo_core::registry::{CalculatorFactory, DefaultFactory};

use crate::config::AppConfig;

/// Run the application, handing the result to `presenter`.
pub fn run(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<()> {
    debug!(
        index = config.index,
        algo = %config.algo,
        print = config.print(),
        digits = estimated_digits(config.index),
        "configuration resolved"
    );

    let factory = DefaultFactory::new();
    let calculator = factory.get(config.algo);

    let value = calculator.calculate(config.index)?;

    presenter
        .present_result(config.index, &value)
        .context("failed to write result")?;

    Ok(())
}
