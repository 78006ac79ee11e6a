//! CLI result presenter.

use std::io::{self, Write};

use num_bigint::BigUint;
use tracing::debug;

use crate::output::{format_result, write_line};
use crate::ui::error_line;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present F(n).
    fn present_result(&self, n: u64, result: &BigUint) -> io::Result<()>;

    /// Present an error.
    fn present_error(&self, error: &str) -> io::Result<()>;
}

/// Presenter writing the bare decimal value to stdout, unless suppressed.
pub struct CLIResultPresenter {
    print: bool,
}

impl CLIResultPresenter {
    /// `print == false` corresponds to `-n`: results are computed but never written.
    #[must_use]
    pub fn new(print: bool) -> Self {
        Self { print }
    }

    /// Write F(n) to an arbitrary sink.
    pub fn write_result<W: Write>(&self, out: &mut W, n: u64, result: &BigUint) -> io::Result<()> {
        if !self.print {
            debug!(n, "output suppressed");
            return Ok(());
        }
        write_line(out, &format_result(result))
    }

    /// Write an error line to an arbitrary sink. Never suppressed by `-n`.
    #[allow(clippy::unused_self)]
    pub fn write_error<W: Write>(&self, out: &mut W, error: &str) -> io::Result<()> {
        write_line(out, &error_line(error))
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, n: u64, result: &BigUint) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_result(&mut lock, n, result)
    }

    fn present_error(&self, error: &str) -> io::Result<()> {
        let stderr = io::stderr();
        let mut lock = stderr.lock();
        self.write_error(&mut lock, error)
    }
}
