//! # fibo-cli
//!
//! Result presentation for the `fibo` command line: decimal rendering,
//! stdout writing and output suppression.

pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, ResultPresenter};
