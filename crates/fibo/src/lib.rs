//! fibo library: argument parsing, dispatch and exit codes for the CLI.

pub mod app;
pub mod config;
pub mod errors;
