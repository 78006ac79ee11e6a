//! # fibo-core
//!
//! Core library for the `fibo` Fibonacci calculator.
//! Implements Fast Doubling (`adv`), straight iteration (`straight`) and
//! naive recursion (`naive`) behind a single calculator contract.

pub mod calculator;
pub mod constants;
pub mod digits;
pub mod fastdoubling;
pub mod naive;
pub mod registry;
pub mod straight;

#[cfg(feature = "gmp")]
pub mod calculator_gmp;

// Re-exports
pub use calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use digits::estimated_digits;
pub use registry::{Algorithm, CalculatorFactory, DefaultFactory};

use num_bigint::BigUint;

/// Compute F(n), 1-indexed, with the given algorithm.
///
/// # Example
/// ```
/// use fibo_core::Algorithm;
///
/// assert_eq!(fibo_core::fibonacci(10, Algorithm::Adv).unwrap().to_string(), "55");
/// assert!(fibo_core::fibonacci(0, Algorithm::Adv).is_err());
/// ```
pub fn fibonacci(n: u64, algorithm: Algorithm) -> Result<BigUint, FibError> {
    DefaultFactory::new().get(algorithm).calculate(n)
}
