//! Naive recursive Fibonacci (`naive`).
//!
//! Textbook double recursion on `u64`, no memoization. Exponential time;
//! only meant for small indices.

use num_bigint::BigUint;

use crate::calculator::{CoreCalculator, FibError};
use crate::constants::MAX_FIB_U64;

/// Naive recursive calculator.
pub struct NaiveRecursive;

impl NaiveRecursive {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// F(n) with F(1) = F(2) = 1. Requires `n <= MAX_FIB_U64`.
    #[must_use]
    pub fn fib(n: u64) -> u64 {
        if n <= 2 {
            return 1;
        }
        Self::fib(n - 1) + Self::fib(n - 2)
    }
}

impl Default for NaiveRecursive {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for NaiveRecursive {
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError> {
        if n > MAX_FIB_U64 {
            return Err(FibError::Overflow {
                algorithm: self.name(),
                n,
                max: MAX_FIB_U64,
            });
        }
        Ok(BigUint::from(Self::fib(n)))
    }

    fn name(&self) -> &'static str {
        "NaiveRecursive"
    }
}
