//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by the CLI.
//! `CoreCalculator` is the internal trait implemented by the strategies.
//! `FibCalculator` is a decorator that adds index validation and tracing.

use std::sync::Arc;
use std::time::Instant;

use num_bigint::BigUint;
use tracing::{debug, debug_span};

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index is outside the 1-indexed sequence.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error, e.g. an unknown algorithm name.
    #[error("{0}")]
    Config(String),

    /// The strategy cannot represent F(n) in its native integer width.
    #[error("{algorithm} cannot represent F({n}): index must be at most {max}")]
    Overflow {
        /// Name of the strategy that refused the index.
        algorithm: &'static str,
        /// Requested index.
        n: u64,
        /// Largest index the strategy supports.
        max: u64,
    },
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n), 1-indexed.
    fn calculate(&self, n: u64) -> Result<BigUint, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `FibCalculator`, which guarantees `n >= 1`.
pub trait CoreCalculator: Send + Sync {
    /// Perform the core calculation for `n >= 1`.
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;
}

/// Decorator that wraps a `CoreCalculator` with validation and tracing.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        if n == 0 {
            return Err(FibError::InvalidInput(
                "index must be a positive integer".into(),
            ));
        }

        let span = debug_span!("calculate", algorithm = self.inner.name(), n);
        let _guard = span.enter();

        let start = Instant::now();
        let value = self.inner.calculate_core(n)?;
        debug!(
            elapsed = ?start.elapsed(),
            bits = value.bits(),
            "calculation complete"
        );
        Ok(value)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
