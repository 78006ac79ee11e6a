//! Straight iterative Fibonacci (`straight`).

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::{CoreCalculator, FibError};

/// Accumulates forward from F(1) = F(2) = 1, one big addition per index.
///
/// Slow but obviously correct; used to cross-check `FastDoubling`.
pub struct StraightIterative;

impl StraightIterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for StraightIterative {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for StraightIterative {
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError> {
        let mut trailing = BigUint::one();
        let mut leading = BigUint::one();

        for _ in 3..=n {
            std::mem::swap(&mut trailing, &mut leading);
            leading += &trailing;
        }

        Ok(leading)
    }

    fn name(&self) -> &'static str {
        "StraightIterative"
    }
}
