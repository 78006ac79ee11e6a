//! Fast Doubling algorithm for Fibonacci computation (`adv`).
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k+1)^2 + F(k)^2
//!
//! Iterates over the bits of n from MSB to LSB. Every bit doubles the
//! running index k; a set bit additionally advances it by one, so after
//! the last bit k == n.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

use crate::calculator::{CoreCalculator, FibError};

/// Running pair (F(k), F(k+1)) plus a scratch register for the doubling step.
#[derive(Debug, Clone)]
pub struct DoublingState {
    /// Index the pair currently describes.
    pub k: u64,
    /// Current F(k).
    pub fk: BigUint,
    /// Current F(k+1).
    pub fk1: BigUint,
    t: BigUint,
}

impl DoublingState {
    /// Create a new state seeded with F(0) = 0, F(1) = 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            k: 0,
            fk: BigUint::zero(),
            fk1: BigUint::one(),
            t: BigUint::zero(),
        }
    }

    /// k -> 2k.
    pub fn double(&mut self) {
        // t = 2*F(k+1) - F(k), never negative since F(k+1) >= F(k)
        self.t.clone_from(&self.fk1);
        self.t <<= 1u32;
        self.t -= &self.fk;

        let f2k = &self.fk * &self.t;
        let f2k1 = &self.fk1 * &self.fk1 + &self.fk * &self.fk;

        self.fk = f2k;
        self.fk1 = f2k1;
        self.k <<= 1;
    }

    /// k -> k + 1.
    pub fn advance(&mut self) {
        // fk takes old F(k+1), fk1 becomes F(k) + F(k+1)
        std::mem::swap(&mut self.fk, &mut self.fk1);
        self.fk1 += &self.fk;
        self.k += 1;
    }

    /// Consume one bit of the target index.
    pub fn step(&mut self, bit: bool) {
        self.double();
        if bit {
            self.advance();
        }
    }
}

impl Default for DoublingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use fibo_core::calculator::CoreCalculator;
/// use fibo_core::fastdoubling::FastDoubling;
///
/// let result = FastDoubling::new().calculate_core(100).unwrap();
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Execute the doubling loop.
    fn execute_doubling_loop(n: u64) -> BigUint {
        let num_bits = u64::BITS - n.leading_zeros();
        let mut state = DoublingState::new();

        for i in (0..num_bits).rev() {
            let bit = (n >> i) & 1 == 1;
            state.step(bit);
            trace!(bit = u8::from(bit), k = state.k, "doubling step");
        }

        debug_assert_eq!(state.k, n);
        state.fk
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError> {
        Ok(Self::execute_doubling_loop(n))
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
