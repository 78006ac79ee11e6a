//! GMP-based Fast Doubling using the `rug` crate.
//!
//! Only available when the `gmp` feature is enabled.

use num_bigint::BigUint;
use rug::integer::Order;
use rug::{Assign, Integer};

use crate::calculator::{CoreCalculator, FibError};

/// Fast Doubling on GMP integers, converted to `BigUint` on return.
pub struct GmpFastDoubling;

impl GmpFastDoubling {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn execute_doubling_loop(n: u64) -> Integer {
        let mut fk = Integer::from(0);
        let mut fk1 = Integer::from(1);
        let mut f2k = Integer::new();
        let mut f2k1 = Integer::new();
        let mut t = Integer::new();

        for i in (0..u64::BITS - n.leading_zeros()).rev() {
            // F(2k) = F(k) * (2*F(k+1) - F(k))
            t.assign(&fk1 << 1u32);
            t -= &fk;
            f2k.assign(&fk * &t);

            // F(2k+1) = F(k+1)^2 + F(k)^2
            f2k1.assign(fk1.square_ref());
            t.assign(fk.square_ref());
            f2k1 += &t;

            std::mem::swap(&mut fk, &mut f2k);
            std::mem::swap(&mut fk1, &mut f2k1);

            if (n >> i) & 1 == 1 {
                std::mem::swap(&mut fk, &mut fk1);
                fk1 += &fk;
            }
        }

        fk
    }
}

impl Default for GmpFastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for GmpFastDoubling {
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError> {
        let value = Self::execute_doubling_loop(n);
        Ok(BigUint::from_slice(&value.to_digits::<u32>(Order::Lsf)))
    }

    fn name(&self) -> &'static str {
        "GmpFastDoubling"
    }
}
