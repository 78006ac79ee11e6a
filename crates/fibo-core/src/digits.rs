//! Decimal size estimate for F(n).
//!
//! From Binet's formula, log10 F(n) ~= n*log10(phi) - log10(5)/2, so the
//! digit count is floor of that plus one.

use crate::constants::{HALF_LOG10_5, LOG10_PHI};

/// Estimated number of decimal digits of F(n). Never less than 1.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn estimated_digits(n: u64) -> usize {
    let log10 = n as f64 * LOG10_PHI - HALF_LOG10_5;
    if log10 < 0.0 {
        return 1;
    }
    log10.floor() as usize + 1
}
