//! Constants shared by the strategies and the CLI.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// log10 of the golden ratio, used by the digit estimate.
pub const LOG10_PHI: f64 = 0.208_987_640_249_978_73;

/// log10(5) / 2, used by the digit estimate.
pub const HALF_LOG10_5: f64 = 0.349_485_002_168_009_43;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution, including `--help` and `--version`.
    pub const SUCCESS: u8 = 0;
    /// Argument validation failed.
    pub const ERROR_USAGE: u8 = 1;
    /// The selected strategy cannot represent the requested value.
    pub const ERROR_UNSUPPORTED: u8 = 9;
}
