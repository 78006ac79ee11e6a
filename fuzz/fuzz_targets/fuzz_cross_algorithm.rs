#![no_main]

use libfuzzer_sys::fuzz_target;

use fibo_core::calculator::CoreCalculator;
use fibo_core::constants::{FIB_TABLE, MAX_FIB_U64};
use fibo_core::fastdoubling::FastDoubling;
use fibo_core::straight::StraightIterative;
use num_bigint::BigUint;

fuzz_target!(|data: [u8; 2]| {
    // Straight iteration is linear, so cap the index.
    let n = u64::from(u16::from_le_bytes(data) % 8192) + 1;

    let adv = FastDoubling::new().calculate_core(n).unwrap();
    let straight = StraightIterative::new().calculate_core(n).unwrap();
    assert_eq!(adv, straight, "F({n})");

    if n <= MAX_FIB_U64 {
        assert_eq!(adv, BigUint::from(FIB_TABLE[n as usize]));
    }
});
