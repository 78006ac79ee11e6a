//! Property-based tests for argument parsing and the public entry point.

use num_bigint::BigUint;
use proptest::prelude::*;

use fibo_core::registry::Algorithm;
use fibo_core::{fibonacci, FIB_TABLE};
use fibo_lib::config::AppConfig;
use fibo_lib::errors::usage_exit_code;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every positive u64 written in decimal is accepted as the index.
    #[test]
    fn positive_index_accepted(n in 1u64..=u64::MAX) {
        let text = n.to_string();
        let config = AppConfig::from_args(["fibo", text.as_str()]).unwrap();
        prop_assert_eq!(config.index, n);
        prop_assert_eq!(config.algo, Algorithm::Adv);
    }

    /// Leading zeros do not change the index.
    #[test]
    fn leading_zeros_ignored(n in 1u64..1_000_000, zeros in 1usize..4) {
        let text = format!("{}{n}", "0".repeat(zeros));
        let config = AppConfig::from_args(["fibo", text.as_str()]).unwrap();
        prop_assert_eq!(config.index, n);
    }

    /// Any token mixing in a non-digit is a usage error with exit code 1.
    #[test]
    fn non_numeric_index_rejected(text in "[0-9]{0,4}[a-zA-Z.*+,][0-9a-zA-Z]{0,4}") {
        let err = AppConfig::from_args(["fibo", text.as_str()]).unwrap_err();
        prop_assert_eq!(usage_exit_code(&err), 1);
    }

    /// Negative-looking tokens are usage errors.
    #[test]
    fn negative_index_rejected(n in 1u64..1_000_000) {
        let text = format!("-{n}");
        let err = AppConfig::from_args(["fibo", text.as_str()]).unwrap_err();
        prop_assert_eq!(usage_exit_code(&err), 1);
    }

    /// A bare `--` anywhere is a usage error, never an end-of-options marker.
    #[test]
    fn double_dash_rejected(n in 1u64..1_000_000, before in any::<bool>()) {
        let index = n.to_string();
        let args = if before {
            ["fibo", "--", index.as_str()]
        } else {
            ["fibo", index.as_str(), "--"]
        };
        let err = AppConfig::from_args(args).unwrap_err();
        prop_assert_eq!(usage_exit_code(&err), 1);
    }

    /// Help anywhere short-circuits, whatever else is on the command line.
    #[test]
    fn help_anywhere(junk in proptest::collection::vec("[a-z0-9-]{1,6}", 0..4), at in 0usize..4) {
        let mut args = junk;
        let at = at.min(args.len());
        args.insert(at, "--help".to_string());
        let err = AppConfig::from_args(std::iter::once("fibo".to_string()).chain(args)).unwrap_err();
        prop_assert_eq!(usage_exit_code(&err), 0);
    }

    /// The public entry point agrees across algorithms where all three apply.
    #[test]
    fn entry_point_algorithms_agree(n in 1u64..=25) {
        #[allow(clippy::cast_possible_truncation)]
        let expected = BigUint::from(FIB_TABLE[n as usize]);
        for algo in Algorithm::ALL {
            prop_assert_eq!(fibonacci(n, algo).unwrap(), expected.clone());
        }
    }
}

#[test]
fn zero_rejected_by_entry_point() {
    for algo in Algorithm::ALL {
        assert!(fibonacci(0, algo).is_err());
    }
}
