//! Application configuration from CLI arguments.

use std::ffi::OsString;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use fibo_core::registry::Algorithm;

/// Calculate the n-th Fibonacci number (1-indexed), in various ways.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fibo", version, about, allow_negative_numbers = true)]
pub struct AppConfig {
    /// Fibonacci index to calculate at.
    #[arg(value_name = "INDEX", value_parser = parse_index)]
    pub index: u64,

    /// Calculation algorithm.
    #[arg(
        long,
        value_name = "ALGO",
        default_value = "adv",
        value_parser = PossibleValuesParser::new(Algorithm::NAMES)
            .try_map(|name| name.parse::<Algorithm>())
    )]
    pub algo: Algorithm,

    /// Don't print the calculated result.
    #[arg(short = 'n', long = "no-print")]
    pub no_print: bool,
}

impl AppConfig {
    /// Parse the process arguments.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::from_args(std::env::args_os())
    }

    /// Parse an argument vector whose first element is the program name.
    ///
    /// On top of clap's validation: an empty argument list is an error,
    /// `-h`/`--help` anywhere wins over every other argument, and a bare
    /// `--` is read as a malformed index rather than an end-of-options marker.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        let Some((bin, rest)) = args.split_first() else {
            return Err(missing_arguments());
        };
        if rest.is_empty() {
            return Err(missing_arguments());
        }
        if rest.iter().any(|arg| arg == "-h" || arg == "--help") {
            return <Self as Parser>::try_parse_from([bin.clone(), OsString::from("--help")]);
        }
        if rest.iter().any(|arg| arg == "--") {
            return Err(Self::command().error(
                ErrorKind::InvalidValue,
                "index must be a positive integer",
            ));
        }

        <Self as Parser>::try_parse_from(args)
    }

    /// Whether the result should be written to stdout.
    #[must_use]
    pub fn print(&self) -> bool {
        !self.no_print
    }
}

fn missing_arguments() -> clap::Error {
    AppConfig::command().error(ErrorKind::MissingRequiredArgument, "missing arguments")
}

/// Parse a Fibonacci index: ASCII digits only, fits in `u64`, non-zero.
fn parse_index(s: &str) -> Result<u64, String> {
    if s.starts_with('-') {
        return Err("index must be a positive integer".to_string());
    }
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("index is invalid as an integer: '{s}'"));
    }
    let n: u64 = s
        .parse()
        .map_err(|_| format!("index is out of range: '{s}'"))?;
    if n == 0 {
        return Err("index must be a positive integer".to_string());
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::from_args(std::iter::once("fibo").chain(args.iter().copied()))
    }

    #[test]
    fn parse_index_accepts_digits() {
        assert_eq!(parse_index("1"), Ok(1));
        assert_eq!(parse_index("007"), Ok(7));
        assert_eq!(parse_index("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn parse_index_rejects() {
        for bad in ["0", "-5", "abc", "1.2", "**", "", "+5", " 5", "5 ", "18446744073709551616"] {
            assert!(parse_index(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn defaults() {
        let config = parse(&["10"]).unwrap();
        assert_eq!(config.index, 10);
        assert_eq!(config.algo, Algorithm::Adv);
        assert!(config.print());
    }

    #[test]
    fn flags_in_any_order() {
        let a = parse(&["4", "--algo", "naive", "-n"]).unwrap();
        let b = parse(&["-n", "--algo", "naive", "4"]).unwrap();
        let c = parse(&["--algo", "naive", "4", "-n"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.algo, Algorithm::Naive);
        assert!(!a.print());
    }

    #[test]
    fn each_algorithm_name() {
        for name in Algorithm::NAMES {
            let config = parse(&["5", "--algo", name]).unwrap();
            assert_eq!(config.algo.as_str(), name);
        }
    }

    #[test]
    fn no_arguments() {
        let err = AppConfig::from_args(["fibo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let empty: [&str; 0] = [];
        assert!(AppConfig::from_args(empty).is_err());
    }

    #[test]
    fn usage_errors() {
        let cases: &[&[&str]] = &[
            &["0"],
            &["-5"],
            &["abc"],
            &["--algo", "bogus", "5"],
            &["--algo", "2"],
            &["2", "--algo"],
            &["5", "-n", "-n"],
            &["5", "--algo", "adv", "--algo", "adv"],
            &["1", "--algo", "adv", "2"],
            &["1", "--helpa"],
            &["-n"],
            &["--"],
            &["--", "5"],
            &["5", "--"],
        ];
        for args in cases {
            let err = parse(args).unwrap_err();
            assert!(
                !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion),
                "{args:?} should be a usage error"
            );
        }
    }

    #[test]
    fn help_wins_over_invalid_arguments() {
        let cases: &[&[&str]] = &[
            &["--help"],
            &["-h"],
            &["3000", "--help"],
            &["0", "--help"],
            &["--algo", "bogus", "-h"],
            &["-n", "-n", "--help"],
        ];
        for args in cases {
            let err = parse(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "{args:?}");
        }
    }

    #[test]
    fn version_flag() {
        let err = parse(&["--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn command_is_well_formed() {
        AppConfig::command().debug_assert();
    }
}
