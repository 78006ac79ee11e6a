//! Algorithm selector and calculator factory.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
use crate::fastdoubling::FastDoubling;
use crate::naive::NaiveRecursive;
use crate::straight::StraightIterative;

/// The selectable computation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Naive double recursion on `u64`.
    Naive,
    /// Linear accumulation on big integers.
    Straight,
    /// Fast doubling on big integers.
    #[default]
    Adv,
}

impl Algorithm {
    /// Every algorithm, in the order they are listed to users.
    pub const ALL: [Algorithm; 3] = [Algorithm::Naive, Algorithm::Straight, Algorithm::Adv];

    /// Command-line names, matching `ALL`.
    pub const NAMES: [&'static str; 3] = ["naive", "straight", "adv"];

    /// The command-line name of this algorithm.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Straight => "straight",
            Algorithm::Adv => "adv",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.as_str() == s)
            .ok_or_else(|| {
                FibError::Config(format!(
                    "unrecognized algorithm: '{s}'. Valid algorithms: {}",
                    Algorithm::NAMES.join(" ")
                ))
            })
    }
}

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Create the calculator for an algorithm.
    fn get(&self, algorithm: Algorithm) -> Arc<dyn Calculator>;

    /// List all available algorithms.
    fn available(&self) -> &[Algorithm];
}

/// Default factory wrapping each strategy in a `FibCalculator`.
#[derive(Debug, Default)]
pub struct DefaultFactory;

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn create_core(algorithm: Algorithm) -> Arc<dyn CoreCalculator> {
        match algorithm {
            Algorithm::Naive => Arc::new(NaiveRecursive::new()),
            Algorithm::Straight => Arc::new(StraightIterative::new()),
            Algorithm::Adv => Arc::new(FastDoubling::new()),
        }
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, algorithm: Algorithm) -> Arc<dyn Calculator> {
        Arc::new(FibCalculator::new(Self::create_core(algorithm)))
    }

    fn available(&self) -> &[Algorithm] {
        &Algorithm::ALL
    }
}
