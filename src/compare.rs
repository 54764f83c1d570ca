//! Side-by-side runs of the greedy and exact solvers.

use std::time::{Duration, Instant};

use log::{info, warn};
use serde::{Serialize, Serializer};

use crate::change::{
    Algorithm, ChangeSolver, CoinCount, Denominations, ExactSolver, GreedySolver, SolveResult,
};
use crate::config::Limits;
use crate::error::{Error, Result};

/// A validated change request: an amount within the configured ceiling and a
/// set of positive denominations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRequest {
    amount: usize,
    denominations: Denominations,
}

impl ChangeRequest {
    pub fn new(amount: usize, denominations: Denominations, limits: &Limits) -> Result<Self> {
        if let Err(err) = limits.check_amount(amount) {
            warn!("rejecting request: {}", err);
            return Err(err);
        }
        Ok(Self {
            amount,
            denominations,
        })
    }

    /// Builds a request from user-facing text, e.g. `"63"` and `"1, 5, 10, 25"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::{ChangeRequest, Limits};
    ///
    /// let request = ChangeRequest::parse("63", "1, 5, 10, 25", &Limits::default()).unwrap();
    /// assert_eq!(request.amount(), 63);
    /// assert!(ChangeRequest::parse("six", "1", &Limits::default()).is_err());
    /// ```
    pub fn parse(amount: &str, denominations: &str, limits: &Limits) -> Result<Self> {
        let trimmed = amount.trim();
        let amount = trimmed
            .parse::<usize>()
            .map_err(|_| Error::InvalidAmount(trimmed.to_string()))?;
        let denominations = denominations.parse::<Denominations>()?;
        Self::new(amount, denominations, limits)
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn denominations(&self) -> &Denominations {
        &self.denominations
    }
}

/// A solver result together with the wall-clock time it took.
#[derive(Debug, Clone, Serialize)]
pub struct TimedResult {
    #[serde(flatten)]
    pub result: SolveResult,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl TimedResult {
    pub fn run<S: ChangeSolver>(solver: &S, request: &ChangeRequest) -> Self {
        let start = Instant::now();
        let result = solver.solve(request.amount, &request.denominations);
        let elapsed = start.elapsed();
        Self { result, elapsed }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

fn serialize_millis<S: Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// Outcome of running both solvers on the same request.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub amount: usize,
    pub denominations: Denominations,
    pub greedy: TimedResult,
    pub exact: TimedResult,
}

impl Comparison {
    /// Runs the greedy solver, then the exact solver, timing each.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::{ChangeRequest, Comparison, CoinCount, Limits};
    ///
    /// let request = ChangeRequest::parse("6", "1, 3, 4", &Limits::default()).unwrap();
    /// let comparison = Comparison::run(&request);
    /// assert_eq!(comparison.greedy.result.count(), CoinCount::Coins(3));
    /// assert_eq!(comparison.exact.result.count(), CoinCount::Coins(2));
    /// assert!(!comparison.counts_agree());
    /// ```
    pub fn run(request: &ChangeRequest) -> Self {
        let greedy = TimedResult::run(&GreedySolver, request);
        let exact = TimedResult::run(&ExactSolver, request);

        let comparison = Self {
            amount: request.amount,
            denominations: request.denominations.clone(),
            greedy,
            exact,
        };

        if !comparison.counts_agree() {
            info!(
                "greedy and dp disagree for amount {} with coins [{}]: {} vs {}",
                comparison.amount,
                comparison.denominations,
                comparison.greedy.result.count(),
                comparison.exact.result.count()
            );
        }

        comparison
    }

    /// True when both solvers report the same count, including both failing.
    pub fn counts_agree(&self) -> bool {
        self.greedy.result.count() == self.exact.result.count()
    }

    /// True when greedy found a solution as small as the optimum.
    pub fn greedy_is_optimal(&self) -> bool {
        self.greedy.result.is_success() && self.counts_agree()
    }

    /// Coins greedy used beyond the optimum, when both succeeded.
    pub fn excess_coins(&self) -> Option<usize> {
        match (self.greedy.result.count(), self.exact.result.count()) {
            (CoinCount::Coins(g), CoinCount::Coins(e)) => Some(g.saturating_sub(e)),
            _ => None,
        }
    }

    pub fn result(&self, algorithm: Algorithm) -> &TimedResult {
        match algorithm {
            Algorithm::Greedy => &self.greedy,
            Algorithm::Exact => &self.exact,
        }
    }
}
