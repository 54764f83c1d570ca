use std::fmt;

use serde::{Deserialize, Serialize};

use super::trace::{Trace, TraceEvent};

/// Which algorithm produced a [`SolveResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Greedy,
    Exact,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Greedy => f.write_str("Greedy"),
            Algorithm::Exact => f.write_str("Dynamic Programming"),
        }
    }
}

/// Number of coins in a solution, or the marker for "no solution exists".
///
/// `Unreachable` carries no numeric value and serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoinCount {
    Coins(usize),
    Unreachable,
}

impl CoinCount {
    pub fn coins(&self) -> Option<usize> {
        match self {
            CoinCount::Coins(n) => Some(*n),
            CoinCount::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, CoinCount::Coins(_))
    }
}

impl fmt::Display for CoinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinCount::Coins(n) => write!(f, "{}", n),
            CoinCount::Unreachable => f.write_str("Failed"),
        }
    }
}

/// Output of one solver invocation.
///
/// A result is either fully successful (`coins` sums to `amount` and `count`
/// equals `coins.len()`) or fully failed (no coins, `count` is
/// [`CoinCount::Unreachable`]). Both constructors are crate-private so the
/// pairing cannot be broken from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveResult {
    algorithm: Algorithm,
    amount: usize,
    coins: Vec<usize>,
    count: CoinCount,
    success: bool,
    trace: Vec<TraceEvent>,
}

impl SolveResult {
    pub(crate) fn solved(
        algorithm: Algorithm,
        amount: usize,
        coins: Vec<usize>,
        trace: Trace,
    ) -> Self {
        debug_assert_eq!(coins.iter().sum::<usize>(), amount);
        Self {
            algorithm,
            amount,
            count: CoinCount::Coins(coins.len()),
            coins,
            success: true,
            trace: trace.into_events(),
        }
    }

    pub(crate) fn failed(algorithm: Algorithm, amount: usize, trace: Trace) -> Self {
        Self {
            algorithm,
            amount,
            coins: Vec::new(),
            count: CoinCount::Unreachable,
            success: false,
            trace: trace.into_events(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    /// Coins in the order the algorithm selected them.
    pub fn coins(&self) -> &[usize] {
        &self.coins
    }

    pub fn count(&self) -> CoinCount {
        self.count
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }
}
