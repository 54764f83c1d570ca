//! Change-making algorithms.
//!
//! This module provides two solvers for the minimum-coin change problem:
//! - Greedy (fast, optimal only for canonical coin systems, may fail)
//! - Exact dynamic programming (always optimal when a solution exists)
//!
//! Both are pure functions of `(amount, denominations)` and return a
//! [`SolveResult`] carrying the selected coins and an ordered trace of the
//! decisions that produced them.
//!
//! # Examples
//!
//! ```rust
//! use coinchange::{ChangeSolver, Denominations, ExactSolver, GreedySolver};
//!
//! let coins: Denominations = "1, 5, 10, 25".parse().unwrap();
//! let greedy = GreedySolver.solve(63, &coins);
//! let exact = ExactSolver.solve(63, &coins);
//! assert_eq!(greedy.count(), exact.count());
//! ```

pub mod denominations;
pub mod dynamic;
pub mod greedy;
pub mod solution;
pub mod trace;

/// Trait for change-making algorithms
pub trait ChangeSolver {
    /// Which algorithm this solver implements
    fn algorithm(&self) -> Algorithm;

    /// Form `amount` from `denominations`, each usable any number of times
    fn solve(&self, amount: usize, denominations: &Denominations) -> SolveResult;
}

pub use denominations::Denominations;
pub use dynamic::{min_coin_counts, ExactSolver};
pub use greedy::GreedySolver;
pub use solution::{Algorithm, CoinCount, SolveResult};
pub use trace::{TraceEvent, TraceKind};
