//! Coin change
//!
//! Computes the minimum number of coins needed to form an amount with two
//! competing algorithms, a greedy heuristic and an exact dynamic-programming
//! solver, and records a step trace of each for side-by-side inspection.

pub mod change;
pub mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod history;
pub mod report;
pub mod sweep;

pub use change::{
    dynamic, greedy, min_coin_counts, Algorithm, ChangeSolver, CoinCount, Denominations,
    ExactSolver, GreedySolver, SolveResult, TraceEvent, TraceKind,
};
pub use compare::{ChangeRequest, Comparison, TimedResult};
pub use config::{Config, HistoryConfig, Limits, LoggingConfig};
pub use error::{Error, Result};
pub use history::{History, HistoryEntry};
pub use sweep::{find_counterexamples, is_canonical, Counterexample};
