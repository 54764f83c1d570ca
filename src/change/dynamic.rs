use log::{debug, trace};

use super::denominations::Denominations;
use super::solution::{Algorithm, CoinCount, SolveResult};
use super::trace::Trace;
use super::ChangeSolver;

/// Marker for table entries no combination of coins reaches.
const UNREACHABLE: usize = usize::MAX;

/// Exact change-making by bottom-up dynamic programming.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl ChangeSolver for ExactSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Exact
    }

    fn solve(&self, amount: usize, denominations: &Denominations) -> SolveResult {
        solve(amount, denominations)
    }
}

/// Minimum-coin table and the coin chosen last for each sub-amount.
struct Tables {
    min_coins: Vec<usize>,
    choice: Vec<Option<usize>>,
}

impl Tables {
    fn build(amount: usize, coins: &[usize]) -> Self {
        trace!("allocating dp tables of {} entries", amount + 1);

        let mut min_coins = vec![UNREACHABLE; amount + 1];
        let mut choice = vec![None; amount + 1];
        min_coins[0] = 0;

        for i in 1..=amount {
            for &coin in coins {
                if coin > i || min_coins[i - coin] == UNREACHABLE {
                    continue;
                }
                let candidate = min_coins[i - coin] + 1;
                if candidate < min_coins[i] {
                    min_coins[i] = candidate;
                    choice[i] = Some(coin);
                }
            }
        }

        Self { min_coins, choice }
    }
}

/// Finds a minimum-size multiset of coins summing to `amount`.
///
/// Fills `min_coins[0..=amount]` bottom-up, then walks the choice table back
/// from `amount` to 0. Only the walk is traced; the table fill is not.
///
/// Time O(amount × n), space O(amount). The solver imposes no ceiling on
/// `amount`; callers should bound it (see [`crate::Limits`]).
///
/// # Examples
///
/// ```
/// use coinchange::{dynamic, CoinCount, Denominations};
///
/// let coins = Denominations::new(vec![1, 3, 4]).unwrap();
/// let result = dynamic::solve(6, &coins);
/// assert_eq!(result.coins(), &[3, 3]);
/// assert_eq!(result.count(), CoinCount::Coins(2));
///
/// // Impossible to form 7 from [2, 4]
/// let coins = Denominations::new(vec![2, 4]).unwrap();
/// assert!(!dynamic::solve(7, &coins).is_success());
/// ```
pub fn solve(amount: usize, denominations: &Denominations) -> SolveResult {
    let tables = Tables::build(amount, denominations.as_slice());
    let mut trace = Trace::new();

    if tables.min_coins[amount] == UNREACHABLE {
        trace.fail(
            format!("Amount {} cannot be formed with the given coins", amount),
            amount,
        );
        debug!("dp found no solution for amount {}", amount);
        return SolveResult::failed(Algorithm::Exact, amount, trace);
    }

    trace.start(format!("Backtrack from amount {}", amount), amount);

    let mut selected = Vec::with_capacity(tables.min_coins[amount]);
    let mut current = amount;
    // Every reachable non-zero entry has a choice pointing at a smaller one.
    while let Some(coin) = tables.choice[current] {
        selected.push(coin);
        current -= coin;
        trace.take(
            format!("Take coin {}, remaining {}", coin, current),
            current,
            coin,
            None,
        );
    }
    debug_assert_eq!(current, 0);
    debug_assert_eq!(selected.len(), tables.min_coins[amount]);

    trace.success(
        format!("Formed {} with {} coins", amount, selected.len()),
        current,
    );
    debug!("dp formed {} with {} coins", amount, selected.len());
    SolveResult::solved(Algorithm::Exact, amount, selected, trace)
}

/// Minimum coin counts for every amount in `0..=up_to`.
///
/// Shares the table fill with [`solve`] and is what the canonicity sweep uses
/// to avoid one table per amount.
pub fn min_coin_counts(up_to: usize, denominations: &Denominations) -> Vec<CoinCount> {
    Tables::build(up_to, denominations.as_slice())
        .min_coins
        .into_iter()
        .map(|n| {
            if n == UNREACHABLE {
                CoinCount::Unreachable
            } else {
                CoinCount::Coins(n)
            }
        })
        .collect()
}
