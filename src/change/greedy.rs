use log::debug;

use super::denominations::Denominations;
use super::solution::{Algorithm, SolveResult};
use super::trace::Trace;
use super::ChangeSolver;

/// Greedy change-making: always take as many of the largest coin as fit.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl ChangeSolver for GreedySolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn solve(&self, amount: usize, denominations: &Denominations) -> SolveResult {
        solve(amount, denominations)
    }
}

/// Forms `amount` by repeatedly consuming the largest denomination that fits.
///
/// Runs in O(n log n + k) for `n` denominations and `k` coins returned,
/// which is O(amount) when a 1-coin absorbs the remainder. The answer is
/// optimal for canonical coin systems such as `{1, 5, 10, 25}` but not in general, and
/// the scan may fail to form an amount that is reachable (e.g. `6` from
/// `{4, 3}`). Failure is reported through [`SolveResult::is_success`].
///
/// # Examples
///
/// ```
/// use coinchange::{greedy, CoinCount, Denominations};
///
/// let coins = Denominations::new(vec![1, 3, 4]).unwrap();
/// let result = greedy::solve(6, &coins);
///
/// // 4 + 1 + 1, one more coin than the optimal 3 + 3
/// assert_eq!(result.coins(), &[4, 1, 1]);
/// assert_eq!(result.count(), CoinCount::Coins(3));
/// ```
pub fn solve(amount: usize, denominations: &Denominations) -> SolveResult {
    let coins = denominations.sorted_descending();
    let mut trace = Trace::new();
    let mut selected = Vec::new();
    let mut remaining = amount;

    trace.start(format!("Start with amount {}", amount), remaining);

    for &coin in &coins {
        if remaining == 0 {
            break;
        }

        trace.check(format!("Check coin {}", coin), remaining, coin);

        let n = remaining / coin;
        if n > 0 {
            selected.extend(std::iter::repeat(coin).take(n));
            remaining -= n * coin;
            trace.take(
                format!("Take {} x {}, remaining {}", n, coin, remaining),
                remaining,
                coin,
                Some(n),
            );
        } else {
            trace.skip(
                format!("Coin {} exceeds remaining {}, skip", coin, remaining),
                remaining,
                coin,
            );
        }
    }

    if remaining != 0 {
        trace.fail(
            format!("Cannot form remaining {} with the available coins", remaining),
            remaining,
        );
        debug!("greedy failed for amount {} (left {})", amount, remaining);
        return SolveResult::failed(Algorithm::Greedy, amount, trace);
    }

    trace.success(
        format!("Formed {} with {} coins", amount, selected.len()),
        remaining,
    );
    debug!("greedy formed {} with {} coins", amount, selected.len());
    SolveResult::solved(Algorithm::Greedy, amount, selected, trace)
}

/// Coin count the greedy scan reaches, without building a trace.
///
/// `sorted` must already be in descending order.
pub(crate) fn count_sorted(amount: usize, sorted: &[usize]) -> Option<usize> {
    let mut remaining = amount;
    let mut total = 0;
    for &coin in sorted {
        if remaining == 0 {
            break;
        }
        total += remaining / coin;
        remaining %= coin;
    }
    (remaining == 0).then_some(total)
}
