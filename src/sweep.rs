//! Searching for amounts where greedy change-making is not optimal.
//!
//! A coin system is *canonical* when the greedy algorithm yields an optimal
//! count for every amount. When the system contains a 1-coin and is not
//! canonical, its smallest counterexample lies below the sum of its two
//! largest coins, so checking that window is enough to decide canonicity.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::change::{dynamic, greedy, CoinCount, Denominations};

/// An amount where greedy and the exact solver report different counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counterexample {
    pub amount: usize,
    pub greedy: CoinCount,
    pub exact: CoinCount,
}

/// Lists every amount in `1..=up_to` where greedy differs from the optimum,
/// in increasing order of amount.
///
/// Amounts that neither algorithm can form are not counterexamples.
///
/// # Examples
///
/// ```
/// use coinchange::{sweep, CoinCount, Denominations};
///
/// let coins = Denominations::new(vec![1, 3, 4]).unwrap();
/// let found = sweep::find_counterexamples(&coins, 10);
/// assert_eq!(found[0].amount, 6);
/// assert_eq!(found[0].greedy, CoinCount::Coins(3));
/// assert_eq!(found[0].exact, CoinCount::Coins(2));
/// ```
pub fn find_counterexamples(denominations: &Denominations, up_to: usize) -> Vec<Counterexample> {
    let exact = dynamic::min_coin_counts(up_to, denominations);
    let sorted = denominations.sorted_descending();

    let check = |amount: usize| {
        let greedy = match greedy::count_sorted(amount, &sorted) {
            Some(n) => CoinCount::Coins(n),
            None => CoinCount::Unreachable,
        };
        let exact = exact[amount];
        (greedy != exact).then_some(Counterexample {
            amount,
            greedy,
            exact,
        })
    };

    #[cfg(feature = "parallel")]
    let found = (1..=up_to).into_par_iter().filter_map(check).collect();
    #[cfg(not(feature = "parallel"))]
    let found = (1..=up_to).filter_map(check).collect();

    debug!("swept amounts 1..={} for coins [{}]", up_to, denominations);
    found
}

/// Upper end of the window that must contain any counterexample.
///
/// Saturates at `usize::MAX` for huge coins, which any configured ceiling
/// then rejects.
pub fn search_bound(denominations: &Denominations) -> usize {
    let sorted = denominations.sorted_descending();
    match sorted.as_slice() {
        [a, b, ..] => a.saturating_add(*b),
        [a] => *a,
        [] => 0,
    }
}

/// Smallest amount where greedy is not optimal, if any.
pub fn smallest_counterexample(denominations: &Denominations) -> Option<Counterexample> {
    find_counterexamples(denominations, search_bound(denominations))
        .into_iter()
        .next()
}

/// True when greedy is optimal for every amount.
///
/// Exact for systems containing a 1-coin. Without one, only amounts up to
/// [`search_bound`] are checked.
///
/// # Examples
///
/// ```
/// use coinchange::{sweep, Denominations};
///
/// assert!(sweep::is_canonical(&"1, 5, 10, 25".parse::<Denominations>().unwrap()));
/// assert!(!sweep::is_canonical(&"1, 3, 4".parse::<Denominations>().unwrap()));
/// ```
pub fn is_canonical(denominations: &Denominations) -> bool {
    smallest_counterexample(denominations).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(values: &[usize]) -> Denominations {
        Denominations::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_us_coins_are_canonical() {
        assert!(is_canonical(&coins(&[1, 5, 10, 25])));
        assert!(find_counterexamples(&coins(&[1, 5, 10, 25]), 500).is_empty());
    }

    #[test]
    fn test_one_three_four() {
        let found = find_counterexamples(&coins(&[1, 3, 4]), 12);
        let amounts: Vec<_> = found.iter().map(|c| c.amount).collect();
        // greedy 4+1+1 and 4+4+1+1 against 3+3 and 4+3+3
        assert_eq!(amounts, vec![6, 10]);
        assert_eq!(
            smallest_counterexample(&coins(&[1, 3, 4])).unwrap().amount,
            6
        );
    }

    #[test]
    fn test_greedy_failure_counts() {
        let found = find_counterexamples(&coins(&[4, 3]), 7);
        assert_eq!(
            found,
            vec![Counterexample {
                amount: 6,
                greedy: CoinCount::Unreachable,
                exact: CoinCount::Coins(2),
            }]
        );
    }

    #[test]
    fn test_unreachable_everywhere_is_not_a_counterexample() {
        assert!(find_counterexamples(&coins(&[2]), 9).is_empty());
        assert!(is_canonical(&Denominations::default()));
    }

    #[test]
    fn test_search_bound() {
        assert_eq!(search_bound(&coins(&[1, 5, 10, 25])), 35);
        assert_eq!(search_bound(&coins(&[7])), 7);
        assert_eq!(search_bound(&Denominations::default()), 0);
    }

    #[test]
    fn test_search_bound_saturates_on_huge_coins() {
        let huge = coins(&[usize::MAX, 2]);
        assert_eq!(search_bound(&huge), usize::MAX);
        assert!(crate::Limits::default()
            .check_amount(search_bound(&huge))
            .is_err());
    }
}
