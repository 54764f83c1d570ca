use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated set of coin face values.
///
/// Every value is at least 1. The set may be empty and may contain
/// duplicates; both solvers handle either case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Denominations(Vec<usize>);

impl Denominations {
    /// Creates a denomination set, rejecting zero-valued coins.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::Denominations;
    ///
    /// let coins = Denominations::new(vec![25, 10, 5, 1]).unwrap();
    /// assert_eq!(coins.len(), 4);
    /// assert!(Denominations::new(vec![5, 0]).is_err());
    /// ```
    pub fn new(coins: Vec<usize>) -> Result<Self> {
        if coins.contains(&0) {
            return Err(Error::ZeroDenomination);
        }
        Ok(Self(coins))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Copy of the values, largest first.
    pub fn sorted_descending(&self) -> Vec<usize> {
        let mut coins = self.0.clone();
        coins.sort_unstable_by(|a, b| b.cmp(a));
        coins
    }

    pub fn largest(&self) -> Option<usize> {
        self.0.iter().copied().max()
    }
}

impl TryFrom<Vec<usize>> for Denominations {
    type Error = Error;

    fn try_from(coins: Vec<usize>) -> Result<Self> {
        Self::new(coins)
    }
}

impl From<Denominations> for Vec<usize> {
    fn from(denominations: Denominations) -> Self {
        denominations.0
    }
}

impl<'a> IntoIterator for &'a Denominations {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses a comma-separated list such as `"1, 5, 10, 25"`.
///
/// Whitespace around entries is ignored. Every entry must be a positive
/// integer; an empty entry (including an empty string) is rejected.
impl FromStr for Denominations {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let coins = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<usize>()
                    .map_err(|_| Error::InvalidDenomination(part.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(coins)
    }
}

impl fmt::Display for Denominations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        f.write_str(&parts.join(", "))
    }
}
