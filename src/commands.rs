//! Bodies of the `coinchange` subcommands, writing to any `io::Write`.

use std::io;
use std::path::Path;

use crate::change::Denominations;
use crate::compare::{ChangeRequest, Comparison};
use crate::config::Config;
use crate::error::Result;
use crate::history::History;
use crate::report;
use crate::sweep;

/// Output options for [`solve`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions<'a> {
    pub trace: bool,
    pub json: bool,
    pub history: Option<&'a Path>,
}

/// Parses the request, runs both solvers, prints the comparison and
/// optionally records it in a history file.
pub fn solve(
    out: &mut impl io::Write,
    config: &Config,
    amount: &str,
    coins: &str,
    options: SolveOptions<'_>,
) -> Result<Comparison> {
    let request = ChangeRequest::parse(amount, coins, &config.limits)?;
    let comparison = Comparison::run(&request);

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &comparison)?;
        writeln!(out)?;
    } else {
        report::write_comparison(out, &comparison, options.trace)?;
    }

    if let Some(path) = options.history {
        let mut log = History::load(path)?;
        log.set_capacity(config.history.capacity);
        log.record(&comparison);
        log.save(path)?;
    }

    Ok(comparison)
}

/// Prints the amounts where greedy is not optimal.
///
/// Without `up_to` the canonicity window is searched. Either way the bound
/// must pass the configured ceiling.
pub fn sweep(
    out: &mut impl io::Write,
    config: &Config,
    coins: &str,
    up_to: Option<usize>,
    json: bool,
) -> Result<Vec<sweep::Counterexample>> {
    let denominations: Denominations = coins.parse()?;
    let up_to = up_to.unwrap_or_else(|| sweep::search_bound(&denominations));
    config.limits.check_amount(up_to)?;

    let found = sweep::find_counterexamples(&denominations, up_to);
    if json {
        serde_json::to_writer_pretty(&mut *out, &found)?;
        writeln!(out)?;
    } else if found.is_empty() {
        writeln!(out, "Greedy is optimal for every amount up to {}.", up_to)?;
    } else {
        writeln!(out, "{}", report::counterexample_table(&found))?;
    }
    Ok(found)
}

/// Prints the recorded comparisons in `path`, newest first.
pub fn history(out: &mut impl io::Write, path: &Path) -> Result<History> {
    let log = History::load(path)?;
    if log.is_empty() {
        writeln!(out, "No history yet.")?;
    } else {
        writeln!(out, "{}", report::history_table(&log))?;
    }
    Ok(log)
}
