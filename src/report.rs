//! Plain-text tables for comparisons, traces and history.

use std::io;

use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Style},
};

use crate::change::{SolveResult, TraceEvent};
use crate::compare::{Comparison, TimedResult};
use crate::history::History;
use crate::sweep::Counterexample;

fn join_coins(coins: &[usize]) -> String {
    coins
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

fn optional(value: Option<usize>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::new(1..), Alignment::left());
    table.to_string()
}

fn summary_row(timed: &TimedResult) -> [String; 5] {
    let result = &timed.result;
    let coins = if result.is_success() {
        join_coins(result.coins())
    } else {
        "-".to_string()
    };
    [
        result.algorithm().to_string(),
        result.count().to_string(),
        coins,
        if result.is_success() { "yes" } else { "no" }.to_string(),
        format!("{:.4} ms", timed.elapsed_ms()),
    ]
}

/// Side-by-side summary of both solvers.
pub fn comparison_table(comparison: &Comparison) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Algorithm", "Coins used", "Breakdown", "Success", "Time"]);
    builder.push_record(summary_row(&comparison.greedy));
    builder.push_record(summary_row(&comparison.exact));
    render(builder)
}

/// One row per trace event.
pub fn trace_table(events: &[TraceEvent]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Step", "Coin", "Count", "Remaining", "Description"]);
    for (i, event) in events.iter().enumerate() {
        builder.push_record([
            (i + 1).to_string(),
            event.kind.to_string(),
            optional(event.coin),
            optional(event.count),
            event.remaining.to_string(),
            event.desc.clone(),
        ]);
    }
    render(builder)
}

pub fn history_table(history: &History) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Time", "Amount", "Coins", "Greedy", "DP", "Agreed"]);
    for entry in history.entries() {
        builder.push_record([
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            entry.amount.to_string(),
            entry.denominations.to_string(),
            entry.greedy_count.to_string(),
            entry.exact_count.to_string(),
            if entry.agreed { "yes" } else { "no" }.to_string(),
        ]);
    }
    render(builder)
}

pub fn counterexample_table(found: &[Counterexample]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Amount", "Greedy", "DP"]);
    for c in found {
        builder.push_record([
            c.amount.to_string(),
            c.greedy.to_string(),
            c.exact.to_string(),
        ]);
    }
    render(builder)
}

fn write_trace(out: &mut impl io::Write, result: &SolveResult) -> io::Result<()> {
    writeln!(out, "\n{} trace", result.algorithm())?;
    writeln!(out, "{}", trace_table(result.trace()))
}

/// Writes the summary table, the agreement line and optionally both traces.
pub fn write_comparison(
    out: &mut impl io::Write,
    comparison: &Comparison,
    with_trace: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "Amount {} with coins [{}]",
        comparison.amount, comparison.denominations
    )?;
    writeln!(out, "{}", comparison_table(comparison))?;

    if comparison.counts_agree() {
        writeln!(out, "Greedy matches the optimal count.")?;
    } else {
        writeln!(out, "Greedy differs from the optimal count.")?;
    }

    if with_trace {
        write_trace(out, &comparison.greedy.result)?;
        write_trace(out, &comparison.exact.result)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ChangeRequest;
    use crate::config::Limits;
    use crate::history::HistoryEntry;
    use crate::CoinCount;
    use chrono::{TimeZone, Utc};

    fn comparison(amount: &str, coins: &str) -> Comparison {
        Comparison::run(&ChangeRequest::parse(amount, coins, &Limits::default()).unwrap())
    }

    #[test]
    fn test_comparison_table() {
        let table = comparison_table(&comparison("6", "1,3,4"));
        assert!(table.contains("Greedy"));
        assert!(table.contains("Dynamic Programming"));
        assert!(table.contains("4 + 1 + 1"));
        assert!(table.contains("3 + 3"));
    }

    #[test]
    fn test_failed_row_shows_marker() {
        let table = comparison_table(&comparison("3", "2"));
        assert!(table.contains("Failed"));
        assert!(table.contains("no"));
    }

    #[test]
    fn test_write_comparison_with_trace() {
        let mut out = Vec::new();
        write_comparison(&mut out, &comparison("6", "1,3,4"), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Amount 6 with coins [1, 3, 4]"));
        assert!(text.contains("Greedy differs"));
        assert!(text.contains("Greedy trace"));
        assert!(text.contains("Dynamic Programming trace"));
        assert!(text.contains("Backtrack from amount 6"));
    }

    #[test]
    fn test_history_table() {
        let mut history = History::new(10);
        history.push(HistoryEntry::from_comparison(
            &comparison("6", "1,3,4"),
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        ));
        let table = history_table(&history);
        assert!(table.contains("2024-03-01 12:30:00"));
        assert!(table.contains("1, 3, 4"));
    }

    #[test]
    fn test_counterexample_table() {
        let table = counterexample_table(&[Counterexample {
            amount: 6,
            greedy: CoinCount::Unreachable,
            exact: CoinCount::Coins(2),
        }]);
        assert!(table.contains("Failed"));
    }
}
