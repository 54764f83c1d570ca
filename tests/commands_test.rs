use coinchange::commands::{self, SolveOptions};
use coinchange::{CoinCount, Config, Error};

fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[test]
fn test_solve_json_output() {
    let mut out = Vec::new();
    let options = SolveOptions {
        json: true,
        ..SolveOptions::default()
    };
    let comparison = commands::solve(&mut out, &Config::default(), "6", "1,3,4", options).unwrap();
    assert!(!comparison.counts_agree());

    let json: serde_json::Value = serde_json::from_str(&text(out)).unwrap();
    assert_eq!(json["amount"], 6);
    assert_eq!(json["greedy"]["count"], 3);
    assert_eq!(json["exact"]["count"], 2);
    assert_eq!(json["exact"]["coins"], serde_json::json!([3, 3]));
    assert!(json["greedy"]["trace"].as_array().unwrap().len() > 2);
}

#[test]
fn test_solve_table_with_trace() {
    let mut out = Vec::new();
    let options = SolveOptions {
        trace: true,
        ..SolveOptions::default()
    };
    commands::solve(&mut out, &Config::default(), "63", "1,5,10,25", options).unwrap();
    let text = text(out);
    assert!(text.contains("Greedy matches the optimal count."));
    assert!(text.contains("Greedy trace"));
}

#[test]
fn test_solve_records_then_history_lists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let config: Config = "[history]\ncapacity = 2\n".parse().unwrap();

    let mut out = Vec::new();
    commands::history(&mut out, &path).unwrap();
    assert!(text(out).contains("No history yet."));

    for (amount, coins) in [("63", "1,5,10,25"), ("6", "1,3,4"), ("3", "2")] {
        let options = SolveOptions {
            history: Some(&path),
            ..SolveOptions::default()
        };
        commands::solve(&mut Vec::new(), &config, amount, coins, options).unwrap();
    }

    let mut out = Vec::new();
    let log = commands::history(&mut out, &path).unwrap();
    let amounts: Vec<_> = log.entries().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![3, 6]);

    let text = text(out);
    assert!(text.contains("1, 3, 4"));
    assert!(text.contains("Failed"));
}

#[test]
fn test_sweep_lists_counterexamples() {
    let mut out = Vec::new();
    let found = commands::sweep(&mut out, &Config::default(), "1,3,4", None, false).unwrap();
    assert_eq!(found[0].amount, 6);
    assert_eq!(found[0].exact, CoinCount::Coins(2));
    assert!(!text(out).contains("Greedy is optimal"));

    let mut out = Vec::new();
    commands::sweep(&mut out, &Config::default(), "1,5,10,25", None, false).unwrap();
    assert!(text(out).contains("Greedy is optimal for every amount up to 35."));
}

#[test]
fn test_sweep_huge_coins_hit_the_ceiling() {
    let coins = format!("{},2", usize::MAX);
    let mut out = Vec::new();
    let err = commands::sweep(&mut out, &Config::default(), &coins, None, false);
    assert!(matches!(
        err,
        Err(Error::AmountTooLarge { amount, .. }) if amount == usize::MAX
    ));
    assert!(out.is_empty());
}
