use coinchange::{
    report, ChangeRequest, CoinCount, Comparison, Config, Error, History, Limits, TraceKind,
};

#[test]
fn test_end_to_end_with_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let config: Config = "[history]\ncapacity = 2\n".parse().unwrap();

    for (amount, coins) in [("63", "1,5,10,25"), ("6", "1,3,4"), ("3", "2")] {
        let request = ChangeRequest::parse(amount, coins, &config.limits).unwrap();
        let comparison = Comparison::run(&request);

        let mut history = History::load(&path).unwrap();
        history.set_capacity(config.history.capacity);
        history.record(&comparison);
        history.save(&path).unwrap();
    }

    let history = History::load(&path).unwrap();
    let amounts: Vec<_> = history.entries().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![3, 6]);

    let agreed: Vec<_> = history.entries().map(|e| e.agreed).collect();
    assert_eq!(agreed, vec![true, false]);
}

#[test]
fn test_rejected_input_never_reaches_solvers() {
    let limits = Limits { max_amount: 1_000 };
    assert!(matches!(
        ChangeRequest::parse("abc", "1,5", &limits),
        Err(Error::InvalidAmount(_))
    ));
    assert!(matches!(
        ChangeRequest::parse("10", "1;5", &limits),
        Err(Error::InvalidDenomination(_))
    ));
    assert!(matches!(
        ChangeRequest::parse("1001", "1,5", &limits),
        Err(Error::AmountTooLarge { .. })
    ));
}

#[test]
fn test_comparison_report_and_json() {
    let request = ChangeRequest::parse("6", "4, 3", &Limits::default()).unwrap();
    let comparison = Comparison::run(&request);

    assert_eq!(comparison.greedy.result.count(), CoinCount::Unreachable);
    assert_eq!(comparison.exact.result.count(), CoinCount::Coins(2));
    assert_eq!(
        comparison.greedy.result.trace().last().unwrap().kind,
        TraceKind::Fail
    );

    let mut out = Vec::new();
    report::write_comparison(&mut out, &comparison, false).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Failed"));
    assert!(!text.contains("trace"));

    let json = serde_json::to_value(&comparison).unwrap();
    assert!(json["greedy"]["count"].is_null());
    assert_eq!(json["greedy"]["success"], false);
    assert_eq!(json["exact"]["trace"][0]["kind"], "start");
}
