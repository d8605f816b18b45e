use theater_billing::{
    Catalog, Genre, Invoice, Performance, Play, PlayId, Statement, StatementError, render,
};

fn classic_catalog() -> Catalog {
    [
        ("hamlet", Play::new("Hamlet", Genre::Tragedy)),
        ("as-like", Play::new("As You Like It", Genre::Comedy)),
        ("othello", Play::new("Othello", Genre::Tragedy)),
    ]
    .into_iter()
    .collect()
}

fn single(play_id: &str, audience: u32) -> Invoice {
    Invoice::new("BigCo", vec![Performance::new(play_id, audience)])
}

#[test]
fn tragedy_at_capacity_threshold() {
    let text = render(&single("hamlet", 30), &classic_catalog()).unwrap();
    assert_eq!(
        text,
        "Statement for BigCo\n  Hamlet: $400.00 (30 seats)\nAmount owed is $400.00\nYou earned 0 credits\n"
    );
}

#[test]
fn comedy_at_capacity_threshold() {
    let text = render(&single("as-like", 20), &classic_catalog()).unwrap();
    assert!(text.contains("  As You Like It: $360.00 (20 seats)\n"));
    assert!(text.contains("Amount owed is $360.00\n"));
    assert!(text.ends_with("You earned 4 credits\n"));
}

#[test]
fn tragedy_over_capacity() {
    let statement = Statement::compute(&single("othello", 35), &classic_catalog()).unwrap();
    assert_eq!(statement.total_amount(), 45_000);
    assert_eq!(statement.total_credits(), 5);
    assert!(statement.render_text().contains("  Othello: $450.00 (35 seats)\n"));
}

#[test]
fn comedy_over_capacity() {
    let statement = Statement::compute(&single("as-like", 25), &classic_catalog()).unwrap();
    assert_eq!(statement.total_amount(), 50_000);
    assert_eq!(statement.total_credits(), 5);
    assert!(statement.render_text().contains("  As You Like It: $500.00 (25 seats)\n"));
}

#[test]
fn classic_three_play_invoice() {
    let invoice = Invoice::new(
        "BigCo",
        vec![
            Performance::new("hamlet", 55),
            Performance::new("as-like", 35),
            Performance::new("othello", 40),
        ],
    );

    let expected = "Statement for BigCo\n\
                    \x20 Hamlet: $650.00 (55 seats)\n\
                    \x20 As You Like It: $580.00 (35 seats)\n\
                    \x20 Othello: $500.00 (40 seats)\n\
                    Amount owed is $1,730.00\n\
                    You earned 47 credits\n";
    assert_eq!(render(&invoice, &classic_catalog()).unwrap(), expected);
}

#[test]
fn missing_play_produces_no_statement() {
    let err = render(&single("macbeth", 10), &classic_catalog()).unwrap_err();
    assert_eq!(err, StatementError::UnknownPlay(PlayId::new("macbeth")));
}

#[test]
fn unsupported_genre_produces_no_statement() {
    let mut plays: Vec<(PlayId, Play)> = classic_catalog()
        .iter()
        .map(|(id, play)| (id.clone(), play.clone()))
        .collect();
    plays.push((
        PlayId::new("henry-v"),
        Play::with_raw_genre("Henry V", "history"),
    ));
    let catalog: Catalog = plays.into_iter().collect();

    let invoice = Invoice::new(
        "BigCo",
        vec![Performance::new("hamlet", 55), Performance::new("henry-v", 20)],
    );
    match render(&invoice, &catalog) {
        Err(StatementError::UnknownGenre(genre)) => assert_eq!(genre, "history"),
        other => panic!("Expected UnknownGenre, got {other:?}"),
    }
}
