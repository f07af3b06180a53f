//! Тесты оценки шансов методом Monte Carlo.

use poker_deal_core::domain::card::{parse_cards, Card};
use poker_deal_core::eval::{estimate_equity, EquityError};

fn hole(s: &str) -> [Card; 2] {
    let c = parse_cards(s).unwrap();
    [c[0], c[1]]
}

#[test]
fn pocket_aces_heads_up_preflop() {
    let eq = estimate_equity(hole("As Ah"), 1, &[], 2000, 7).unwrap();
    // Около 85% (ничьи засчитываются как поражение).
    assert!((78.0..91.0).contains(&eq), "equity = {eq}");
}

#[test]
fn more_opponents_lower_equity() {
    let one = estimate_equity(hole("As Ah"), 1, &[], 1500, 11).unwrap();
    let five = estimate_equity(hole("As Ah"), 5, &[], 1500, 11).unwrap();
    assert!(five < one, "{five} >= {one}");
}

#[test]
fn board_royal_flush_is_always_a_tie() {
    let board = parse_cards("As Ks Qs Js Ts").unwrap();
    let eq = estimate_equity(hole("2c 3d"), 2, &board, 300, 1).unwrap();
    assert_eq!(eq, 0.0);
}

#[test]
fn made_royal_flush_always_wins() {
    let board = parse_cards("Qs Js Ts 2c 3d").unwrap();
    let eq = estimate_equity(hole("As Ks"), 3, &board, 300, 5).unwrap();
    assert_eq!(eq, 100.0);
}

#[test]
fn same_seed_same_result() {
    let board = parse_cards("7h 8h 2c").unwrap();
    let a = estimate_equity(hole("9h Th"), 2, &board, 500, 99).unwrap();
    let b = estimate_equity(hole("9h Th"), 2, &board, 500, 99).unwrap();
    assert_eq!(a, b);
    assert!((0.0..=100.0).contains(&a));
}

#[test]
fn input_errors() {
    assert_eq!(
        estimate_equity(hole("As Ah"), 0, &[], 10, 1),
        Err(EquityError::NoOpponents)
    );
    assert_eq!(
        estimate_equity(hole("As Ah"), 1, &[], 0, 1),
        Err(EquityError::NoTrials)
    );
    let six = parse_cards("2c 3c 4c 5c 6c 7c").unwrap();
    assert_eq!(
        estimate_equity(hole("As Ah"), 1, &six, 10, 1),
        Err(EquityError::InvalidBoardSize(6))
    );
}
