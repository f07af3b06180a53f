//! Оценка шансов руки методом Monte Carlo.
//!
//! Каждый прогон: колода без известных карт, по две карты каждому
//! сопернику, добор борда до пяти карт, сравнение комбинаций.
//! Победа засчитывается только если рука героя строго сильнее каждой
//! руки соперника; ничья считается поражением.
//!
//! У каждого прогона свой поток случайности (`RngSeed::derive` по индексу),
//! поэтому результат для фиксированного seed одинаков при
//! последовательном и параллельном выполнении.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::infra::rng_seed::RngSeed;

use super::evaluator::evaluate;

/// Метка потока случайности для прогонов.
const EQUITY_STREAM: &[u8] = b"equity-trial";

/// Ошибки входных данных оценки шансов.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EquityError {
    #[error("нужен хотя бы один соперник")]
    NoOpponents,

    #[error("число прогонов должно быть положительным")]
    NoTrials,

    #[error("на борде может быть 0, 3, 4 или 5 карт, получено {0}")]
    InvalidBoardSize(usize),

    #[error("карта {0} указана дважды")]
    DuplicateCard(Card),

    #[error("в колоде не хватит карт для {0} соперников")]
    TooManyOpponents(usize),
}

/// Оценить вероятность выигрыша руки `hole` против `opponents` случайных рук.
///
/// Возвращает процент выигранных прогонов, число в [0, 100].
pub fn estimate_equity(
    hole: [Card; 2],
    opponents: usize,
    board: &[Card],
    trials: u32,
    seed: u64,
) -> Result<f64, EquityError> {
    validate_inputs(&hole, opponents, board, trials)?;

    let known: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
    let base = RngSeed::from_u64(seed);

    let wins = count_wins(&base, &hole, opponents, board, &known, trials);

    Ok(wins as f64 * 100.0 / trials as f64)
}

fn validate_inputs(
    hole: &[Card; 2],
    opponents: usize,
    board: &[Card],
    trials: u32,
) -> Result<(), EquityError> {
    if opponents == 0 {
        return Err(EquityError::NoOpponents);
    }
    if trials == 0 {
        return Err(EquityError::NoTrials);
    }
    if !matches!(board.len(), 0 | 3 | 4 | 5) {
        return Err(EquityError::InvalidBoardSize(board.len()));
    }

    let mut seen: u64 = 0;
    for card in hole.iter().chain(board.iter()) {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(EquityError::DuplicateCard(*card));
        }
        seen |= bit;
    }

    let residual = 52 - hole.len() - board.len();
    let needed = 2 * opponents + (5 - board.len());
    if needed > residual {
        return Err(EquityError::TooManyOpponents(opponents));
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn count_wins(
    base: &RngSeed,
    hole: &[Card; 2],
    opponents: usize,
    board: &[Card],
    known: &[Card],
    trials: u32,
) -> usize {
    (0..trials)
        .into_par_iter()
        .filter(|&i| run_trial(base, i, hole, opponents, board, known))
        .count()
}

#[cfg(not(feature = "parallel"))]
fn count_wins(
    base: &RngSeed,
    hole: &[Card; 2],
    opponents: usize,
    board: &[Card],
    known: &[Card],
    trials: u32,
) -> usize {
    (0..trials)
        .filter(|&i| run_trial(base, i, hole, opponents, board, known))
        .count()
}

/// Один прогон. `true` – герой строго сильнее всех соперников.
fn run_trial(
    base: &RngSeed,
    index: u32,
    hole: &[Card; 2],
    opponents: usize,
    board: &[Card],
    known: &[Card],
) -> bool {
    let mut rng = base.derive(EQUITY_STREAM, index as u64).to_rng();
    let mut deck = Deck::shuffled_without(known, &mut rng);

    // Сначала карты соперников, затем добор борда.
    let mut opponent_hands = Vec::with_capacity(opponents);
    for _ in 0..opponents {
        match (deck.draw_one(), deck.draw_one()) {
            (Some(a), Some(b)) => opponent_hands.push([a, b]),
            _ => return false,
        }
    }

    let mut full_board: Vec<Card> = board.to_vec();
    while full_board.len() < 5 {
        match deck.draw_one() {
            Some(card) => full_board.push(card),
            None => return false,
        }
    }

    let mut seven = [hole[0]; 7];
    seven[..2].copy_from_slice(hole);
    seven[2..].copy_from_slice(&full_board);
    let hero = evaluate(&seven);

    opponent_hands.iter().all(|opp| {
        seven[..2].copy_from_slice(opp);
        evaluate(&seven) < hero
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_count_matches_sequential() {
        let hole = [cards("Kh")[0], cards("Qh")[0]];
        let board = cards("Jh 7c 2d");
        let known: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
        let base = RngSeed::from_u64(2024);

        let parallel = count_wins(&base, &hole, 2, &board, &known, 500);
        let sequential = (0..500u32)
            .filter(|&i| run_trial(&base, i, &hole, 2, &board, &known))
            .count();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn rejects_bad_board_size() {
        let hole = [cards("As")[0], cards("Ah")[0]];
        let board = cards("2c 3d");
        assert_eq!(
            estimate_equity(hole, 1, &board, 10, 1),
            Err(EquityError::InvalidBoardSize(2))
        );
    }

    #[test]
    fn rejects_duplicate_known_card() {
        let hole = [cards("As")[0], cards("Ah")[0]];
        let board = cards("As 3d 4c");
        assert!(matches!(
            estimate_equity(hole, 1, &board, 10, 1),
            Err(EquityError::DuplicateCard(_))
        ));
    }

    #[test]
    fn rejects_impossible_opponent_count() {
        let hole = [cards("As")[0], cards("Ah")[0]];
        assert_eq!(
            estimate_equity(hole, 30, &[], 10, 1),
            Err(EquityError::TooManyOpponents(30))
        );
    }
}
