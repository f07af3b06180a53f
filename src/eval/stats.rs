use crate::domain::deck::Deck;
use crate::engine::RandomSource;

use super::evaluator::evaluate;
use super::hand_rank::HandCategory;

/// Частота каждой категории (в процентах) на `samples` случайных 7-карточных руках.
///
/// Порядок результата совпадает с `HandCategory::ALL`.
pub fn category_frequencies<R: RandomSource>(samples: u32, rng: &mut R) -> Vec<(HandCategory, f64)> {
    let mut counts = [0u32; 9];

    for _ in 0..samples {
        let mut deck = Deck::shuffled_without(&[], rng);
        let Some(hand) = deck.draw_n(7) else {
            break;
        };
        counts[evaluate(&hand).category() as usize] += 1;
    }

    HandCategory::ALL
        .iter()
        .map(|&cat| {
            let share = if samples == 0 {
                0.0
            } else {
                counts[cat as usize] as f64 * 100.0 / samples as f64
            };
            (cat, share)
        })
        .collect()
}
