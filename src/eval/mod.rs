//! Оценка силы покерных рук и шансов на выигрыш.
//!
//! Основные функции:
//!   `evaluate(cards) -> HandScore` – лучшая комбинация из 7 карт
//!   `estimate_equity(...)` – процент выигрышей методом Monte Carlo

pub mod equity;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod stats;

pub use equity::{estimate_equity, EquityError};
pub use evaluator::{evaluate, evaluate_best_hand};
pub use hand_rank::{HandCategory, HandScore};
pub use stats::category_frequencies;
