//! Движок раздачи: торги, смена стадий, расчёт банка, серия раздач.
//!
//! Высокоуровневый объект: `Deal`
//! Основные операции:
//!   - `legal_actions` – что может сделать игрок
//!   - `apply_action` – применить действие игрока
//!   - `run_deal` / `Deal::play` – провести раздачу до расчёта
//!   - `settle` – разделить банк с учётом сайд-потов

pub mod actions;
pub mod betting;
pub mod deal;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod session;
pub mod settlement;
pub mod validation;

pub use actions::{ActionKind, PlayerAction};
pub use betting::apply_action;
pub use deal::Deal;
pub use errors::{BettingError, EngineError};
pub use game_loop::{run_deal, DealHost};
pub use hand_history::{DealEvent, DealEventKind, DealHistory};
pub use session::GameSession;
pub use settlement::{settle, Claim, PotLayer, Settlement};
pub use validation::{legal_actions, raise_bounds};

/// Источник случайности для движка. Реализации – в `infra::rng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    fn next_u64(&mut self) -> u64;
}
