use thiserror::Error;

use crate::domain::settings::ConfigError;
use crate::domain::{Chips, PlayerId, SeatIndex};
use crate::engine::actions::ActionKind;

/// Отклонённое действие игрока. Все варианты восстановимы:
/// раздача продолжается, у игрока просят другое действие.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BettingError {
    #[error("ставка {requested} превышает допустимый максимум {max}")]
    ExceededStake { requested: Chips, max: Chips },

    #[error("ставка {requested} ниже минимальной {min} (повышение должно быть не меньше блайнда)")]
    BelowMinimumRaise { requested: Chips, min: Chips },

    #[error("ставка {requested} должна быть выше текущей ставки {current_bid}")]
    RaiseNotAboveCurrentBid { requested: Chips, current_bid: Chips },

    #[error("действие {0:?} сейчас недоступно")]
    ActionNotAllowed(ActionKind),

    #[error("игрок на месте {0} не участвует в торгах")]
    NotActive(SeatIndex),

    #[error("места {0} нет в раздаче")]
    UnknownSeat(SeatIndex),
}

/// Ошибки уровня раздачи.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Недостаточно игроков для раздачи")]
    NotEnoughPlayers,

    #[error("У игрока с id={0} нет фишек")]
    EmptyStack(PlayerId),

    #[error("В колоде закончились карты")]
    DeckExhausted,

    #[error("Раздача уже рассчитана")]
    DealSettled,

    #[error(transparent)]
    Betting(#[from] BettingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
