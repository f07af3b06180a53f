use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::eval::HandScore;

/// Стадия раздачи. Переходы только вперёд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    PreFlop,
    Flop,
    Turn,
    River,
    Settled,
}

impl Stage {
    /// Следующая стадия; у `Settled` следующей нет.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::PreFlop => Some(Stage::Flop),
            Stage::Flop => Some(Stage::Turn),
            Stage::Turn => Some(Stage::River),
            Stage::River => Some(Stage::Settled),
            Stage::Settled => None,
        }
    }

    /// Сколько карт открывается при входе в стадию.
    pub fn cards_revealed(self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            Stage::PreFlop | Stage::Settled => 0,
        }
    }
}

/// Итог раздачи для одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDealResult {
    pub player_id: PlayerId,
    /// Комбинация, если игрок дошёл до вскрытия.
    pub score: Option<HandScore>,
    /// Сколько игрок вложил в банк.
    pub committed: Chips,
    /// Сколько игрок получил из банка.
    pub credited: Chips,
    /// Итоговое изменение стека.
    pub net: i64,
}

/// Краткое описание завершённой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealSummary {
    /// Стадия, на которой закончились торги.
    pub stage_reached: Stage,
    pub board: Vec<Card>,
    pub bank: Chips,
    pub showdown: bool,
    pub results: Vec<PlayerDealResult>,
}
