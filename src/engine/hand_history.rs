use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Stage;
use crate::domain::player::Role;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::actions::PlayerAction;
use crate::engine::errors::BettingError;
use crate::eval::HandScore;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum DealEventKind {
    /// Новая раздача началась.
    DealStarted {
        players: Vec<PlayerId>,
        small_blind: Chips,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt {
        seat: SeatIndex,
        cards: [Card; 2],
    },

    /// Обязательная ставка.
    BlindPosted {
        seat: SeatIndex,
        role: Role,
        amount: Chips,
    },

    /// Переход на новую стадию.
    StageEntered {
        stage: Stage,
    },

    /// Открыты общие карты на борде (после сжигания одной карты).
    BoardDealt {
        stage: Stage,
        cards: Vec<Card>,
    },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: PlayerAction,
        bid_after: Chips,
        bank_after: Chips,
    },

    /// Действие отклонено, игроку предложено выбрать снова.
    ActionRejected {
        seat: SeatIndex,
        action: PlayerAction,
        reason: String,
    },

    /// Игрок не дал корректного действия – карты сброшены автоматически.
    AutoFolded {
        seat: SeatIndex,
    },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        hole_cards: [Card; 2],
        score: HandScore,
    },

    /// Выплата из банка.
    PotAwarded {
        seat: SeatIndex,
        amount: Chips,
    },

    /// Раздача завершена.
    DealFinished {
        bank: Chips,
    },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DealEvent {
    pub index: u32,
    pub kind: DealEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DealHistory {
    pub events: Vec<DealEvent>,
}

impl DealHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: DealEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(DealEvent { index: idx, kind });
    }

    pub(crate) fn rejected(&mut self, seat: SeatIndex, action: PlayerAction, err: &BettingError) {
        self.push(DealEventKind::ActionRejected {
            seat,
            action,
            reason: err.to_string(),
        });
    }

    /// Действия игроков по порядку.
    pub fn actions(&self) -> impl Iterator<Item = (SeatIndex, PlayerAction)> + '_ {
        self.events.iter().filter_map(|e| match e.kind {
            DealEventKind::PlayerActed { seat, action, .. } => Some((seat, action)),
            _ => None,
        })
    }
}
