use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Статус игрока в текущей раздаче.
/// `Folded` и `AllIn` терминальны до конца раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок участвует в торгах.
    Active,
    /// Игрок сбросил карты и больше не претендует на банк.
    Folded,
    /// Игрок поставил всё – торговаться больше не может, но претендует на банк.
    AllIn,
}

/// Роль игрока в раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Dealer,
    LittleBlind,
    BigBlind,
    None,
}

/// Игрок. Живёт дольше раздачи: между раздачами сбрасываются только
/// ставка, статус, роль и карты, а стек корректируется на `wealth_change`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_bot: bool,
    /// Стек на начало раздачи. Во время раздачи не меняется.
    pub wealth: Chips,
    /// Сколько игрок суммарно вложил в банк в этой раздаче.
    pub current_bid: Chips,
    pub status: PlayerStatus,
    pub role: Role,
    pub hand: Option<[Card; 2]>,
    /// Отложенное изменение стека, применяется при расчёте раздачи.
    pub wealth_change: i64,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, wealth: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            is_bot: false,
            wealth,
            current_bid: Chips::ZERO,
            status: PlayerStatus::Active,
            role: Role::None,
            hand: None,
            wealth_change: 0,
        }
    }

    pub fn bot(id: PlayerId, name: impl Into<String>, wealth: Chips) -> Self {
        Self {
            is_bot: true,
            ..Self::new(id, name, wealth)
        }
    }

    /// Претендует ли игрок на банк (не сбросил карты).
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Сколько ещё фишек не вложено в банк.
    pub fn behind(&self) -> Chips {
        self.wealth - self.current_bid
    }

    /// Закрыть раздачу для игрока: применить изменение стека, сбросить состояние.
    pub fn settle_and_reset(&mut self) {
        let wealth = self.wealth.0 as i64 + self.wealth_change;
        self.wealth = Chips(wealth.max(0) as u64);
        self.wealth_change = 0;
        self.current_bid = Chips::ZERO;
        self.status = PlayerStatus::Active;
        self.role = Role::None;
        self.hand = None;
    }
}
