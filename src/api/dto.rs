use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Stage;
use crate::domain::player::{PlayerStatus, Role};
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::{legal_actions, raise_bounds, ActionKind, Deal};

/// DTO игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerView {
    pub player_id: PlayerId,
    pub name: String,
    pub is_bot: bool,
    pub seat: SeatIndex,
    pub wealth: Chips,
    pub current_bid: Chips,
    pub status: PlayerStatus,
    pub role: Role,
    /// Карманные карты – только для "героя".
    pub hole_cards: Option<[Card; 2]>,
}

/// То, что слой представления может показать одному игроку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DealView {
    pub seat: SeatIndex,
    pub stage: Stage,
    pub board: Vec<Card>,
    pub bank: Chips,
    pub current_bid: Chips,
    pub blind: Chips,
    pub players: Vec<PlayerView>,
    /// Место дилера (только при трёх и более игроках).
    pub dealer: Option<SeatIndex>,
    /// Пусто, если игрок не торгуется.
    pub legal_actions: Vec<ActionKind>,
    /// Границы суммарной ставки для Raise.
    pub raise_bounds: Option<(Chips, Chips)>,
    /// Шансы игрока на выигрыш в процентах, если считаются.
    pub win_chance: Option<f64>,
}

impl DealView {
    pub fn for_seat(deal: &Deal, seat: SeatIndex) -> Self {
        let players = deal
            .players()
            .iter()
            .enumerate()
            .map(|(i, p)| PlayerView {
                player_id: p.id,
                name: p.name.clone(),
                is_bot: p.is_bot,
                seat: i,
                wealth: p.wealth,
                current_bid: p.current_bid,
                status: p.status,
                role: p.role,
                hole_cards: if i == seat { p.hand } else { None },
            })
            .collect();

        let legal = legal_actions(deal, seat);
        let bounds = if legal.contains(&ActionKind::Raise) {
            raise_bounds(deal, seat)
        } else {
            None
        };

        Self {
            seat,
            stage: deal.stage(),
            board: deal.board().to_vec(),
            bank: deal.bank(),
            current_bid: deal.current_bid(),
            blind: deal.blind(),
            players,
            dealer: deal.dealer(),
            legal_actions: legal,
            raise_bounds: bounds,
            win_chance: deal.win_chance(seat),
        }
    }

    /// Сколько игроку нужно доставить, чтобы уравнять ставку.
    pub fn to_call(&self) -> Chips {
        self.players
            .get(self.seat)
            .map(|p| self.current_bid - p.current_bid)
            .unwrap_or(Chips::ZERO)
    }
}
