use log::{debug, info};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerAction;
use crate::engine::deal::Deal;
use crate::engine::errors::BettingError;
use crate::engine::hand_history::DealEventKind;
use crate::engine::validation::{legal_actions, validate_raise};

/// Применить действие игрока к раздаче.
///
/// Ошибка ничего не меняет в состоянии: игрок может выбрать другое действие.
pub fn apply_action(deal: &mut Deal, seat: SeatIndex, action: PlayerAction) -> Result<(), BettingError> {
    let player = deal.player(seat).ok_or(BettingError::UnknownSeat(seat))?;
    if !player.is_active() {
        return Err(BettingError::NotActive(seat));
    }

    let legal = legal_actions(deal, seat);
    debug!("{}: допустимые действия {:?}", player.name, legal);
    if !legal.contains(&action.kind()) {
        return Err(BettingError::ActionNotAllowed(action.kind()));
    }

    let value = match action {
        PlayerAction::Fold => None,
        PlayerAction::Check => Some(player.current_bid),
        PlayerAction::Call => Some(deal.current_bid().min(player.wealth)),
        PlayerAction::AllIn => Some(player.wealth),
        PlayerAction::Raise(value) => {
            validate_raise(deal, seat, value)?;
            Some(value)
        }
    };

    match value {
        None => deal.fold(seat),
        Some(value) => deal.commit(seat, value),
    }

    let player = &deal.players[seat];
    info!(
        "{}: {}, ставка {}, статус {:?}; банк {}, текущая ставка {}",
        player.name,
        action,
        player.current_bid,
        player.status,
        deal.bank(),
        deal.current_bid()
    );
    let bid_after: Chips = player.current_bid;
    let bank_after = deal.bank();
    deal.history.push(DealEventKind::PlayerActed {
        seat,
        action,
        bid_after,
        bank_after,
    });

    Ok(())
}
