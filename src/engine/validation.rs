use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::actions::ActionKind;
use crate::engine::deal::Deal;
use crate::engine::errors::BettingError;

/// Допустимые действия игрока при текущем состоянии раздачи.
///
/// Fold доступен всегда. Если игрок отстаёт от текущей ставки, вместо
/// Check предлагается Call. Для игрока вне торгов (сбросил, all-in,
/// нет такого места) список пуст.
pub fn legal_actions(deal: &Deal, seat: SeatIndex) -> Vec<ActionKind> {
    let Some(player) = deal.player(seat).filter(|p| p.is_active()) else {
        return Vec::new();
    };

    let behind_bid = player.current_bid < deal.current_bid();
    let stay = if behind_bid { ActionKind::Call } else { ActionKind::Check };

    // Уравнять можно только ва-банк.
    if behind_bid && player.wealth <= deal.current_bid() {
        return vec![ActionKind::Fold, ActionKind::AllIn];
    }

    if deal.active_count() == 1 || raise_limit_reached(deal, seat) {
        return vec![ActionKind::Fold, stay];
    }

    let current = deal.current_bid();
    if current < player.wealth && player.wealth < current + deal.blind() {
        return vec![ActionKind::Fold, stay, ActionKind::AllIn];
    }

    // Ва-банк больше второго стека никто не сможет уравнять.
    match deal.second_richest_active() {
        Some(second) if player.wealth > second => {
            vec![ActionKind::Fold, stay, ActionKind::Raise]
        }
        _ => vec![ActionKind::Fold, stay, ActionKind::Raise, ActionKind::AllIn],
    }
}

/// Исчерпан ли общий или личный лимит повышений в этом круге.
fn raise_limit_reached(deal: &Deal, seat: SeatIndex) -> bool {
    let config = deal.config();
    let round = config
        .trade_rounds_limit
        .is_some_and(|limit| deal.round_raises() >= limit);
    let personal = config
        .raise_personal_limit
        .is_some_and(|limit| deal.personal_raises(seat) >= limit);
    round || personal
}

/// Границы суммарной ставки для Raise: (минимум, максимум).
///
/// Минимум – текущая ставка плюс блайнд (или весь стек, если он меньше),
/// максимум – стек игрока, но не больше второго по величине стека.
/// `None`, если игрок не торгуется или допустимых значений нет.
pub fn raise_bounds(deal: &Deal, seat: SeatIndex) -> Option<(Chips, Chips)> {
    let player = deal.player(seat).filter(|p| p.is_active())?;
    let min = (deal.current_bid() + deal.blind()).min(player.wealth);
    let max = match deal.second_richest_active() {
        Some(second) => player.wealth.min(second),
        None => player.wealth,
    };
    (min > deal.current_bid() && min <= max).then_some((min, max))
}

/// Проверка значения Raise. Порядок проверок: превышение стека,
/// ставка не выше текущей, повышение меньше блайнда.
pub fn validate_raise(deal: &Deal, seat: SeatIndex, value: Chips) -> Result<(), BettingError> {
    let player = deal.player(seat).ok_or(BettingError::UnknownSeat(seat))?;

    if value > player.wealth {
        return Err(BettingError::ExceededStake {
            requested: value,
            max: player.wealth,
        });
    }
    if let Some(second) = deal.second_richest_active() {
        if value > second {
            return Err(BettingError::ExceededStake {
                requested: value,
                max: second,
            });
        }
    }

    let current = deal.current_bid();
    if value <= current {
        return Err(BettingError::RaiseNotAboveCurrentBid {
            requested: value,
            current_bid: current,
        });
    }

    let min = current + deal.blind();
    if value < min && value < player.wealth {
        return Err(BettingError::BelowMinimumRaise {
            requested: value,
            min,
        });
    }

    Ok(())
}
