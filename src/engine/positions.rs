use crate::domain::player::{Player, Role};
use crate::domain::SeatIndex;

/// Роли на раздачу: место 0 – малый блайнд, место 1 – большой,
/// последнее место при трёх и более игроках – дилер.
pub fn assign_roles(players: &mut [Player]) {
    let n = players.len();
    for (seat, p) in players.iter_mut().enumerate() {
        p.role = match seat {
            0 => Role::LittleBlind,
            1 => Role::BigBlind,
            s if n >= 3 && s == n - 1 => Role::Dealer,
            _ => Role::None,
        };
    }
}

/// Порядок хода на префлопе: первым ходит игрок после большого блайнда,
/// блайнды – последними. Вдвоём первым ходит малый блайнд.
pub fn preflop_order(players_count: usize) -> Vec<SeatIndex> {
    if players_count > 2 {
        (2..players_count).chain(0..2).collect()
    } else {
        (0..players_count).collect()
    }
}

/// Порядок хода после флопа: с малого блайнда по кругу.
pub fn postflop_order(players_count: usize) -> Vec<SeatIndex> {
    (0..players_count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Chips;

    #[test]
    fn preflop_starts_after_big_blind() {
        assert_eq!(preflop_order(4), vec![2, 3, 0, 1]);
        assert_eq!(preflop_order(2), vec![0, 1]);
    }

    #[test]
    fn roles_for_three_and_two_players() {
        let mut three: Vec<Player> = (0..3).map(|i| Player::new(i, "p", Chips(10))).collect();
        assign_roles(&mut three);
        let roles: Vec<Role> = three.iter().map(|p| p.role).collect();
        assert_eq!(roles, vec![Role::LittleBlind, Role::BigBlind, Role::Dealer]);

        let mut two: Vec<Player> = (0..2).map(|i| Player::new(i, "p", Chips(10))).collect();
        assign_roles(&mut two);
        assert_eq!(two[1].role, Role::BigBlind);
    }
}
