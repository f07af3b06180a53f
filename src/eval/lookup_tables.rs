use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маски всех стритов (5 подряд) вместе с младшей картой стрита.
/// Упорядочены от старшего (бродвей) к младшему (колесо),
/// поэтому первый найденный – лучший.
pub const STRAIGHT_MASKS: [(RankMask, Rank); 10] = [
    // TJQKA (broadway)
    (mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]), Rank::Ten),
    // 9TJQK
    (mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]), Rank::Nine),
    // 89TJQ
    (mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]), Rank::Eight),
    // 789TJ
    (mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]), Rank::Seven),
    // 6789T
    (mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]), Rank::Six),
    // 56789
    (mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]), Rank::Five),
    // 45678
    (mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]), Rank::Four),
    // 34567
    (mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]), Rank::Three),
    // 23456
    (mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]), Rank::Two),
    // A2345 (wheel): младшая карта – туз, играющий единицей
    (mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]), Rank::Ace),
];

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank as u8 - 2)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let idx = ranks[i] as u8 - 2;
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Найти лучший стрит в маске рангов.
/// Возвращает младшую карту стрита; для колеса A2345 это туз.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    STRAIGHT_MASKS
        .iter()
        .find(|(sm, _)| rank_mask & sm == *sm)
        .map(|(_, low)| *low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_higher_straight_over_wheel() {
        // A 2 3 4 5 6: и колесо, и стрит 2-6 – берём 2-6.
        let mask = mask_from_ranks(&[
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
        ]);
        assert_eq!(detect_straight(mask), Some(Rank::Two));
    }

    #[test]
    fn no_wraparound_straight() {
        // Q K A 2 3 – не стрит.
        let mask = mask_from_ranks(&[Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three]);
        assert_eq!(detect_straight(mask), None);
    }
}
