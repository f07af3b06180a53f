use crate::domain::card::{Card, Rank, Suit};

use super::hand_rank::HandScore;
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Главная функция: сила лучшей 5-карточной комбинации из 7 карт.
///
/// Ожидается ровно 7 разных карт в любом порядке. Нарушение контракта
/// (другое количество, повторы) – паника, а не тихий неверный результат.
/// Карты вызывающего не трогаем: работаем с собственной отсортированной копией.
pub fn evaluate(cards: &[Card]) -> HandScore {
    assert_eq!(cards.len(), 7, "evaluate ожидает ровно 7 карт, получено {}", cards.len());

    let mut seen: u64 = 0;
    for card in cards {
        let bit = 1u64 << card.index();
        assert!(seen & bit == 0, "карта {card} встречается дважды");
        seen |= bit;
    }

    let mut sorted: Vec<Card> = cards.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));

    evaluate_sorted(&sorted)
}

/// То же для руки и борда из 5 карт.
pub fn evaluate_best_hand(hole: &[Card; 2], board: &[Card]) -> HandScore {
    let mut all_cards = Vec::with_capacity(7);
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate(&all_cards)
}

/// Гистограмма рангов в виде (количество, ранг),
/// отсортированная по количеству, затем по рангу – по убыванию.
fn rank_groups(sorted: &[Card]) -> Vec<(u8, Rank)> {
    let mut counts = [0u8; 15];
    for card in sorted {
        counts[card.rank.value() as usize] += 1;
    }

    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .iter()
        .filter(|r| counts[r.value() as usize] > 0)
        .map(|r| (counts[r.value() as usize], *r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    groups
}

/// Оценка по копии, отсортированной по убыванию ранга.
fn evaluate_sorted(sorted: &[Card]) -> HandScore {
    // 1. Флеш и стрит-флеш.
    let mut suit_counts = [0u8; 4];
    for card in sorted {
        suit_counts[card.suit.index()] += 1;
    }
    if let Some(suit) = Suit::ALL.into_iter().find(|s| suit_counts[s.index()] >= 5) {
        let flush_ranks: Vec<Rank> = sorted
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.rank)
            .collect();

        let mask = flush_ranks.iter().fold(0 as RankMask, |m, r| m | rank_to_bit(*r));
        if let Some(low) = detect_straight(mask) {
            return HandScore::StraightFlush { low };
        }
        return HandScore::Flush(top_five(&flush_ranks));
    }

    let groups = rank_groups(sorted);
    let (top_count, top_rank) = groups[0];

    // 2. Каре: кикер – старшая из оставшихся карт.
    if top_count == 4 {
        let kicker = highest_except(sorted, &[top_rank]);
        return HandScore::Quads { quads: top_rank, kicker };
    }

    // 3. Сет: фулл-хаус, если есть ещё пара или второй сет.
    // Из двух сетов старший идёт тройкой, младший – парой.
    if top_count == 3 {
        let (second_count, second_rank) = groups[1];
        if second_count >= 2 {
            return HandScore::FullHouse {
                trips: top_rank,
                pair: second_rank,
            };
        }
        return HandScore::Trips {
            trips: top_rank,
            kickers: [groups[1].1, groups[2].1],
        };
    }

    // 4. Стрит по всем рангам (колесо – младший).
    let mask = sorted.iter().fold(0 as RankMask, |m, c| m | rank_to_bit(c.rank));
    if let Some(low) = detect_straight(mask) {
        return HandScore::Straight { low };
    }

    // 5. Пары. Из трёх пар берём две старшие, третья может стать кикером.
    let pairs: Vec<Rank> = groups.iter().filter(|(c, _)| *c == 2).map(|(_, r)| *r).collect();
    match pairs.len() {
        0 => {
            let ranks: Vec<Rank> = sorted.iter().map(|c| c.rank).collect();
            HandScore::HighCard(top_five(&ranks))
        }
        1 => {
            let pair = pairs[0];
            HandScore::Pair {
                pair,
                kickers: [groups[1].1, groups[2].1, groups[3].1],
            }
        }
        _ => {
            let (high, low) = (pairs[0], pairs[1]);
            HandScore::TwoPair {
                high,
                low,
                kicker: highest_except(sorted, &[high, low]),
            }
        }
    }
}

/// Пять старших рангов из упорядоченного по убыванию списка.
fn top_five(desc: &[Rank]) -> [Rank; 5] {
    [desc[0], desc[1], desc[2], desc[3], desc[4]]
}

/// Старший ранг среди карт, не входящих в `excluded`.
fn highest_except(sorted: &[Card], excluded: &[Rank]) -> Rank {
    sorted
        .iter()
        .map(|c| c.rank)
        .find(|r| !excluded.contains(r))
        .unwrap_or(Rank::Two)
}
