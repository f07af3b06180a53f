use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Trips = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::Trips,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::Quads,
        HandCategory::StraightFlush,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::Trips => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::Quads => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

/// Сила руки: категория плюс данные для разрешения равенства внутри категории.
///
/// Сравнение лексикографическое – сначала категория, потом ранги в порядке
/// полей. Равные `HandScore` означают точную ничью (банк делится).
/// Для стритов хранится младшая карта; у колеса A2345 это туз, и такой
/// стрит младше всех остальных.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandScore {
    HighCard([Rank; 5]),
    Pair { pair: Rank, kickers: [Rank; 3] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    Trips { trips: Rank, kickers: [Rank; 2] },
    Straight { low: Rank },
    Flush([Rank; 5]),
    FullHouse { trips: Rank, pair: Rank },
    Quads { quads: Rank, kicker: Rank },
    StraightFlush { low: Rank },
}

impl HandScore {
    pub fn category(&self) -> HandCategory {
        match self {
            HandScore::HighCard(_) => HandCategory::HighCard,
            HandScore::Pair { .. } => HandCategory::Pair,
            HandScore::TwoPair { .. } => HandCategory::TwoPair,
            HandScore::Trips { .. } => HandCategory::Trips,
            HandScore::Straight { .. } => HandCategory::Straight,
            HandScore::Flush(_) => HandCategory::Flush,
            HandScore::FullHouse { .. } => HandCategory::FullHouse,
            HandScore::Quads { .. } => HandCategory::Quads,
            HandScore::StraightFlush { .. } => HandCategory::StraightFlush,
        }
    }

    /// Ранги для разрешения равенства в порядке значимости.
    pub fn tiebreak(&self) -> Vec<Rank> {
        match *self {
            HandScore::HighCard(r) | HandScore::Flush(r) => r.to_vec(),
            HandScore::Pair { pair, kickers } => {
                let mut v = vec![pair];
                v.extend_from_slice(&kickers);
                v
            }
            HandScore::TwoPair { high, low, kicker } => vec![high, low, kicker],
            HandScore::Trips { trips, kickers } => {
                let mut v = vec![trips];
                v.extend_from_slice(&kickers);
                v
            }
            HandScore::Straight { low } | HandScore::StraightFlush { low } => vec![low],
            HandScore::FullHouse { trips, pair } => vec![trips, pair],
            HandScore::Quads { quads, kicker } => vec![quads, kicker],
        }
    }

    /// Упаковка в u32 для сравнения:
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Незанятые ранги – нули. Туз как младшая карта колеса кодируется единицей.
    pub fn value(&self) -> u32 {
        let nibbles: Vec<u32> = match *self {
            HandScore::Straight { low } | HandScore::StraightFlush { low } => {
                vec![straight_low_nibble(low)]
            }
            _ => self.tiebreak().iter().map(|r| r.value() as u32).collect(),
        };

        let mut value = (self.category() as u32) << 20;
        for (i, n) in nibbles.iter().enumerate() {
            value |= n << (16 - 4 * i as u32);
        }
        value
    }

    /// Человеческое описание руки: категория и карты комбинации.
    pub fn describe(&self) -> String {
        let body = match *self {
            HandScore::HighCard(r) | HandScore::Flush(r) => ranks(&r),
            HandScore::Pair { pair, kickers } => format!("{}{}", ranks(&[pair; 2]), ranks(&kickers)),
            HandScore::TwoPair { high, low, kicker } => {
                format!("{}{}{}", ranks(&[high; 2]), ranks(&[low; 2]), kicker)
            }
            HandScore::Trips { trips, kickers } => format!("{}{}", ranks(&[trips; 3]), ranks(&kickers)),
            HandScore::Straight { low } | HandScore::StraightFlush { low } => {
                ranks(&straight_ranks(low))
            }
            HandScore::FullHouse { trips, pair } => format!("{}{}", ranks(&[trips; 3]), ranks(&[pair; 2])),
            HandScore::Quads { quads, kicker } => format!("{}{}", ranks(&[quads; 4]), kicker),
        };
        format!("{}: {}", self.category().name(), body)
    }
}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn ranks(rs: &[Rank]) -> String {
    rs.iter().map(|r| r.to_string()).collect()
}

fn straight_low_nibble(low: Rank) -> u32 {
    match low {
        Rank::Ace => 1,
        r => r.value() as u32,
    }
}

/// Карты стрита от младшей к старшей.
fn straight_ranks(low: Rank) -> [Rank; 5] {
    let start = straight_low_nibble(low) as u8;
    let mut out = [Rank::Ace; 5];
    for (i, slot) in out.iter_mut().enumerate() {
        let v = start + i as u8;
        *slot = if v == 1 { Rank::Ace } else { Rank::from_value(v).unwrap_or(Rank::Ace) };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_is_lowest_straight() {
        let wheel = HandScore::Straight { low: Rank::Ace };
        let six_high = HandScore::Straight { low: Rank::Two };
        let broadway = HandScore::Straight { low: Rank::Ten };
        assert!(wheel < six_high);
        assert!(six_high < broadway);
    }

    #[test]
    fn category_dominates_tiebreak() {
        let pair_of_aces = HandScore::Pair {
            pair: Rank::Ace,
            kickers: [Rank::King, Rank::Queen, Rank::Jack],
        };
        let low_two_pair = HandScore::TwoPair {
            high: Rank::Three,
            low: Rank::Two,
            kicker: Rank::Four,
        };
        assert!(pair_of_aces < low_two_pair);
    }

    #[test]
    fn describes_wheel() {
        let wheel = HandScore::Straight { low: Rank::Ace };
        assert_eq!(wheel.describe(), "Straight: A2345");
    }
}
