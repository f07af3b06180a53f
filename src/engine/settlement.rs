//! Расчёт банка с сайд-потами.
//!
//! Банк разбирается слоями. В каждом слое берутся игроки, у которых
//! ещё осталась нераспределённая ставка; лучшая вскрытая комбинация
//! (при равенстве – все её обладатели) забирает со всех по
//! `min(cap, остаток)`, где `cap` – наименьший остаток среди победителей.
//! Победители с исчерпанным остатком выбывают, остальные идут в следующий слой.
//! Каждый слой уменьшает хотя бы один остаток до нуля, так что слоёв не
//! больше числа игроков.

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::eval::HandScore;

/// Претензия игрока на банк.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Claim {
    /// Сбросил карты: только отдаёт свои фишки.
    Folded,
    /// Остался один, карты не вскрывались.
    Uncontested,
    /// Вскрыл комбинацию.
    Shown(HandScore),
}

impl Claim {
    fn is_live(&self) -> bool {
        !matches!(self, Claim::Folded)
    }

    /// Вскрытая комбинация, если была.
    pub fn score(&self) -> Option<HandScore> {
        match self {
            Claim::Shown(score) => Some(*score),
            _ => None,
        }
    }
}

/// Один слой банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotLayer {
    pub amount: Chips,
    /// Сколько максимум внёс в этот слой каждый участник.
    pub cap: Chips,
    pub winners: Vec<SeatIndex>,
}

/// Результат расчёта: выплаты по местам и слои банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    pub credits: Vec<Chips>,
    pub layers: Vec<PotLayer>,
}

/// Распределить банк.
///
/// `entries[seat] = (ставка игрока в раздаче, претензия)`.
/// Банк обязан совпадать с суммой ставок; вскрывать карты должны все
/// живые игроки, если их больше одного. Нарушение – паника.
pub fn settle(entries: &[(Chips, Claim)], bank: Chips) -> Settlement {
    let total: Chips = entries.iter().map(|(bid, _)| *bid).sum();
    assert_eq!(total, bank, "банк {bank} не равен сумме ставок {total}");

    let mut residual: Vec<u64> = entries.iter().map(|(bid, _)| bid.0).collect();
    let mut credits = vec![0u64; entries.len()];
    let mut layers = Vec::new();

    loop {
        let pool: Vec<SeatIndex> = (0..entries.len()).filter(|&i| residual[i] > 0).collect();
        if pool.is_empty() {
            break;
        }

        let live: Vec<SeatIndex> = pool.iter().copied().filter(|&i| entries[i].1.is_live()).collect();

        match live.len() {
            0 => {
                // Живые игроки уже всё забрали: остатки возвращаются владельцам.
                for &i in &pool {
                    credits[i] += residual[i];
                    residual[i] = 0;
                }
                break;
            }
            1 => {
                let winner = live[0];
                let amount: u64 = pool.iter().map(|&i| residual[i]).sum();
                let cap = pool.iter().map(|&i| residual[i]).max().unwrap_or(0);
                credits[winner] += amount;
                pool.iter().for_each(|&i| residual[i] = 0);
                layers.push(PotLayer {
                    amount: Chips(amount),
                    cap: Chips(cap),
                    winners: vec![winner],
                });
                break;
            }
            _ => {}
        }

        let winners = top_ranked(entries, &live, &residual);
        let cap = winners.iter().map(|&i| residual[i]).min().unwrap_or(0);

        let mut amount = 0u64;
        for &i in &pool {
            let taken = residual[i].min(cap);
            residual[i] -= taken;
            amount += taken;
        }

        let (share, remainder) = Chips(amount).split(winners.len());
        for &w in &winners {
            credits[w] += share.0;
        }
        // Нечётные фишки – по одной в порядке ранжирования.
        for &w in winners.iter().take(remainder.0 as usize) {
            credits[w] += 1;
        }

        layers.push(PotLayer {
            amount: Chips(amount),
            cap: Chips(cap),
            winners,
        });
    }

    Settlement {
        credits: credits.into_iter().map(Chips).collect(),
        layers,
    }
}

/// Обладатели лучшей комбинации среди живых, упорядоченные
/// по возрастанию остатка ставки, затем по месту.
fn top_ranked(entries: &[(Chips, Claim)], live: &[SeatIndex], residual: &[u64]) -> Vec<SeatIndex> {
    let scores: Vec<(SeatIndex, HandScore)> = live
        .iter()
        .map(|&i| {
            let score = entries[i]
                .1
                .score()
                .unwrap_or_else(|| panic!("игрок на месте {i} не вскрыл карты"));
            (i, score)
        })
        .collect();

    let best = scores.iter().map(|(_, s)| *s).max();
    let mut winners: Vec<SeatIndex> = scores
        .iter()
        .filter(|(_, s)| Some(*s) == best)
        .map(|(i, _)| *i)
        .collect();
    winners.sort_by_key(|&i| (residual[i], i));
    winners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Rank;

    fn high(r: Rank) -> Claim {
        Claim::Shown(HandScore::Pair {
            pair: r,
            kickers: [Rank::Five, Rank::Four, Rank::Three],
        })
    }

    #[test]
    fn single_live_player_takes_everything() {
        let entries = [
            (Chips(30), Claim::Folded),
            (Chips(50), Claim::Uncontested),
            (Chips(10), Claim::Folded),
        ];
        let s = settle(&entries, Chips(90));
        assert_eq!(s.credits, vec![Chips(0), Chips(90), Chips(0)]);
        assert_eq!(s.layers.len(), 1);
    }

    #[test]
    fn odd_chip_goes_to_first_ranked_winner() {
        let entries = [
            (Chips(5), high(Rank::King)),
            (Chips(5), high(Rank::King)),
            (Chips(1), Claim::Folded),
        ];
        let s = settle(&entries, Chips(11));
        assert_eq!(s.credits, vec![Chips(6), Chips(5), Chips(0)]);
    }

    #[test]
    fn folded_overcommit_is_returned() {
        // Сбросивший поставил больше всех живых: излишек ему и возвращается.
        let entries = [
            (Chips(100), Claim::Folded),
            (Chips(20), high(Rank::Two)),
            (Chips(20), high(Rank::Ace)),
        ];
        let s = settle(&entries, Chips(140));
        assert_eq!(s.credits, vec![Chips(80), Chips(0), Chips(60)]);
    }

    #[test]
    #[should_panic]
    fn bank_mismatch_panics() {
        let entries = [(Chips(5), high(Rank::King)), (Chips(5), high(Rank::Queen))];
        let _ = settle(&entries, Chips(11));
    }
}
