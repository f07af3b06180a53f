use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Колода карт. Верх колоды – конец вектора.
/// Перемешивание делает вызывающий код через `RandomSource`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода, упорядоченная по рангу, внутри ранга – по масти.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Перемешанная колода без уже известных карт (рука, борд).
    pub fn shuffled_without<R: RandomSource>(known: &[Card], rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        deck.remove_cards(known);
        rng.shuffle(&mut deck.cards);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять ровно n карт сверху. Если карт не хватает – `None`, колода не трогается.
    pub fn draw_n(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        let at = self.cards.len() - n;
        let mut taken = self.cards.split_off(at);
        taken.reverse();
        Some(taken)
    }

    /// Сжечь верхнюю карту перед открытием улицы.
    pub fn burn(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Убрать из колоды уже использованные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
