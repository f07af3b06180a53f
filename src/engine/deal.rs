use log::{debug, info};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Stage;
use crate::domain::player::{Player, PlayerStatus, Role};
use crate::domain::settings::DealConfig;
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{DealEventKind, DealHistory};
use crate::engine::positions::assign_roles;
use crate::engine::RandomSource;
use crate::eval::estimate_equity;
use crate::infra::rng_seed::RngSeed;

/// Одна раздача: от блайндов до расчёта банка.
///
/// Раздача забирает игроков у сессии на время игры и возвращает их
/// через `into_players`. Колода и борд принадлежат только раздаче.
#[derive(Clone, Debug)]
pub struct Deal {
    pub(crate) players: Vec<Player>,
    pub(crate) config: DealConfig,
    /// Все фишки, поставленные в этой раздаче.
    pub(crate) bank: Chips,
    /// Максимальная суммарная ставка среди игроков.
    pub(crate) current_bid: Chips,
    pub(crate) board: Vec<Card>,
    pub(crate) deck: Deck,
    pub(crate) stage: Stage,
    pub(crate) active_count: usize,
    pub(crate) all_in_count: usize,
    pub(crate) folds_count: usize,
    /// Повышения ставки в текущем круге торгов.
    pub(crate) round_raises: u32,
    /// Повышения ставки каждого игрока в текущем круге торгов.
    pub(crate) personal_raises: Vec<u32>,
    /// Оценка шансов каждого игрока (в процентах), если считается.
    pub(crate) win_chances: Vec<Option<f64>>,
    pub(crate) history: DealHistory,
    equity_seed: u64,
    equity_refreshes: u64,
}

impl Deal {
    /// Новая раздача: роли, перемешанная колода, карманные карты,
    /// блайнды. Торги ещё не начаты.
    pub fn new<R: RandomSource>(
        mut players: Vec<Player>,
        config: DealConfig,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if players.len() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        if let Some(p) = players.iter().find(|p| p.wealth.is_zero()) {
            return Err(EngineError::EmptyStack(p.id));
        }

        for p in players.iter_mut() {
            p.current_bid = Chips::ZERO;
            p.status = PlayerStatus::Active;
            p.hand = None;
            p.wealth_change = 0;
        }
        assign_roles(&mut players);

        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);

        let n = players.len();
        let mut deal = Deal {
            players,
            config,
            bank: Chips::ZERO,
            current_bid: Chips::ZERO,
            board: Vec::with_capacity(5),
            deck,
            stage: Stage::PreFlop,
            active_count: n,
            all_in_count: 0,
            folds_count: 0,
            round_raises: 0,
            personal_raises: vec![0; n],
            win_chances: vec![None; n],
            history: DealHistory::new(),
            equity_seed: rng.next_u64(),
            equity_refreshes: 0,
        };

        deal.history.push(DealEventKind::DealStarted {
            players: deal.players.iter().map(|p| p.id).collect(),
            small_blind: deal.config.small_blind,
        });

        deal.deal_hole_cards()?;
        deal.refresh_win_chances();
        deal.post_blinds();
        deal.start_round();

        Ok(deal)
    }

    /// По две карты каждому, по одной за круг.
    fn deal_hole_cards(&mut self) -> Result<(), EngineError> {
        let n = self.players.len();
        let mut first = Vec::with_capacity(n);
        for _ in 0..n {
            first.push(self.deck.draw_one().ok_or(EngineError::DeckExhausted)?);
        }
        for (seat, first_card) in first.into_iter().enumerate() {
            let second = self.deck.draw_one().ok_or(EngineError::DeckExhausted)?;
            let cards = [first_card, second];
            self.players[seat].hand = Some(cards);
            self.history.push(DealEventKind::HoleCardsDealt { seat, cards });
        }
        Ok(())
    }

    /// Малый блайнд на месте 0, большой (шаг ставки) на месте 1.
    /// Короткий стек может уйти в all-in уже на блайнде.
    fn post_blinds(&mut self) {
        let small = self.config.small_blind;
        let big = self.blind();
        for (seat, amount) in [(0, small), (1, big)] {
            let value = amount.min(self.players[seat].wealth);
            self.commit(seat, value);
            let role = self.players[seat].role;
            info!(
                "{} ({:?}) ставит блайнд {}; банк {}, текущая ставка {}",
                self.players[seat].name, role, value, self.bank, self.current_bid
            );
            self.history.push(DealEventKind::BlindPosted {
                seat,
                role,
                amount: value,
            });
        }
    }

    /// Довести суммарную ставку игрока до `value`.
    /// Обновляет банк, текущую ставку, счётчики повышений и статус all-in.
    pub(crate) fn commit(&mut self, seat: SeatIndex, value: Chips) {
        let player = &mut self.players[seat];
        let delta = value - player.current_bid;
        player.current_bid = value;
        player.wealth_change -= delta.0 as i64;
        self.bank += delta;

        if value > self.current_bid {
            // Блайнды тоже попадают в счётчики; их обнуляет start_round.
            self.round_raises += 1;
            self.personal_raises[seat] += 1;
            self.current_bid = value;
        }

        if value == player.wealth && player.status == PlayerStatus::Active {
            player.status = PlayerStatus::AllIn;
            self.active_count -= 1;
            self.all_in_count += 1;
        }
    }

    pub(crate) fn fold(&mut self, seat: SeatIndex) {
        let player = &mut self.players[seat];
        if player.status == PlayerStatus::Active {
            player.status = PlayerStatus::Folded;
            self.active_count -= 1;
            self.folds_count += 1;
            self.win_chances[seat] = None;
            self.refresh_win_chances();
        }
    }

    /// Начало круга торгов: счётчики повышений обнуляются.
    pub(crate) fn start_round(&mut self) {
        self.round_raises = 0;
        self.personal_raises.iter_mut().for_each(|c| *c = 0);
    }

    /// Сжечь карту и открыть карты следующей стадии.
    pub(crate) fn reveal(&mut self, stage: Stage) -> Result<Vec<Card>, EngineError> {
        self.deck.burn().ok_or(EngineError::DeckExhausted)?;
        let cards = self
            .deck
            .draw_n(stage.cards_revealed())
            .ok_or(EngineError::DeckExhausted)?;
        self.board.extend_from_slice(&cards);
        self.stage = stage;
        Ok(cards)
    }

    /// Пересчитать шансы всех, кто ещё в игре (если включено в конфиге).
    pub(crate) fn refresh_win_chances(&mut self) {
        if self.config.equity_trials == 0 {
            return;
        }
        let opponents = self.in_hand_count().saturating_sub(1);
        self.equity_refreshes += 1;
        let stream = RngSeed::from_u64(self.equity_seed);

        for seat in 0..self.players.len() {
            let player = &self.players[seat];
            let Some(hole) = player.hand.filter(|_| player.is_in_hand()) else {
                continue;
            };
            if opponents == 0 {
                self.win_chances[seat] = Some(100.0);
                continue;
            }
            let index = self.equity_refreshes * 64 + seat as u64;
            let seed = stream.derive(b"win-chance", index).low_u64();
            match estimate_equity(hole, opponents, &self.board, self.config.equity_trials, seed) {
                Ok(chance) => {
                    debug!("{}: шансы на выигрыш {:.1}%", player.name, chance);
                    self.win_chances[seat] = Some(chance);
                }
                Err(err) => {
                    debug!("{}: шансы не посчитаны: {}", player.name, err);
                    self.win_chances[seat] = None;
                }
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn config(&self) -> &DealConfig {
        &self.config
    }

    pub fn bank(&self) -> Chips {
        self.bank
    }

    pub fn current_bid(&self) -> Chips {
        self.current_bid
    }

    /// Минимальный шаг повышения ставки – удвоенный малый блайнд.
    pub fn blind(&self) -> Chips {
        self.config.blind()
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn history(&self) -> &DealHistory {
        &self.history
    }

    pub fn win_chance(&self, seat: SeatIndex) -> Option<f64> {
        self.win_chances.get(seat).copied().flatten()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn all_in_count(&self) -> usize {
        self.all_in_count
    }

    pub fn folds_count(&self) -> usize {
        self.folds_count
    }

    /// Сколько игроков ещё претендует на банк.
    pub fn in_hand_count(&self) -> usize {
        self.active_count + self.all_in_count
    }

    pub fn round_raises(&self) -> u32 {
        self.round_raises
    }

    pub fn personal_raises(&self, seat: SeatIndex) -> u32 {
        self.personal_raises.get(seat).copied().unwrap_or(0)
    }

    pub fn dealer(&self) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.role == Role::Dealer)
    }

    /// Второй по величине стек среди игроков, участвующих в торгах.
    pub fn second_richest_active(&self) -> Option<Chips> {
        let mut stacks: Vec<Chips> = self
            .players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.wealth)
            .collect();
        stacks.sort_unstable_by(|a, b| b.cmp(a));
        stacks.get(1).copied()
    }

    /// Торги круга завершены: все, кто ещё торгуется, уравняли текущую ставку.
    pub fn is_round_complete(&self) -> bool {
        self.players
            .iter()
            .filter(|p| p.is_active())
            .all(|p| p.current_bid == self.current_bid)
    }

    /// Вернуть игроков сессии, применив изменения стеков.
    pub fn into_players(self) -> Vec<Player> {
        let mut players = self.players;
        for p in players.iter_mut() {
            p.settle_and_reset();
        }
        players
    }
}
