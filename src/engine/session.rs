use log::info;

use crate::domain::chips::Chips;
use crate::domain::hand::DealSummary;
use crate::domain::player::Player;
use crate::domain::settings::GameSettings;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{run_deal, DealHost};
use crate::engine::RandomSource;

/// Игра из нескольких раздач за одним столом.
///
/// После каждой раздачи игроки без фишек выбывают, а порядок мест
/// сдвигается на одно влево: блайнды переходят к следующим игрокам.
#[derive(Clone, Debug)]
pub struct GameSession {
    players: Vec<Player>,
    settings: GameSettings,
    deals_played: u32,
}

impl GameSession {
    pub fn new(players: Vec<Player>, settings: GameSettings) -> Result<Self, EngineError> {
        settings.validate()?;
        let players: Vec<Player> = players.into_iter().filter(|p| !p.wealth.is_zero()).collect();
        if players.len() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        Ok(Self {
            players,
            settings,
            deals_played: 0,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn deals_played(&self) -> u32 {
        self.deals_played
    }

    /// Сумма фишек за столом (не меняется от раздачи к раздаче).
    pub fn total_chips(&self) -> Chips {
        self.players.iter().map(|p| p.wealth).sum()
    }

    /// Игра окончена: остался один игрок или исчерпан лимит раздач.
    pub fn is_over(&self) -> bool {
        self.players.len() < 2
            || self
                .settings
                .deals_count_limit
                .is_some_and(|limit| self.deals_played >= limit)
    }

    /// Победитель – единственный оставшийся игрок.
    pub fn winner(&self) -> Option<&Player> {
        match self.players.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Сыграть следующую раздачу.
    pub fn play_deal<R: RandomSource, H: DealHost>(
        &mut self,
        rng: &mut R,
        host: &mut H,
    ) -> Result<DealSummary, EngineError> {
        if self.players.len() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }

        let deal_no = self.deals_played + 1;
        let config = self.settings.deal_config(deal_no);
        info!("Раздача {}: малый блайнд {}", deal_no, config.small_blind);

        // При ошибке состав стола остаётся прежним.
        let (mut players, summary) = run_deal(self.players.clone(), config, rng, host)?;

        players.retain(|p| {
            if p.wealth.is_zero() {
                info!("{} выбывает", p.name);
            }
            !p.wealth.is_zero()
        });
        if !players.is_empty() {
            players.rotate_left(1);
        }

        self.players = players;
        self.deals_played = deal_no;
        Ok(summary)
    }

    /// Играть, пока игра не закончится.
    pub fn run<R: RandomSource, H: DealHost>(
        &mut self,
        rng: &mut R,
        host: &mut H,
    ) -> Result<Vec<DealSummary>, EngineError> {
        let mut summaries = Vec::new();
        while !self.is_over() {
            summaries.push(self.play_deal(rng, host)?);
        }
        Ok(summaries)
    }
}
