use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::blinds::BlindSchedule;
use crate::domain::chips::Chips;

/// Ошибки конфигурации.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("некорректная настройка: {0}")]
    Invalid(String),

    #[error("не удалось разобрать настройки: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Параметры одной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealConfig {
    /// Малый блайнд. Минимальный шаг ставки (blind) – вдвое больше.
    pub small_blind: Chips,
    /// Сколько раз один игрок может повысить ставку за круг торгов.
    pub raise_personal_limit: Option<u32>,
    /// Сколько повышений всего допускается за круг торгов.
    pub trade_rounds_limit: Option<u32>,
    /// Число прогонов Monte Carlo для подсказки шансов. 0 – не считать.
    pub equity_trials: u32,
    /// Сколько раз переспрашивать игрока после отклонённого действия,
    /// прежде чем автоматически сбросить его карты.
    pub max_decision_retries: u32,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            small_blind: Chips(1),
            raise_personal_limit: None,
            trade_rounds_limit: None,
            equity_trials: 0,
            max_decision_retries: 3,
        }
    }
}

impl DealConfig {
    pub fn new(small_blind: Chips) -> Self {
        Self {
            small_blind,
            ..Self::default()
        }
    }

    /// Минимальный шаг повышения ставки.
    pub fn blind(&self) -> Chips {
        Chips(self.small_blind.0.saturating_mul(2))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.small_blind.is_zero() {
            return Err(ConfigError::Invalid("small_blind = 0".into()));
        }
        if self.raise_personal_limit == Some(0) {
            return Err(ConfigError::Invalid("raise_personal_limit = 0".into()));
        }
        if self.trade_rounds_limit == Some(0) {
            return Err(ConfigError::Invalid("trade_rounds_limit = 0".into()));
        }
        Ok(())
    }
}

/// Настройки игры из нескольких раздач.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameSettings {
    pub small_blind: Chips,
    /// Лимит повышений за круг торгов (общий на стол).
    pub reraise_count_limit: Option<u32>,
    /// Лимит повышений за круг торгов для одного игрока.
    pub raise_personal_limit: Option<u32>,
    /// После скольких раздач игра заканчивается, даже если игроков больше одного.
    pub deals_count_limit: Option<u32>,
    pub blind_schedule: BlindSchedule,
    pub equity_trials: u32,
    pub max_decision_retries: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            small_blind: Chips(1),
            reraise_count_limit: Some(2),
            raise_personal_limit: None,
            deals_count_limit: Some(10),
            blind_schedule: BlindSchedule::Multiply { every: 3, factor: 2 },
            equity_trials: 0,
            max_decision_retries: 3,
        }
    }
}

impl GameSettings {
    /// Разобрать настройки из JSON. Отсутствующие поля берутся по умолчанию.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let settings: GameSettings = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deals_count_limit == Some(0) {
            return Err(ConfigError::Invalid("deals_count_limit = 0".into()));
        }
        self.blind_schedule.validate()?;
        self.deal_config(1).validate()
    }

    /// Конфиг для раздачи номер `deal_no` (с 1) с учётом роста блайндов.
    pub fn deal_config(&self, deal_no: u32) -> DealConfig {
        DealConfig {
            small_blind: self.blind_schedule.small_blind_for(self.small_blind, deal_no),
            raise_personal_limit: self.raise_personal_limit,
            trade_rounds_limit: self.reraise_count_limit,
            equity_trials: self.equity_trials,
            max_decision_retries: self.max_decision_retries,
        }
    }
}
