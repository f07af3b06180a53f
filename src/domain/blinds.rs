// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::settings::ConfigError;

/// Одна ступень расписания блайндов: начиная с раздачи `from_deal`
/// малый блайнд равен `small_blind`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindStep {
    /// Номер раздачи (с 1), с которой действует ступень.
    pub from_deal: u32,
    pub small_blind: Chips,
}

/// Как растёт малый блайнд от раздачи к раздаче внутри одной игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlindSchedule {
    /// Блайнды не меняются.
    Fixed,
    /// Каждые `every` раздач блайнд умножается на `factor`.
    Multiply { every: u32, factor: u64 },
    /// Каждые `every` раздач блайнд увеличивается на `step`.
    Add { every: u32, step: Chips },
    /// Явный список ступеней, упорядоченный по `from_deal`.
    Levels(Vec<BlindStep>),
}

impl Default for BlindSchedule {
    fn default() -> Self {
        BlindSchedule::Fixed
    }
}

impl BlindSchedule {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            BlindSchedule::Fixed => Ok(()),
            BlindSchedule::Multiply { every, factor } => {
                if *every == 0 {
                    return Err(ConfigError::Invalid("blind schedule: every = 0".into()));
                }
                if *factor == 0 {
                    return Err(ConfigError::Invalid("blind schedule: factor = 0".into()));
                }
                Ok(())
            }
            BlindSchedule::Add { every, .. } => {
                if *every == 0 {
                    return Err(ConfigError::Invalid("blind schedule: every = 0".into()));
                }
                Ok(())
            }
            BlindSchedule::Levels(steps) => {
                let mut prev = 0u32;
                for step in steps {
                    if step.small_blind.is_zero() {
                        return Err(ConfigError::Invalid(format!(
                            "blind schedule: small_blind = 0 from deal {}",
                            step.from_deal
                        )));
                    }
                    if step.from_deal <= prev {
                        return Err(ConfigError::Invalid(format!(
                            "blind schedule: steps must be ordered, got deal {} after {}",
                            step.from_deal, prev
                        )));
                    }
                    prev = step.from_deal;
                }
                Ok(())
            }
        }
    }

    /// Малый блайнд для раздачи `deal_no` (нумерация с 1).
    pub fn small_blind_for(&self, base: Chips, deal_no: u32) -> Chips {
        let passed = deal_no.saturating_sub(1);
        match self {
            BlindSchedule::Fixed => base,
            BlindSchedule::Multiply { every, factor } => {
                let times = passed / (*every).max(1);
                let mut sb = base.0;
                for _ in 0..times {
                    sb = sb.saturating_mul(*factor);
                }
                Chips(sb)
            }
            BlindSchedule::Add { every, step } => {
                let times = (passed / (*every).max(1)) as u64;
                Chips(base.0.saturating_add(step.0.saturating_mul(times)))
            }
            BlindSchedule::Levels(steps) => steps
                .iter()
                .rev()
                .find(|s| s.from_deal <= deal_no)
                .map(|s| s.small_blind)
                .unwrap_or(base),
        }
    }
}
