//! Ядро покерной раздачи (Texas Hold'em, лимит на число повышений).
//!
//! - `eval` – оценка 7-карточных рук и шансов на выигрыш;
//! - `engine` – торги, стадии раздачи, расчёт банка с сайд-потами, серия раздач;
//! - `domain` – карты, фишки, игроки, настройки;
//! - `infra` – RNG, seed'ы, настройка логирования;
//! - `api` – DTO для слоя представления.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
