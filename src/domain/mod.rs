//! Доменная модель: карты, колода, фишки, игроки, стадии, настройки.

pub mod blinds;
pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod settings;

pub type PlayerId = u64;

/// Индекс места в раздаче (позиция в списке участников).
pub type SeatIndex = usize;

pub use blinds::*;
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use settings::*;
