//! Внешний API движка раздачи.
//!
//! DTO (dto.rs): структуры для слоя представления (чат, консоль, бот).

pub mod dto;

pub use dto::*;
