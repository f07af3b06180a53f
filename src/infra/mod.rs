//! Инфраструктура вокруг движка раздачи:
//! - RNG-реализации;
//! - доменные seed'ы для независимых потоков случайности;
//! - настройка логирования для бинарников.

pub mod logging;
pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
