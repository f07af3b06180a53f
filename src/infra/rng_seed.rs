//! RngSeed: доменный seed для независимых потоков случайности.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32], удобный конструктор из u64)
//!   - получать дочерние seed'ы хэшированием:
//!         child = H(domain || parent || label || index)
//!   - создавать DeterministicRng из seed
//!
//! Каждый прогон Monte Carlo получает свой поток по индексу, поэтому
//! результат не зависит от порядка и параллельности выполнения.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Seed из u64 (для тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Дочерний seed для потока `label`/`index`.
    pub fn derive(&self, label: &[u8], index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"POKER_DEAL_RNG_V1");
        hasher.update(self.bytes);
        hasher.update((label.len() as u64).to_le_bytes());
        hasher.update(label);
        hasher.update(index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Первые 8 байт seed'а как число (для API, принимающих u64).
    pub fn low_u64(&self) -> u64 {
        let mut b = [0u8; 8];
        b.copy_from_slice(&self.bytes[..8]);
        u64::from_le_bytes(b)
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
