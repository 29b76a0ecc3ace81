use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Injectable source of the small score perturbation and confidence jitter.
///
/// Production runs use [`SeededNoise`]; tests inject [`ZeroNoise`] so every
/// scenario is reproducible.
pub trait NoiseSource: Send + Sync {
    /// Symmetric perturbation added to the combined score, in [-3, +3].
    fn score_noise(&self) -> f64;
    /// Jitter added to the confidence estimate, in [-0.05, +0.05].
    fn confidence_noise(&self) -> f64;
}

/// No-op generator for deterministic assessments.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn score_noise(&self) -> f64 {
        0.0
    }

    fn confidence_noise(&self) -> f64 {
        0.0
    }
}

/// Seedable 64-bit LCG, good enough for measurement-noise emulation and free
/// of extra dependencies.
#[derive(Debug)]
pub struct SeededNoise {
    state: AtomicU64,
}

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            state: AtomicU64::new(seed ^ LCG_INCREMENT),
        }
    }

    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos)
    }

    /// Uniform draw in [0, 1).
    fn next_unit(&self) -> f64 {
        let mut current = self.state.load(Ordering::Relaxed);
        loop {
            let next = current
                .wrapping_mul(LCG_MULTIPLIER)
                .wrapping_add(LCG_INCREMENT);
            match self.state.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return (next >> 11) as f64 / (1u64 << 53) as f64,
                Err(observed) => current = observed,
            }
        }
    }
}

impl NoiseSource for SeededNoise {
    fn score_noise(&self) -> f64 {
        self.next_unit() * 6.0 - 3.0
    }

    fn confidence_noise(&self) -> f64 {
        self.next_unit() * 0.1 - 0.05
    }
}
