//! Seedable randomness for cluster placement
//!
//! ChaCha8 keeps boards reproducible per seed across native and wasm
//! builds. Entropy for unseeded boards comes from `Math.random` in the
//! browser and `rand::thread_rng` natively. Either way the drawn seed is
//! kept so an unseeded board can be replayed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
pub struct SeedRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeedRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform in `0..bound`. `bound` must be positive.
    pub fn gen_index(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound)
    }

    /// Uniform in `-radius..=radius`.
    pub fn gen_offset(&mut self, radius: u32) -> i64 {
        let r = radius as i64;
        self.inner.gen_range(-r..=r)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    rand::thread_rng().gen::<u64>()
}
