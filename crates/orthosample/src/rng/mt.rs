//! MT19937 (32-bit Mersenne Twister).
//!
//! Model
//! - Seeding follows `init_genrand`: only the low 32 bits of the seed are used.
//! - `next_uniform` is `genrand_real2`: a 32-bit output divided by 2^32, so
//!   uniforms lie in `[0, 1)` on a 2^-32 lattice.
//! - `next_u64` concatenates two outputs, low word first.

use super::DeterministicStream;
use rand::{Error, RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Seed used by `std::mt19937` and `genrand_int32` without prior seeding.
    pub const DEFAULT_SEED: u32 = 5489;

    pub fn new(seed: u32) -> Self {
        let mut mt = Self {
            state: [0; N],
            index: N,
        };
        mt.init(seed);
        mt
    }

    fn init(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    fn twist(&mut self) {
        for kk in 0..N {
            let y = (self.state[kk] & UPPER_MASK) | (self.state[(kk + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            self.state[kk] = self.state[(kk + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }

    /// Uniform in `[0, 1)` with 32-bit resolution.
    #[inline]
    pub fn real2(&mut self) -> f64 {
        f64::from(self.next_u32()) * (1.0 / 4_294_967_296.0)
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

impl DeterministicStream for Mt19937 {
    fn reseed(&mut self, seed: u64) {
        self.init(seed as u32);
    }

    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.real2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_outputs_for_default_seed() {
        let mut mt = Mt19937::default();
        assert_eq!(mt.next_u32(), 3_499_211_612);
        assert_eq!(mt.next_u32(), 581_869_302);
        assert_eq!(mt.next_u32(), 3_890_346_734);
    }

    #[test]
    fn ten_thousandth_output() {
        let mut mt = Mt19937::new(5489);
        let last = (0..10_000).map(|_| mt.next_u32()).last();
        assert_eq!(last, Some(4_123_659_995));
    }

    #[test]
    fn reseed_matches_fresh_instance() {
        let mut a = Mt19937::new(1);
        for _ in 0..700 {
            a.next_u32();
        }
        a.reseed(3737);
        let mut b = Mt19937::seed_from_u64(3737);
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn real2_is_scaled_output() {
        let mut a = Mt19937::new(3737);
        let mut b = Mt19937::new(3737);
        for _ in 0..100 {
            let u = a.next_uniform();
            assert_eq!(u, b.next_u32() as f64 / 4_294_967_296.0);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn seed_truncates_to_low_word() {
        let mut a = Mt19937::seed_from_u64((1u64 << 32) | 7);
        let mut b = Mt19937::new(7);
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
