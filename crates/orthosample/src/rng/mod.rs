//! Deterministic uniform streams and the row permuter.
//!
//! Purpose
//! - Every sampler draws from an explicit stream object passed `&mut` by the
//!   caller; there is no process-wide generator.
//! - A sampler re-seeds its stream at the start of each invocation, so the
//!   stream type decides the sequence while the params decide the seed.
//!
//! Streams
//! - `StdRng` (default) and `SmallRng` from `rand`.
//! - [`Mt19937`], the Mersenne Twister with 32-bit resolution uniforms, for
//!   parity with generators seeded through `init_genrand`.

mod mt;

pub use mt::Mt19937;

use rand::rngs::{SmallRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

/// Stream the samplers draw jitter and permutations from.
pub trait DeterministicStream: RngCore {
    /// Restart the stream; equal seeds give equal subsequent sequences.
    fn reseed(&mut self, seed: u64);

    /// Next uniform value in `[0, 1)`.
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl DeterministicStream for StdRng {
    fn reseed(&mut self, seed: u64) {
        *self = StdRng::seed_from_u64(seed);
    }
}

impl DeterministicStream for SmallRng {
    fn reseed(&mut self, seed: u64) {
        *self = SmallRng::seed_from_u64(seed);
    }
}

/// Stream type used by the convenience entry points.
pub type DefaultStream = StdRng;

/// Create the default stream, seeded.
#[inline]
pub fn create_stream(seed: u64) -> DefaultStream {
    StdRng::seed_from_u64(seed)
}

/// Reorder `row` in place into a uniformly random permutation of itself.
///
/// Fisher–Yates via `SliceRandom::shuffle`; rows of length 0 or 1 draw nothing.
#[inline]
pub fn permute_row<T, R: Rng + ?Sized>(row: &mut [T], rng: &mut R) {
    row.shuffle(rng);
}
