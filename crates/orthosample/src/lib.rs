//! Deterministic stratified point sets over a region of the complex plane.
//!
//! Samplers
//! - `ortho`: orthogonal sampling (per-run permuted index grids + jitter). The core.
//! - `sampling`: pure random and Latin hypercube samplers behind the same
//!   `PointSampler` trait, for method comparisons.
//!
//! Every sampler draws from an explicit stream (`rng::DeterministicStream`) and
//! re-seeds it with its configured seed on each call, so a given params value
//! always yields the same points.

pub mod api;
pub mod cfg;
pub mod error;
pub mod ortho;
pub mod points;
pub mod region;
pub mod rng;
pub mod sampling;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::DEFAULT_SEED;
pub use error::SamplingError;
pub use ortho::{ortho_points, ortho_sampling_generate};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ortho::{OrthoParams, OrthogonalSampler};
    pub use crate::points::PointSet;
    pub use crate::region::Region;
    pub use crate::rng::{create_stream, DeterministicStream, Mt19937};
    pub use crate::sampling::{PointSampler, Sampler, SamplingMethod};
    pub use crate::{ortho_sampling_generate, SamplingError, DEFAULT_SEED};
    pub use nalgebra::Vector2 as Vec2;
}
