//! Curated surface for the CLI and the Python bindings.
//!
//! Prefer these re-exports over reaching into submodules so callers keep one
//! import list when modules move.

// Core generator
pub use crate::ortho::{
    ortho_points, ortho_sampling_generate, stratum_coverage, Emission, IndexGrid, OrthoParams,
    OrthogonalSampler, RunCoverage,
};
// Other samplers
pub use crate::sampling::{
    LatinParams, LatinSampler, PointSampler, PureParams, PureSampler, Sampler, SamplingMethod,
};
// Streams and buffers
pub use crate::points::PointSet;
pub use crate::region::Region;
pub use crate::rng::{create_stream, permute_row, DefaultStream, DeterministicStream, Mt19937};
pub use crate::{SamplingError, DEFAULT_SEED};
