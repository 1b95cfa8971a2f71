//! Fixed defaults (internal).
//!
//! Policy
//! - The seed is re-applied at the start of every fill, so output depends only
//!   on the sampler params. Override it per params struct, not here.

/// Seed re-applied to the stream at the start of every sampler invocation.
pub const DEFAULT_SEED: u64 = 3737;
/// Lower corner of the default sampling region (real, imag).
pub(crate) const DEFAULT_LO: (f64, f64) = (-2.0, -2.0);
/// Upper corner of the default sampling region (real, imag).
pub(crate) const DEFAULT_HI: (f64, f64) = (2.0, 2.0);
