//! Sampler catalogue: pure random, Latin hypercube, orthogonal.
//!
//! Purpose
//! - One trait (`PointSampler`) over the three methods compared in the
//!   Monte Carlo experiments, so callers can swap methods without touching
//!   buffer handling or seeding.
//!
//! Conventions
//! - `fill` re-seeds the given stream with the sampler's seed first, then
//!   writes exactly `point_count()` points into the front of both buffers.
//! - Buffers shorter than `point_count()` are rejected before any write.

mod latin;
mod pure;

pub use latin::{LatinParams, LatinSampler};
pub use pure::{PureParams, PureSampler};

use crate::error::SamplingError;
use crate::ortho::{OrthoParams, OrthogonalSampler};
use crate::points::PointSet;
use crate::region::Region;
use crate::rng::{create_stream, DeterministicStream};
use std::fmt;
use std::str::FromStr;

/// Sampling method tag; codes match the experiment scripts (0 pure, 1 LHS, 2 ortho).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SamplingMethod {
    Pure,
    Latin,
    Orthogonal,
}

impl SamplingMethod {
    pub const ALL: [SamplingMethod; 3] = [Self::Pure, Self::Latin, Self::Orthogonal];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pure => "Pure",
            Self::Latin => "LHS",
            Self::Orthogonal => "Ortho",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Pure => 0,
            Self::Latin => 1,
            Self::Orthogonal => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SamplingMethod {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pure" | "random" | "0" => Ok(Self::Pure),
            "lhs" | "latin" | "1" => Ok(Self::Latin),
            "ortho" | "orthogonal" | "2" => Ok(Self::Orthogonal),
            other => Err(SamplingError::invalid(format!(
                "unknown sampling method {other:?}"
            ))),
        }
    }
}

/// Common interface of all point samplers.
pub trait PointSampler {
    fn method(&self) -> SamplingMethod;

    fn point_count(&self) -> usize;

    /// Points per independent run (equal to `point_count` for single-run samplers).
    fn run_len(&self) -> usize {
        self.point_count()
    }

    fn seed(&self) -> u64;

    fn region(&self) -> &Region;

    /// Re-seed `rng` and write `point_count()` points into `re`/`im`.
    fn fill<R: DeterministicStream + ?Sized>(
        &self,
        rng: &mut R,
        re: &mut [f64],
        im: &mut [f64],
    ) -> Result<(), SamplingError>;

    /// Allocate and fill a `PointSet` from a caller-owned stream.
    fn generate_with<R: DeterministicStream + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PointSet, SamplingError> {
        let mut out = PointSet::zeroed(self.point_count(), self.run_len());
        self.fill(rng, &mut out.re, &mut out.im)?;
        Ok(out)
    }

    /// Allocate and fill a `PointSet` from the default stream type.
    fn generate(&self) -> Result<PointSet, SamplingError> {
        let mut rng = create_stream(self.seed());
        self.generate_with(&mut rng)
    }
}

/// Any of the three samplers, for callers that pick the method at runtime.
#[derive(Clone, Debug)]
pub enum Sampler {
    Pure(PureSampler),
    Latin(LatinSampler),
    Orthogonal(OrthogonalSampler),
}

impl Sampler {
    pub fn pure(params: PureParams) -> Result<Self, SamplingError> {
        PureSampler::new(params).map(Self::Pure)
    }

    pub fn latin(params: LatinParams) -> Result<Self, SamplingError> {
        LatinSampler::new(params).map(Self::Latin)
    }

    pub fn orthogonal(params: OrthoParams) -> Result<Self, SamplingError> {
        OrthogonalSampler::new(params).map(Self::Orthogonal)
    }
}

impl PointSampler for Sampler {
    fn method(&self) -> SamplingMethod {
        match self {
            Self::Pure(s) => s.method(),
            Self::Latin(s) => s.method(),
            Self::Orthogonal(s) => s.method(),
        }
    }

    fn point_count(&self) -> usize {
        match self {
            Self::Pure(s) => s.point_count(),
            Self::Latin(s) => s.point_count(),
            Self::Orthogonal(s) => s.point_count(),
        }
    }

    fn run_len(&self) -> usize {
        match self {
            Self::Pure(s) => s.run_len(),
            Self::Latin(s) => s.run_len(),
            Self::Orthogonal(s) => s.run_len(),
        }
    }

    fn seed(&self) -> u64 {
        match self {
            Self::Pure(s) => s.seed(),
            Self::Latin(s) => s.seed(),
            Self::Orthogonal(s) => s.seed(),
        }
    }

    fn region(&self) -> &Region {
        match self {
            Self::Pure(s) => s.region(),
            Self::Latin(s) => s.region(),
            Self::Orthogonal(s) => s.region(),
        }
    }

    fn fill<R: DeterministicStream + ?Sized>(
        &self,
        rng: &mut R,
        re: &mut [f64],
        im: &mut [f64],
    ) -> Result<(), SamplingError> {
        match self {
            Self::Pure(s) => s.fill(rng, re, im),
            Self::Latin(s) => s.fill(rng, re, im),
            Self::Orthogonal(s) => s.fill(rng, re, im),
        }
    }
}
