//! Orthogonal sampling over a `major² × major²` stratum lattice.
//!
//! Model
//! - Two index grids `xlist`, `ylist` (`major × major`, see [`IndexGrid`]) start
//!   as the raveled index `i*major + j` at `(i, j)`.
//! - Each run first permutes row `i` of `xlist`, then row `i` of `ylist`, for
//!   `i = 0..major`, all from one stream. Grids carry over between runs.
//! - Then for `i` (outer) and `j` (inner) it draws `u_x`, `u_y` and emits
//!   `x = lo.x + scale.x * (xlist[i][j] + u_x)`,
//!   `y = lo.y + scale.y * (ylist[j][i] + u_y)`, with `scale = width / major²`.
//!
//! Invariants
//! - Within a run the x-strata `xlist[i][j]` and the y-strata `ylist[j][i]` each
//!   cover `0..major²` exactly once. The transposed read puts one point in every
//!   `major`-wide block of both axes per sub-square row and column.
//! - The stream is re-seeded with `params.seed` at the start of every call, so
//!   output depends only on the params and the stream type.

mod grid;
mod verify;

pub use grid::IndexGrid;
pub use verify::{stratum_coverage, RunCoverage};

use crate::cfg::DEFAULT_SEED;
use crate::error::SamplingError;
use crate::points::PointSet;
use crate::region::Region;
use crate::rng::{create_stream, DeterministicStream};
use crate::sampling::{PointSampler, SamplingMethod};
use nalgebra::Vector2;

/// Parameters for orthogonal sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct OrthoParams {
    /// Grid side length; each run emits `major²` points.
    pub major: usize,
    /// Independent stratified passes.
    pub runs: usize,
    /// Re-applied to the stream at the start of every call.
    pub seed: u64,
    pub region: Region,
}

impl OrthoParams {
    pub fn new(major: usize, runs: usize) -> Self {
        Self {
            major,
            runs,
            seed: DEFAULT_SEED,
            region: Region::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Points per run (`major²`).
    pub fn run_len(&self) -> Result<usize, SamplingError> {
        self.major
            .checked_mul(self.major)
            .ok_or_else(|| SamplingError::invalid("major² overflows usize"))
    }

    /// Total points (`major² * runs`).
    pub fn point_count(&self) -> Result<usize, SamplingError> {
        self.run_len()?
            .checked_mul(self.runs)
            .ok_or_else(|| SamplingError::invalid("major² * runs overflows usize"))
    }

    pub fn validate(&self) -> Result<(), SamplingError> {
        if self.major == 0 {
            return Err(SamplingError::invalid("major must be > 0"));
        }
        if self.runs == 0 {
            return Err(SamplingError::invalid("runs must be > 0"));
        }
        self.point_count()?;
        self.region.validate()
    }
}

impl Default for OrthoParams {
    fn default() -> Self {
        Self::new(50, 1)
    }
}

/// One emitted point with the strata and jitter that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emission {
    /// Position in the output buffers.
    pub index: usize,
    pub run: usize,
    /// Sub-square column (outer loop).
    pub i: usize,
    /// Sub-square row (inner loop).
    pub j: usize,
    /// `(xlist[i][j], ylist[j][i])`.
    pub cell: (usize, usize),
    pub jitter: (f64, f64),
    pub point: Vector2<f64>,
}

/// Orthogonal point generator.
#[derive(Clone, Debug)]
pub struct OrthogonalSampler {
    params: OrthoParams,
    run_len: usize,
    points: usize,
}

impl OrthogonalSampler {
    pub fn new(params: OrthoParams) -> Result<Self, SamplingError> {
        params.validate()?;
        let run_len = params.run_len()?;
        let points = params.point_count()?;
        Ok(Self {
            params,
            run_len,
            points,
        })
    }

    pub fn params(&self) -> &OrthoParams {
        &self.params
    }

    /// Re-seed `rng`, run every pass and hand each emission to `visit` in order.
    pub fn visit<R, F>(&self, rng: &mut R, mut visit: F)
    where
        R: DeterministicStream + ?Sized,
        F: FnMut(&Emission),
    {
        let major = self.params.major;
        let region = &self.params.region;
        let scale = region.stratum_scale(self.run_len);
        let mut xlist = IndexGrid::raveled(major);
        let mut ylist = xlist.clone();

        rng.reseed(self.params.seed);
        let mut index = 0;
        for run in 0..self.params.runs {
            for row in 0..major {
                xlist.permute_row(row, rng);
                ylist.permute_row(row, rng);
            }
            for i in 0..major {
                for j in 0..major {
                    let u_x = rng.next_uniform();
                    let u_y = rng.next_uniform();
                    let cell = (xlist.get(i, j), ylist.get(j, i));
                    let point = region.map_cell(scale, cell, (u_x, u_y));
                    visit(&Emission {
                        index,
                        run,
                        i,
                        j,
                        cell,
                        jitter: (u_x, u_y),
                        point,
                    });
                    index += 1;
                }
            }
        }
    }
}

impl PointSampler for OrthogonalSampler {
    fn method(&self) -> SamplingMethod {
        SamplingMethod::Orthogonal
    }

    fn point_count(&self) -> usize {
        self.points
    }

    fn run_len(&self) -> usize {
        self.run_len
    }

    fn seed(&self) -> u64 {
        self.params.seed
    }

    fn region(&self) -> &Region {
        &self.params.region
    }

    fn fill<R: DeterministicStream + ?Sized>(
        &self,
        rng: &mut R,
        re: &mut [f64],
        im: &mut [f64],
    ) -> Result<(), SamplingError> {
        SamplingError::check_buffers(self.points, re, im)?;
        tracing::debug!(
            major = self.params.major,
            runs = self.params.runs,
            seed = self.params.seed,
            points = self.points,
            "ortho_fill"
        );
        self.visit(rng, |e| {
            re[e.index] = e.point.x;
            im[e.index] = e.point.y;
        });
        Ok(())
    }
}

/// Fill `points_real`/`points_imag` with `major² * runs` orthogonal samples over
/// `[-2, 2)²`, using the default stream seeded with [`DEFAULT_SEED`].
///
/// Both buffers must hold at least `major² * runs` values; only that prefix is
/// written.
pub fn ortho_sampling_generate(
    major: usize,
    runs: usize,
    points_real: &mut [f64],
    points_imag: &mut [f64],
) -> Result<(), SamplingError> {
    let sampler = OrthogonalSampler::new(OrthoParams::new(major, runs))?;
    let mut rng = create_stream(DEFAULT_SEED);
    sampler.fill(&mut rng, points_real, points_imag)
}

/// Allocating variant of [`ortho_sampling_generate`].
pub fn ortho_points(major: usize, runs: usize) -> Result<PointSet, SamplingError> {
    OrthogonalSampler::new(OrthoParams::new(major, runs))?.generate()
}
