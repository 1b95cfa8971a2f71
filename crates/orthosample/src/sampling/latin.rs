use super::{PointSampler, SamplingMethod};
use crate::cfg::DEFAULT_SEED;
use crate::error::SamplingError;
use crate::region::Region;
use crate::rng::{permute_row, DeterministicStream};

/// Parameters for 2D Latin hypercube sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct LatinParams {
    pub samples: usize,
    pub seed: u64,
    pub region: Region,
}

impl LatinParams {
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            seed: DEFAULT_SEED,
            region: Region::default(),
        }
    }

    fn validate(&self) -> Result<(), SamplingError> {
        if self.samples == 0 {
            return Err(SamplingError::invalid("samples must be > 0"));
        }
        self.region.validate()
    }
}

/// Each axis cut into `samples` slices; every slice gets exactly one point.
///
/// Model
/// - Two independent permutations `πx`, `πy` of `0..samples` (x first).
/// - Point `k` sits in slice `(πx[k], πy[k])` with jitter `(u_x, u_y)`.
#[derive(Clone, Debug)]
pub struct LatinSampler {
    params: LatinParams,
}

impl LatinSampler {
    pub fn new(params: LatinParams) -> Result<Self, SamplingError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &LatinParams {
        &self.params
    }
}

impl PointSampler for LatinSampler {
    fn method(&self) -> SamplingMethod {
        SamplingMethod::Latin
    }

    fn point_count(&self) -> usize {
        self.params.samples
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
        let n = self.params.samples;
        SamplingError::check_buffers(n, re, im)?;
        tracing::debug!(samples = n, seed = self.params.seed, "latin_fill");
        let region = &self.params.region;
        let scale = region.stratum_scale(n);
        rng.reseed(self.params.seed);
        let mut slices_x: Vec<usize> = (0..n).collect();
        let mut slices_y = slices_x.clone();
        permute_row(&mut slices_x, rng);
        permute_row(&mut slices_y, rng);
        for k in 0..n {
            let u_x = rng.next_uniform();
            let u_y = rng.next_uniform();
            let p = region.map_cell(scale, (slices_x[k], slices_y[k]), (u_x, u_y));
            re[k] = p.x;
            im[k] = p.y;
        }
        Ok(())
    }
}
