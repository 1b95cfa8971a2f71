use super::{PointSampler, SamplingMethod};
use crate::cfg::DEFAULT_SEED;
use crate::error::SamplingError;
use crate::region::Region;
use crate::rng::DeterministicStream;

/// Parameters for independent uniform sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct PureParams {
    pub samples: usize,
    pub seed: u64,
    pub region: Region,
}

impl PureParams {
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

/// Every point drawn uniformly over the region, no stratification.
#[derive(Clone, Debug)]
pub struct PureSampler {
    params: PureParams,
}

impl PureSampler {
    pub fn new(params: PureParams) -> Result<Self, SamplingError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &PureParams {
        &self.params
    }
}

impl PointSampler for PureSampler {
    fn method(&self) -> SamplingMethod {
        SamplingMethod::Pure
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
        tracing::debug!(samples = n, seed = self.params.seed, "pure_fill");
        let region = &self.params.region;
        let scale = region.stratum_scale(1);
        rng.reseed(self.params.seed);
        for (x, y) in re[..n].iter_mut().zip(im[..n].iter_mut()) {
            let u_x = rng.next_uniform();
            let u_y = rng.next_uniform();
            let p = region.map_cell(scale, (0, 0), (u_x, u_y));
            *x = p.x;
            *y = p.y;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_stream;

    #[test]
    fn points_are_scaled_uniform_draws() {
        let sampler = PureSampler::new(PureParams::new(5)).unwrap();
        let ps = sampler.generate().unwrap();
        let mut rng = create_stream(DEFAULT_SEED);
        for p in ps.iter() {
            let u_x = rng.next_uniform();
            let u_y = rng.next_uniform();
            assert_eq!(p.x, -2.0 + 4.0 * u_x);
            assert_eq!(p.y, -2.0 + 4.0 * u_y);
        }
    }

    #[test]
    fn zero_samples_rejected() {
        assert!(PureSampler::new(PureParams::new(0)).is_err());
    }

    #[test]
    fn custom_region_is_respected() {
        let mut params = PureParams::new(500);
        params.region = Region::from_ranges((-2.0, 1.0), (-1.5, 1.5)).unwrap();
        params.seed = 17;
        let sampler = PureSampler::new(params).unwrap();
        let ps = sampler.generate().unwrap();
        assert!(ps.iter().all(|p| sampler.region().contains(p)));
    }
}
