//! Generator config: JSON file defaults, CLI flags on top.

use anyhow::{Context, Result};
use orthosample::api::{
    LatinParams, OrthoParams, PureParams, Region, Sampler, SamplingMethod, DEFAULT_SEED,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// `ortho`, `lhs` or `pure` (see `SamplingMethod::from_str`).
    pub method: String,
    pub major: usize,
    pub runs: usize,
    /// Point count for pure/LHS; `major²` when absent.
    pub samples: Option<usize>,
    pub seed: u64,
    pub real_range: (f64, f64),
    pub imag_range: (f64, f64),
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            method: "ortho".to_string(),
            major: 50,
            runs: 1,
            samples: None,
            seed: DEFAULT_SEED,
            real_range: (-2.0, 2.0),
            imag_range: (-2.0, 2.0),
        }
    }
}

/// Flag values that replace config fields when present.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub method: Option<String>,
    pub major: Option<usize>,
    pub runs: Option<usize>,
    pub samples: Option<usize>,
    pub seed: Option<u64>,
}

impl GenerateConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Config from an optional file, with flags applied.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        cfg.apply(overrides);
        Ok(cfg)
    }

    pub fn apply(&mut self, o: Overrides) {
        if let Some(method) = o.method {
            self.method = method;
        }
        if let Some(major) = o.major {
            self.major = major;
        }
        if let Some(runs) = o.runs {
            self.runs = runs;
        }
        if o.samples.is_some() {
            self.samples = o.samples;
        }
        if let Some(seed) = o.seed {
            self.seed = seed;
        }
    }

    pub fn region(&self) -> Result<Region> {
        Ok(Region::from_ranges(self.real_range, self.imag_range)?)
    }

    pub fn ortho_params(&self) -> Result<OrthoParams> {
        Ok(OrthoParams {
            major: self.major,
            runs: self.runs,
            seed: self.seed,
            region: self.region()?,
        })
    }

    pub fn build(&self) -> Result<Sampler> {
        let method: SamplingMethod = self.method.parse()?;
        let region = self.region()?;
        let samples = match self.samples {
            Some(n) => n,
            None => self
                .major
                .checked_mul(self.major)
                .context("major² overflows usize")?,
        };
        let sampler = match method {
            SamplingMethod::Pure => Sampler::pure(PureParams {
                samples,
                seed: self.seed,
                region,
            })?,
            SamplingMethod::Latin => Sampler::latin(LatinParams {
                samples,
                seed: self.seed,
                region,
            })?,
            SamplingMethod::Orthogonal => Sampler::orthogonal(self.ortho_params()?)?,
        };
        Ok(sampler)
    }
}
