//! PyO3 bindings for the `orthosample` samplers.
//!
//! Notes
//! - Keep bindings thin: each function returns `(re, im)` lists that the Python
//!   side stacks into an `(n, 2)` array.
//! - Buffers are allocated here, so Python never hands raw pointers across.

use orthosample::api::{
    LatinParams, OrthoParams, PointSampler, PureParams, Sampler, SamplingError, DEFAULT_SEED,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type Coords = (Vec<f64>, Vec<f64>);

fn map_sampling_error(err: SamplingError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn run(sampler: Result<Sampler, SamplingError>) -> PyResult<Coords> {
    let points = sampler
        .and_then(|s| s.generate())
        .map_err(map_sampling_error)?;
    Ok(points.into_parts())
}

/// Orthogonal sampling over [-2, 2)²: `major² * runs` points.
#[pyfunction]
#[pyo3(signature = (major, runs = 1, seed = None))]
fn ortho_sampling_generate(major: usize, runs: usize, seed: Option<u64>) -> PyResult<Coords> {
    let params = OrthoParams::new(major, runs).with_seed(seed.unwrap_or(DEFAULT_SEED));
    run(Sampler::orthogonal(params))
}

/// Latin hypercube sampling over [-2, 2)².
#[pyfunction]
#[pyo3(signature = (samples, seed = None))]
fn latin_hypercube_sampling(samples: usize, seed: Option<u64>) -> PyResult<Coords> {
    let mut params = LatinParams::new(samples);
    params.seed = seed.unwrap_or(DEFAULT_SEED);
    run(Sampler::latin(params))
}

/// Independent uniform sampling over [-2, 2)².
#[pyfunction]
#[pyo3(signature = (samples, seed = None))]
fn pure_random_sampling(samples: usize, seed: Option<u64>) -> PyResult<Coords> {
    let mut params = PureParams::new(samples);
    params.seed = seed.unwrap_or(DEFAULT_SEED);
    run(Sampler::pure(params))
}

#[pymodule]
fn orthosample_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("DEFAULT_SEED", DEFAULT_SEED)?;
    m.add("__version__", orthosample::VERSION)?;
    m.add_function(wrap_pyfunction!(ortho_sampling_generate, m)?)?;
    m.add_function(wrap_pyfunction!(latin_hypercube_sampling, m)?)?;
    m.add_function(wrap_pyfunction!(pure_random_sampling, m)?)?;
    Ok(())
}
