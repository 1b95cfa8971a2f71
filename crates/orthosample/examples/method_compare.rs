//! Print stratum coverage for the three samplers at equal point counts.
//!
//! Usage:
//!   cargo run -p orthosample --example method_compare -- 20
//!
//! For each method, reports how many of the `major²` x- and y-strata stay empty.
//! Orthogonal and LHS cover every stratum; pure random leaves gaps.

use orthosample::api::{
    stratum_coverage, LatinParams, OrthoParams, PointSampler, PureParams, Sampler,
};

fn main() {
    let major: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let n = major * major;
    let grid = OrthoParams::new(major, 1);
    let samplers = [
        Sampler::pure(PureParams::new(n)).unwrap(),
        Sampler::latin(LatinParams::new(n)).unwrap(),
        Sampler::orthogonal(grid.clone()).unwrap(),
    ];
    for s in &samplers {
        let ps = s.generate().unwrap();
        let cov = stratum_coverage(&grid, &ps.re, &ps.im).unwrap();
        println!(
            "{:>5}: {} points, empty x-strata {}, empty y-strata {}",
            s.method().name(),
            ps.len(),
            cov[0].missing_x,
            cov[0].missing_y
        );
    }
}
