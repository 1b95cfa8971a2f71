use super::OrthoParams;
use crate::error::SamplingError;

/// Stratum coverage of one run, recovered from coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunCoverage {
    pub run: usize,
    /// x-strata of `0..major²` with no point.
    pub missing_x: usize,
    /// y-strata of `0..major²` with no point.
    pub missing_y: usize,
    /// Points outside the half-open region.
    pub outside: usize,
}

impl RunCoverage {
    pub fn is_stratified(&self) -> bool {
        self.missing_x == 0 && self.missing_y == 0 && self.outside == 0
    }
}

/// Recover the stratum of every point and count uncovered strata per run.
///
/// Strata are located against the same edges the generator maps onto, so a
/// point with zero jitter is attributed to its own stratum.
pub fn stratum_coverage(
    params: &OrthoParams,
    re: &[f64],
    im: &[f64],
) -> Result<Vec<RunCoverage>, SamplingError> {
    params.validate()?;
    let run_len = params.run_len()?;
    let needed = params.point_count()?;
    if re.len() != needed || im.len() != needed {
        return Err(SamplingError::invalid(format!(
            "expected {needed} points, got re={} im={}",
            re.len(),
            im.len()
        )));
    }
    let region = &params.region;
    let scale = region.stratum_scale(run_len);
    let mut out = Vec::with_capacity(params.runs);
    for (run, (xs, ys)) in re.chunks(run_len).zip(im.chunks(run_len)).enumerate() {
        let mut seen_x = vec![false; run_len];
        let mut seen_y = vec![false; run_len];
        let mut outside = 0;
        for (&x, &y) in xs.iter().zip(ys) {
            let p = nalgebra::Vector2::new(x, y);
            if !region.contains(p) {
                outside += 1;
                continue;
            }
            let (sx, sy) = region.locate(scale, run_len, p);
            seen_x[sx] = true;
            seen_y[sy] = true;
        }
        out.push(RunCoverage {
            run,
            missing_x: seen_x.iter().filter(|s| !**s).count(),
            missing_y: seen_y.iter().filter(|s| !**s).count(),
            outside,
        });
    }
    Ok(out)
}
