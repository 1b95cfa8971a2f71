//! Axis-aligned sampling region in the complex plane.
//!
//! Points are mapped from a stratum index plus jitter `u ∈ [0, 1)` as
//! `lo + scale * (cell + u)` with `scale = width / strata`. Stratum `k` spans
//! `[lo + scale * k, lo + scale * (k + 1))` evaluated in `f64`, and rounding that
//! lands a value on the upper edge (or on `hi`) pulls it back to the largest float
//! below. Every mapped coordinate lies in `[lo, hi)` and inside its own stratum.

use crate::cfg::{DEFAULT_HI, DEFAULT_LO};
use crate::error::SamplingError;
use nalgebra::Vector2;

/// Half-open rectangle `[lo.x, hi.x) × [lo.y, hi.y)`; x is the real axis, y the imaginary one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub lo: Vector2<f64>,
    pub hi: Vector2<f64>,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            lo: Vector2::new(DEFAULT_LO.0, DEFAULT_LO.1),
            hi: Vector2::new(DEFAULT_HI.0, DEFAULT_HI.1),
        }
    }
}

impl Region {
    pub fn new(lo: Vector2<f64>, hi: Vector2<f64>) -> Result<Self, SamplingError> {
        let region = Self { lo, hi };
        region.validate()?;
        Ok(region)
    }

    /// Region built from `(min, max)` ranges per axis.
    pub fn from_ranges(real: (f64, f64), imag: (f64, f64)) -> Result<Self, SamplingError> {
        Self::new(Vector2::new(real.0, imag.0), Vector2::new(real.1, imag.1))
    }

    pub fn validate(&self) -> Result<(), SamplingError> {
        let corners = [self.lo.x, self.lo.y, self.hi.x, self.hi.y];
        if !corners.iter().all(|c| c.is_finite()) {
            return Err(SamplingError::invalid("region bounds must be finite"));
        }
        if self.lo.x >= self.hi.x || self.lo.y >= self.hi.y {
            return Err(SamplingError::invalid("region needs lo < hi on both axes"));
        }
        if !(self.hi - self.lo).iter().all(|w| w.is_finite()) {
            return Err(SamplingError::invalid("region width overflows f64"));
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> Vector2<f64> {
        self.hi - self.lo
    }

    #[inline]
    pub fn area(&self) -> f64 {
        let w = self.width();
        w.x * w.y
    }

    /// Half-open membership test.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.lo.x && p.x < self.hi.x && p.y >= self.lo.y && p.y < self.hi.y
    }

    /// Per-axis width of one stratum when each axis is cut into `strata` slices.
    #[inline]
    pub(crate) fn stratum_scale(&self, strata: usize) -> Vector2<f64> {
        self.width() / strata as f64
    }

    /// Map `(cell_x + u_x, cell_y + u_y)` into the region.
    #[inline]
    pub(crate) fn map_cell(
        &self,
        scale: Vector2<f64>,
        cell: (usize, usize),
        jitter: (f64, f64),
    ) -> Vector2<f64> {
        Vector2::new(
            map_axis(self.lo.x, self.hi.x, scale.x, cell.0, jitter.0),
            map_axis(self.lo.y, self.hi.y, scale.y, cell.1, jitter.1),
        )
    }

    /// Stratum indices of `p` among `strata` slices per axis, inverting `map_cell`.
    ///
    /// `p` must lie in the region.
    pub(crate) fn locate(
        &self,
        scale: Vector2<f64>,
        strata: usize,
        p: Vector2<f64>,
    ) -> (usize, usize) {
        (
            locate_axis(self.lo.x, scale.x, strata, p.x),
            locate_axis(self.lo.y, scale.y, strata, p.y),
        )
    }
}

#[inline]
fn stratum_edge(lo: f64, scale: f64, k: usize) -> f64 {
    lo + scale * k as f64
}

#[inline]
fn map_axis(lo: f64, hi: f64, scale: f64, cell: usize, u: f64) -> f64 {
    let v = lo + scale * (cell as f64 + u);
    let upper = stratum_edge(lo, scale, cell + 1).min(hi);
    if v < upper {
        v
    } else {
        float_below(upper).max(stratum_edge(lo, scale, cell))
    }
}

fn locate_axis(lo: f64, scale: f64, strata: usize, v: f64) -> usize {
    let last = strata.saturating_sub(1);
    let mut k = (((v - lo) / scale).floor().max(0.0) as usize).min(last);
    while k > 0 && v < stratum_edge(lo, scale, k) {
        k -= 1;
    }
    while k < last && v >= stratum_edge(lo, scale, k + 1) {
        k += 1;
    }
    k
}

/// Largest finite `f64` strictly below a finite `x`.
fn float_below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_four_by_four_square() {
        let r = Region::default();
        assert_eq!(r.lo, Vector2::new(-2.0, -2.0));
        assert_eq!(r.hi, Vector2::new(2.0, 2.0));
        assert!((r.area() - 16.0).abs() < 1e-15);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_and_non_finite_bounds() {
        assert!(Region::from_ranges((1.0, 1.0), (0.0, 1.0)).is_err());
        assert!(Region::from_ranges((0.0, 1.0), (2.0, -1.0)).is_err());
        assert!(Region::from_ranges((f64::NAN, 1.0), (0.0, 1.0)).is_err());
        assert!(Region::from_ranges((-f64::MAX, f64::MAX), (0.0, 1.0)).is_err());
        assert!(Region::from_ranges((-2.0, 1.0), (-1.5, 1.5)).is_ok());
    }

    #[test]
    fn contains_is_half_open() {
        let r = Region::default();
        assert!(r.contains(Vector2::new(-2.0, -2.0)));
        assert!(!r.contains(Vector2::new(2.0, 0.0)));
        assert!(!r.contains(Vector2::new(0.0, 2.0)));
        assert!(r.contains(Vector2::new(float_below(2.0), float_below(2.0))));
    }

    #[test]
    fn map_cell_matches_scaled_formula() {
        let r = Region::default();
        let scale = r.stratum_scale(4);
        assert_eq!(scale, Vector2::new(1.0, 1.0));
        let p = r.map_cell(scale, (1, 3), (0.25, 0.5));
        assert_eq!(p, Vector2::new(-0.75, 1.5));
    }

    #[test]
    fn top_stratum_never_reaches_upper_bound() {
        let r = Region::default();
        let u_max = 1.0 - f64::EPSILON / 2.0;
        for strata in [1usize, 3, 7, 9, 49, 1000] {
            let scale = r.stratum_scale(strata);
            let p = r.map_cell(scale, (strata - 1, strata - 1), (u_max, u_max));
            assert!(r.contains(p), "strata={strata} p={p:?}");
        }
    }

    #[test]
    fn locate_recovers_cells_at_both_jitter_extremes() {
        let r = Region::default();
        let u_max = 1.0 - f64::EPSILON / 2.0;
        for major in 2usize..60 {
            let strata = major * major;
            let scale = r.stratum_scale(strata);
            for k in 0..strata {
                let cell = (k, strata - 1 - k);
                for u in [0.0, u_max] {
                    let p = r.map_cell(scale, cell, (u, u));
                    assert!(r.contains(p), "major={major} k={k} u={u}");
                    assert_eq!(r.locate(scale, strata, p), cell, "major={major} k={k} u={u}");
                }
            }
        }
    }

    #[test]
    fn locate_on_a_skewed_region() {
        let r = Region::from_ranges((-2.0, 0.7), (-1.1, 1.3)).unwrap();
        let strata = 49;
        let scale = r.stratum_scale(strata);
        for k in 0..strata {
            let p = r.map_cell(scale, (k, k), (0.0, 0.0));
            assert_eq!(r.locate(scale, strata, p), (k, k));
        }
    }

    #[test]
    fn float_below_handles_signs_and_zero() {
        assert!(float_below(2.0) < 2.0);
        assert_eq!(float_below(2.0), 2.0 - f64::EPSILON);
        assert!(float_below(0.0) < 0.0);
        assert!(float_below(-1.0) < -1.0);
        assert!(float_below(-1.0) > -1.0 - 1e-15);
    }
}
