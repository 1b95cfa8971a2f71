//! Owned point buffers.

use nalgebra::Vector2;

/// Real and imaginary coordinates in emission order, split into equal runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    pub re: Vec<f64>,
    pub im: Vec<f64>,
    run_len: usize,
}

impl PointSet {
    /// Zeroed buffers for `len` points grouped in runs of `run_len`.
    pub(crate) fn zeroed(len: usize, run_len: usize) -> Self {
        Self {
            re: vec![0.0; len],
            im: vec![0.0; len],
            run_len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// Points per run; a single-run set has `run_len == len`.
    #[inline]
    pub fn run_len(&self) -> usize {
        self.run_len
    }

    pub fn point(&self, k: usize) -> Option<Vector2<f64>> {
        Some(Vector2::new(*self.re.get(k)?, *self.im.get(k)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.re
            .iter()
            .zip(self.im.iter())
            .map(|(&x, &y)| Vector2::new(x, y))
    }

    /// `(re, im)` slices of each run, in order.
    pub fn runs(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        let step = self.run_len.max(1);
        self.re.chunks(step).zip(self.im.chunks(step))
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_evenly() {
        let mut ps = PointSet::zeroed(6, 2);
        ps.re.copy_from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let runs: Vec<_> = ps.runs().map(|(re, _)| re.to_vec()).collect();
        assert_eq!(runs, vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]]);
        assert_eq!(ps.point(3), Some(Vector2::new(3.0, 0.0)));
        assert_eq!(ps.point(6), None);
        assert_eq!(ps.iter().count(), 6);
    }

    #[test]
    fn empty_set_has_no_runs() {
        let ps = PointSet::default();
        assert!(ps.is_empty());
        assert_eq!(ps.runs().count(), 0);
    }
}
