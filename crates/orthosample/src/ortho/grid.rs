use crate::rng::permute_row;
use rand::Rng;

/// `major × major` stratum-index grid stored row-major in one buffer.
///
/// Freshly built grids hold the raveled index `i*major + j` at `(i, j)`, so row
/// `i` owns the contiguous block `[i*major, (i+1)*major)`. Row permutations only
/// reorder within a row, which keeps every block (and the whole grid) a
/// permutation of `0..major²`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexGrid {
    major: usize,
    cells: Vec<usize>,
}

impl IndexGrid {
    pub fn raveled(major: usize) -> Self {
        Self {
            major,
            cells: (0..major * major).collect(),
        }
    }

    #[inline]
    pub fn major(&self) -> usize {
        self.major
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.major + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[usize] {
        &self.cells[row * self.major..(row + 1) * self.major]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [usize] {
        &mut self.cells[row * self.major..(row + 1) * self.major]
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.cells
    }

    /// Shuffle one row in place from `rng`.
    #[inline]
    pub fn permute_row<R: Rng + ?Sized>(&mut self, row: usize, rng: &mut R) {
        permute_row(self.row_mut(row), rng);
    }
}
