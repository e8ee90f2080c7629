use super::*;

impl GridDimensions {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.rows as usize * self.cols as usize }

    // === Index conversion ===
    /// Flat index of `(row, col)`. Panics outside the grid in every build,
    /// since an off-grid column would otherwise land in the next row.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index: ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row as usize * self.cols as usize + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx / self.cols as usize) as u32;
        let col = (idx % self.cols as usize) as u32;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && row < self.rows as i64 && col >= 0 && col < self.cols as i64
    }

    /// Index of `(row, col)`, or `None` outside the grid. Edges do not wrap.
    #[inline]
    pub fn checked_index(&self, row: i64, col: i64) -> Option<usize> {
        if self.in_bounds(row, col) {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }
}
