use super::super::*;

impl AgeMap {
    #[inline]
    pub fn dims(&self) -> GridDimensions { self.dims }

    #[inline]
    pub fn rows(&self) -> u32 { self.dims.rows() }

    #[inline]
    pub fn cols(&self) -> u32 { self.dims.cols() }

    // === Age access ===
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> u32 {
        self.ages[self.dims.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: u32, col: u32, age: u32) {
        let idx = self.dims.index(row, col);
        self.ages[idx] = age;
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] { &self.ages }

    pub fn row(&self, row: u32) -> &[u32] {
        let cols = self.dims.cols() as usize;
        let start = row as usize * cols;
        &self.ages[start..start + cols]
    }

    pub fn oldest(&self) -> u32 {
        self.ages.iter().copied().max().unwrap_or(0)
    }

    /// Pointer to the ages (for JS heatmap rendering).
    pub fn as_ptr(&self) -> *const u32 {
        self.ages.as_ptr()
    }
}
