use super::super::*;

impl Board {
    #[inline]
    pub fn dims(&self) -> GridDimensions { self.dims }

    #[inline]
    pub fn rows(&self) -> u32 { self.dims.rows() }

    #[inline]
    pub fn cols(&self) -> u32 { self.dims.cols() }

    // === Cell access ===
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Cell {
        self.cells[self.dims.index(row, col)]
    }

    /// `None` outside the grid.
    #[inline]
    pub fn try_get(&self, row: u32, col: u32) -> Option<Cell> {
        self.dims
            .checked_index(row as i64, col as i64)
            .map(|idx| self.cells[idx])
    }

    #[inline]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.get(row, col).is_alive()
    }

    #[inline]
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) {
        let idx = self.dims.index(row, col);
        self.cells[idx] = cell;
    }

    /// Flip one cell. Returns false (and changes nothing) outside the grid.
    pub fn toggle(&mut self, row: u32, col: u32) -> bool {
        match self.dims.checked_index(row as i64, col as i64) {
            Some(idx) => {
                self.cells[idx] = self.cells[idx].toggled();
                true
            }
            None => false,
        }
    }

    // === Bulk views ===
    #[inline]
    pub fn cells(&self) -> &[Cell] { &self.cells }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] { &mut self.cells }

    pub fn row(&self, row: u32) -> &[Cell] {
        let cols = self.dims.cols() as usize;
        let start = row as usize * cols;
        &self.cells[start..start + cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dims.cols() as usize)
    }

    pub fn live_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_alive()).count() as u32
    }

    /// Row-major copy as bytes (1 = alive).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.as_byte()).collect()
    }

    /// Pointer to the cell bytes (for JS rendering).
    pub fn as_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }
}
