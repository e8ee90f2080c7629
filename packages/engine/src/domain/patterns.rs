use crate::core::grid::Board;
use crate::domain::cell::Cell;
use crate::domain::error::LifeError;

/// A named preset. `cells` are `(row, col)` offsets from the pattern's
/// top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

impl Pattern {
    /// `(height, width)` of the pattern's bounding box.
    pub fn extent(&self) -> (u32, u32) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Stamp the pattern centered on `board`. Cells that fall outside a
    /// board smaller than the pattern are clipped.
    pub fn stamp(&self, board: &mut Board) {
        let (height, width) = self.extent();
        let top = (board.rows() as i64 - height as i64) / 2;
        let left = (board.cols() as i64 - width as i64) / 2;

        for &(r, c) in self.cells {
            let row = top + r as i64;
            let col = left + c as i64;
            if let Some(idx) = board.dims().checked_index(row, col) {
                board.cells_mut()[idx] = Cell::Alive;
            }
        }
    }
}

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Result<&'static Pattern, LifeError> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::GridDimensions;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("glider").unwrap().name, "Glider");
        assert_eq!(find("R-PENTOMINO").unwrap().name, "R-pentomino");
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            find("spaceship").err(),
            Some(LifeError::UnknownPattern("spaceship".to_string()))
        );
    }

    #[test]
    fn blinker_is_centered() {
        let mut board = Board::new(GridDimensions::new(5, 5).unwrap());
        find("Blinker").unwrap().stamp(&mut board);

        assert_eq!(board.live_count(), 3);
        assert!(board.is_alive(2, 1));
        assert!(board.is_alive(2, 2));
        assert!(board.is_alive(2, 3));
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut board = Board::new(GridDimensions::new(2, 2).unwrap());
        find("Beacon").unwrap().stamp(&mut board);

        // Beacon is 4x4; centered on 2x2 only its middle overlaps.
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
        assert_eq!(board.live_count(), 2);
    }

    #[test]
    fn every_preset_has_a_unique_name() {
        let mut all: Vec<_> = names().map(str::to_ascii_lowercase).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), PATTERNS.len());
    }
}
