//! LifeEngine - one generation of Conway's rule with cell ages
//!
//! - Moore neighborhood (8 cells), finite grid: off-grid neighbors count
//!   as dead, edges never wrap
//! - Survival on 2 or 3 neighbors, birth on exactly 3
//! - Ages: survivor `+1`, newborn `1`, dead `0`
//!
//! Reads only the input snapshot and writes fresh buffers, so no cell
//! ever sees a partially updated neighbor.

use crate::core::grid::{ensure_same_shape, AgeMap, Board, GridDimensions};
use crate::domain::cell::Cell;
use crate::domain::error::LifeError;

const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Next generation plus the counts the UI shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub board: Board,
    pub ages: AgeMap,
    pub births: u32,
    pub deaths: u32,
    pub live_cells: u32,
    pub oldest_age: u32,
}

pub struct LifeEngine;

impl LifeEngine {
    pub fn step(board: &Board, ages: &AgeMap) -> Result<(Board, AgeMap), LifeError> {
        let outcome = Self::step_with_stats(board, ages)?;
        Ok((outcome.board, outcome.ages))
    }

    pub fn step_with_stats(board: &Board, ages: &AgeMap) -> Result<StepOutcome, LifeError> {
        ensure_same_shape(board, ages)?;
        Ok(Self::advance(board, ages))
    }

    /// Caller guarantees matching shapes.
    pub(crate) fn advance(board: &Board, ages: &AgeMap) -> StepOutcome {
        debug_assert_eq!(board.dims(), ages.dims());

        let dims = board.dims();
        let cells = board.cells();
        let prev_ages = ages.as_slice();

        let mut next_cells = vec![Cell::Dead; dims.size()];
        let mut next_ages = vec![0u32; dims.size()];
        let mut births = 0;
        let mut deaths = 0;
        let mut live_cells = 0;
        let mut oldest_age = 0;

        for idx in 0..dims.size() {
            let (row, col) = dims.coords(idx);
            let current = *fast!(cells, [idx]);
            let next = Self::next_cell(current, count_live_neighbors(cells, dims, row, col));

            let age = match (current, next) {
                (Cell::Alive, Cell::Alive) => fast!(prev_ages, [idx]).saturating_add(1),
                (Cell::Dead, Cell::Alive) => {
                    births += 1;
                    1
                }
                (Cell::Alive, Cell::Dead) => {
                    deaths += 1;
                    0
                }
                (Cell::Dead, Cell::Dead) => 0,
            };

            if next.is_alive() {
                live_cells += 1;
                oldest_age = oldest_age.max(age);
            }
            fast!(next_cells, [idx] = next);
            fast!(next_ages, [idx] = age);
        }

        StepOutcome {
            board: Board::from_cells(dims, next_cells),
            ages: AgeMap::from_ages(dims, next_ages),
            births,
            deaths,
            live_cells,
            oldest_age,
        }
    }

    /// Conway's B3/S23 rule for one cell.
    #[inline]
    pub fn next_cell(current: Cell, live_neighbors: u8) -> Cell {
        match (current, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
            (Cell::Dead, 3) => Cell::Alive,                    // Birth
            _ => Cell::Dead,                                   // Death or stays dead
        }
    }

    /// Live cells among the up-to-8 on-grid neighbors of `(row, col)`.
    pub fn live_neighbors(board: &Board, row: u32, col: u32) -> u8 {
        count_live_neighbors(board.cells(), board.dims(), row, col)
    }
}

#[inline]
fn count_live_neighbors(cells: &[Cell], dims: GridDimensions, row: u32, col: u32) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        if let Some(idx) = dims.checked_index(row as i64 + dr, col as i64 + dc) {
            if fast!(cells, [idx]).is_alive() {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse rows of `#` (alive) and `.` (dead).
    fn board(rows: &[&str]) -> Board {
        Board::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|ch| Cell::from(ch == '#')).collect())
                .collect(),
        )
        .unwrap()
    }

    fn fresh_ages(board: &Board) -> AgeMap {
        AgeMap::new(board.dims())
    }

    #[test]
    fn block_is_a_still_life() {
        let start = board(&["....", ".##.", ".##.", "...."]);
        let (next, _) = LifeEngine::step(&start, &fresh_ages(&start)).unwrap();
        assert_eq!(next, start);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = board(&[".....", ".....", ".###.", ".....", "....."]);
        let vertical = board(&[".....", "..#..", "..#..", "..#..", "....."]);

        let (once, ages) = LifeEngine::step(&horizontal, &fresh_ages(&horizontal)).unwrap();
        assert_eq!(once, vertical);
        let (twice, _) = LifeEngine::step(&once, &ages).unwrap();
        assert_eq!(twice, horizontal);
    }

    #[test]
    fn corner_cell_does_not_wrap() {
        let start = board(&["#...", "....", "....", "...#"]);
        assert_eq!(LifeEngine::live_neighbors(&start, 0, 0), 0);
        assert_eq!(LifeEngine::live_neighbors(&start, 3, 3), 0);

        let (next, ages) = LifeEngine::step(&start, &fresh_ages(&start)).unwrap();
        assert_eq!(next.live_count(), 0);
        assert_eq!(ages.oldest(), 0);
    }

    #[test]
    fn edge_neighborhood_counts_only_on_grid_cells() {
        let full = board(&["###", "###", "###"]);
        assert_eq!(LifeEngine::live_neighbors(&full, 0, 0), 3);
        assert_eq!(LifeEngine::live_neighbors(&full, 0, 1), 5);
        assert_eq!(LifeEngine::live_neighbors(&full, 1, 1), 8);
    }

    #[test]
    fn no_births_across_opposite_edges() {
        // Three cells on the right edge would give (1, 0) three neighbors
        // only if the grid wrapped.
        let start = board(&["...#", "...#", "...#"]);
        let (next, _) = LifeEngine::step(&start, &fresh_ages(&start)).unwrap();
        assert!(!next.is_alive(1, 0));
        assert!(next.is_alive(1, 2));
        assert!(next.is_alive(1, 3));
    }

    #[test]
    fn block_ages_grow_by_one_per_step() {
        let mut current = board(&["....", ".##.", ".##.", "...."]);
        let mut ages = fresh_ages(&current);

        for expected in 1..=5 {
            let (next, next_ages) = LifeEngine::step(&current, &ages).unwrap();
            for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
                assert_eq!(next_ages.get(r, c), expected);
            }
            assert_eq!(next_ages.get(0, 0), 0);
            current = next;
            ages = next_ages;
        }
    }

    #[test]
    fn newborn_cells_start_at_age_one() {
        let horizontal = board(&["...", "###", "..."]);
        let mut ages = fresh_ages(&horizontal);
        for c in 0..3 {
            ages.set(1, c, 9);
        }

        let (next, next_ages) = LifeEngine::step(&horizontal, &ages).unwrap();
        assert!(next.is_alive(0, 1));
        assert_eq!(next_ages.get(0, 1), 1);
        assert_eq!(next_ages.get(2, 1), 1);
        // Center survives and keeps its streak.
        assert_eq!(next_ages.get(1, 1), 10);
    }

    #[test]
    fn dying_cells_reset_to_zero() {
        let lone = board(&["...", ".#.", "..."]);
        let mut ages = fresh_ages(&lone);
        ages.set(1, 1, 42);

        let (next, next_ages) = LifeEngine::step(&lone, &ages).unwrap();
        assert!(!next.is_alive(1, 1));
        assert_eq!(next_ages.get(1, 1), 0);
    }

    #[test]
    fn ages_saturate_instead_of_overflowing() {
        let block = board(&["##", "##"]);
        let ages = AgeMap::from_rows(vec![vec![u32::MAX; 2]; 2]).unwrap();
        let (_, next_ages) = LifeEngine::step(&block, &ages).unwrap();
        assert_eq!(next_ages.oldest(), u32::MAX);
    }

    #[test]
    fn stats_count_births_and_deaths() {
        let horizontal = board(&[".....", ".....", ".###.", ".....", "....."]);
        let outcome = LifeEngine::step_with_stats(&horizontal, &fresh_ages(&horizontal)).unwrap();
        assert_eq!(outcome.births, 2);
        assert_eq!(outcome.deaths, 2);
        assert_eq!(outcome.live_cells, 3);
        assert_eq!(outcome.oldest_age, 1);
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let start = board(&["..", ".."]);
        let ages = AgeMap::new(GridDimensions::new(3, 2).unwrap());
        assert!(matches!(
            LifeEngine::step(&start, &ages),
            Err(LifeError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn step_preserves_shape() {
        let start = board(&["#.#.#.#", ".#.#.#.", "#.#.#.#"]);
        let (next, ages) = LifeEngine::step(&start, &fresh_ages(&start)).unwrap();
        assert_eq!(next.dims(), start.dims());
        assert_eq!(ages.dims(), start.dims());
        assert!(ages.is_consistent_with(&next));
    }
}
