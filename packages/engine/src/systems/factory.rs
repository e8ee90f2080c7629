//! GridFactory - initial boards for new games, resets and resizes
//!
//! Clustered seeding drops `num_clusters` anchors uniformly on the grid
//! and lights up to `cluster_size - 1` extra cells in a square around
//! each anchor. Attempts that land off the grid are skipped, and
//! clusters may overlap, so the live count is at most
//! `num_clusters * cluster_size`.
//!
//! Every board comes with an all-zero `AgeMap`; seeded cells start at
//! age 0 like any fresh cell.

use crate::core::grid::{AgeMap, Board, GridDimensions};
use crate::domain::cell::Cell;
use crate::domain::error::LifeError;

use super::rng::SeedRng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClusterSeeding {
    pub num_clusters: u32,
    pub cluster_size: u32,
}

impl ClusterSeeding {
    /// No clusters: an all-dead board.
    pub const NONE: ClusterSeeding = ClusterSeeding {
        num_clusters: 0,
        cluster_size: 0,
    };

    pub fn new(num_clusters: u32, cluster_size: u32) -> Self {
        Self { num_clusters, cluster_size }
    }

    pub fn is_blank(&self) -> bool {
        self.num_clusters == 0 || self.cluster_size == 0
    }

    /// Half-width of the square around an anchor: the smallest square
    /// that holds the whole cluster (1 up to size 9, 2 up to 25).
    pub fn radius(&self) -> u32 {
        let extra = u64::from(self.cluster_size.saturating_sub(1));
        let mut radius: u64 = 1;
        while (2 * radius + 1) * (2 * radius + 1) - 1 < extra {
            radius += 1;
        }
        radius as u32
    }

    /// `radius` capped so the square never reaches past the far edge from
    /// any anchor.
    pub fn radius_within(&self, dims: GridDimensions) -> u32 {
        self.radius().min(dims.rows().max(dims.cols()))
    }
}

pub struct GridFactory;

impl GridFactory {
    /// Board and ages for `rows x cols`, seeded from platform entropy.
    pub fn create(
        rows: u32,
        cols: u32,
        num_clusters: u32,
        cluster_size: u32,
    ) -> Result<(Board, AgeMap), LifeError> {
        let dims = GridDimensions::new(rows, cols)?;
        let mut rng = SeedRng::from_entropy();
        Ok(Self::create_seeded(
            dims,
            ClusterSeeding::new(num_clusters, cluster_size),
            &mut rng,
        ))
    }

    /// Deterministic for a given `rng` state.
    pub fn create_seeded(
        dims: GridDimensions,
        seeding: ClusterSeeding,
        rng: &mut SeedRng,
    ) -> (Board, AgeMap) {
        let mut board = Board::new(dims);
        if !seeding.is_blank() {
            for _ in 0..seeding.num_clusters {
                seed_cluster(&mut board, seeding, rng);
            }
        }
        (board, AgeMap::new(dims))
    }

    pub fn blank(dims: GridDimensions) -> (Board, AgeMap) {
        (Board::new(dims), AgeMap::new(dims))
    }
}

fn seed_cluster(board: &mut Board, seeding: ClusterSeeding, rng: &mut SeedRng) {
    let dims = board.dims();
    let anchor_row = rng.gen_index(dims.rows());
    let anchor_col = rng.gen_index(dims.cols());
    board.set(anchor_row, anchor_col, Cell::Alive);

    let radius = seeding.radius_within(dims);
    let mut dead_in_reach = dead_cells_around(board, anchor_row, anchor_col, radius);
    for _ in 1..seeding.cluster_size {
        // Once the clipped square is full, further attempts change nothing.
        if dead_in_reach == 0 {
            break;
        }
        let row = anchor_row as i64 + rng.gen_offset(radius);
        let col = anchor_col as i64 + rng.gen_offset(radius);
        if let Some(idx) = dims.checked_index(row, col) {
            let cell = &mut board.cells_mut()[idx];
            if !cell.is_alive() {
                *cell = Cell::Alive;
                dead_in_reach -= 1;
            }
        }
    }
}

fn dead_cells_around(board: &Board, row: u32, col: u32, radius: u32) -> u64 {
    let r = radius as i64;
    let (row, col) = (row as i64, col as i64);
    let rows = (row - r).max(0)..=(row + r).min(board.rows() as i64 - 1);
    let cols = (col - r).max(0)..=(col + r).min(board.cols() as i64 - 1);
    rows.flat_map(|r| cols.clone().map(move |c| (r, c)))
        .filter(|&(r, c)| !board.get(r as u32, c as u32).is_alive())
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(rows: u32, cols: u32) -> GridDimensions {
        GridDimensions::new(rows, cols).unwrap()
    }

    #[test]
    fn create_without_clusters_is_blank() {
        let (board, ages) = GridFactory::create(4, 7, 0, 0).unwrap();
        assert_eq!((board.rows(), board.cols()), (4, 7));
        assert_eq!((ages.rows(), ages.cols()), (4, 7));
        assert_eq!(board.live_count(), 0);
        assert_eq!(ages.oldest(), 0);
    }

    #[test]
    fn create_rejects_zero_dimensions() {
        assert_eq!(
            GridFactory::create(0, 5, 1, 1).err(),
            Some(LifeError::InvalidDimensions { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn seeded_boards_are_reproducible() {
        let seeding = ClusterSeeding::new(5, 3);
        let (a, _) = GridFactory::create_seeded(dims(20, 20), seeding, &mut SeedRng::new(11));
        let (b, _) = GridFactory::create_seeded(dims(20, 20), seeding, &mut SeedRng::new(11));
        assert_eq!(a, b);
    }

    #[test]
    fn live_count_is_bounded_by_cluster_budget() {
        let seeding = ClusterSeeding::new(5, 3);
        for seed in 0..50 {
            let (board, ages) =
                GridFactory::create_seeded(dims(20, 20), seeding, &mut SeedRng::new(seed));
            let live = board.live_count();
            assert!(live >= 1 && live <= 15, "seed {seed}: {live} live cells");
            assert_eq!(ages.oldest(), 0);
        }
    }

    #[test]
    fn single_cell_clusters_light_only_anchors() {
        let seeding = ClusterSeeding::new(1, 1);
        let (board, _) = GridFactory::create_seeded(dims(8, 8), seeding, &mut SeedRng::new(3));
        assert_eq!(board.live_count(), 1);
    }

    #[test]
    fn zero_cluster_size_places_nothing() {
        let seeding = ClusterSeeding::new(4, 0);
        let (board, _) = GridFactory::create_seeded(dims(8, 8), seeding, &mut SeedRng::new(3));
        assert_eq!(board.live_count(), 0);
    }

    #[test]
    fn clusters_are_clipped_on_a_single_cell_grid() {
        let seeding = ClusterSeeding::new(3, 9);
        let (board, ages) = GridFactory::create_seeded(dims(1, 1), seeding, &mut SeedRng::new(5));
        assert_eq!(board.live_count(), 1);
        assert_eq!(ages.as_slice(), &[0]);
    }

    #[test]
    fn radius_grows_with_cluster_size() {
        assert_eq!(ClusterSeeding::new(1, 3).radius(), 1);
        assert_eq!(ClusterSeeding::new(1, 9).radius(), 1);
        assert_eq!(ClusterSeeding::new(1, 10).radius(), 2);
        assert_eq!(ClusterSeeding::new(1, 25).radius(), 2);
        assert_eq!(ClusterSeeding::new(1, 26).radius(), 3);
    }

    #[test]
    fn radius_handles_the_largest_cluster_size() {
        let seeding = ClusterSeeding::new(1, u32::MAX);
        assert_eq!(seeding.radius(), 32768);
        assert_eq!(seeding.radius_within(dims(10, 30)), 30);
    }

    #[test]
    fn huge_cluster_fills_a_small_grid() {
        let (board, ages) = GridFactory::create(10, 10, 1, u32::MAX).unwrap();
        assert_eq!(board.live_count(), 100);
        assert_eq!(ages.oldest(), 0);
    }

    #[test]
    fn cluster_cells_stay_near_their_anchor() {
        for size in [2, 5, 9, 20] {
            let seeding = ClusterSeeding::new(1, size);
            let r = seeding.radius();
            for seed in 0..20 {
                let (board, _) =
                    GridFactory::create_seeded(dims(64, 64), seeding, &mut SeedRng::new(seed));
                let live: Vec<(u32, u32)> = (0..board.rows())
                    .flat_map(|row| (0..board.cols()).map(move |col| (row, col)))
                    .filter(|&(row, col)| board.is_alive(row, col))
                    .collect();
                let row_span = live.iter().map(|p| p.0).max().unwrap() - live.iter().map(|p| p.0).min().unwrap();
                let col_span = live.iter().map(|p| p.1).max().unwrap() - live.iter().map(|p| p.1).min().unwrap();
                assert!(
                    row_span <= 2 * r && col_span <= 2 * r,
                    "size {size} seed {seed}: spans {row_span}x{col_span} exceed radius {r}"
                );
            }
        }
    }
}
