use crate::core::grid::GridDimensions;
use crate::domain::error::LifeError;
use crate::domain::patterns;
use crate::logging;
use crate::systems::factory::GridFactory;

use super::LifeController;

pub(super) fn play(world: &mut LifeController) -> bool {
    let started = world.ticker.arm();
    if started {
        logging::info(&format!("life: play at generation {}", world.generation));
    }
    started
}

pub(super) fn pause(world: &mut LifeController) -> bool {
    let stopped = world.ticker.disarm();
    if stopped {
        logging::info(&format!("life: pause at generation {}", world.generation));
    }
    stopped
}

/// Ages are left alone: a cell toggled alive keeps age 0 until a step
/// sees it survive.
pub(super) fn toggle_cell(world: &mut LifeController, row: u32, col: u32) -> bool {
    if !world.board.toggle(row, col) {
        return false;
    }
    world.refresh_view();
    true
}

/// Stop, reseed with the configured clusters and restart the count.
pub(super) fn reset(world: &mut LifeController) {
    world.ticker.disarm();
    let (board, ages) = GridFactory::create_seeded(world.dims, world.config.seeding(), &mut world.rng);
    world.replace_snapshot(board, ages);
    logging::info(&format!(
        "life: reset {}x{} board, {} live cells",
        world.dims.rows(),
        world.dims.cols(),
        world.live_count()
    ));
}

/// Stop and start over on a blank board of the new size.
pub(super) fn resize(world: &mut LifeController, rows: u32, cols: u32) -> Result<(), LifeError> {
    let dims = match GridDimensions::new(rows, cols) {
        Ok(dims) => dims,
        Err(e) => {
            logging::warn(&format!("life: resize rejected: {e}"));
            return Err(e);
        }
    };

    world.ticker.disarm();
    world.dims = dims;
    world.config.rows = rows;
    world.config.cols = cols;
    let (board, ages) = GridFactory::blank(dims);
    world.replace_snapshot(board, ages);
    logging::info(&format!("life: resized to {rows}x{cols}"));
    Ok(())
}

/// Stop and show a preset centered on an otherwise blank board.
pub(super) fn apply_pattern(world: &mut LifeController, name: &str) -> Result<(), LifeError> {
    let pattern = patterns::find(name)?;

    world.ticker.disarm();
    let (mut board, ages) = GridFactory::blank(world.dims);
    pattern.stamp(&mut board);
    world.replace_snapshot(board, ages);
    Ok(())
}
