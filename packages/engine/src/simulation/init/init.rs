use crate::domain::config::SimulationConfig;
use crate::domain::error::LifeError;
use crate::logging;
use crate::systems::factory::GridFactory;
use crate::systems::rng::SeedRng;

use super::perf_stats::StepStats;
use super::render_extract::RenderBuffers;
use super::ticker::Ticker;
use super::LifeController;

pub(super) fn create_controller(config: SimulationConfig) -> Result<LifeController, LifeError> {
    config.validate()?;
    let dims = config.dimensions()?;

    let mut rng = match config.seed {
        Some(seed) => SeedRng::new(seed),
        None => SeedRng::from_entropy(),
    };
    let (board, ages) = GridFactory::create_seeded(dims, config.seeding(), &mut rng);

    let mut controller = LifeController {
        dims,
        ticker: Ticker::new(config.tick_interval_ms),
        render: RenderBuffers::new(dims.size()),
        stats: StepStats::default(),
        generation: 0,
        board,
        ages,
        rng,
        config,
    };
    controller.refresh_view();

    logging::info(&format!(
        "life: {}x{} board, {} live cells (seed {})",
        dims.rows(),
        dims.cols(),
        controller.live_count(),
        controller.rng.seed()
    ));
    Ok(controller)
}
