use crate::systems::life::LifeEngine;

use super::perf_timer::PerfTimer;
use super::perf_stats::StepStats;
use super::LifeController;

pub(super) fn step(world: &mut LifeController) {
    let timer = PerfTimer::start();
    let outcome = LifeEngine::advance(&world.board, &world.ages);
    let step_ms = timer.elapsed_ms();

    world.generation += 1;
    world.stats = StepStats::record(world.generation, &outcome, step_ms);
    world.board = outcome.board;
    world.ages = outcome.ages;
    world.render.refresh(&world.board, &world.ages, world.config.heatmap);
}

/// Step if running and the interval has elapsed. Returns whether a
/// generation was computed.
pub(super) fn tick(world: &mut LifeController, now_ms: f64) -> bool {
    if !world.ticker.poll(now_ms) {
        return false;
    }
    step(world);
    true
}
