use crate::domain::error::LifeError;

use super::LifeController;

pub(super) fn set_heatmap(world: &mut LifeController, enabled: bool) {
    if world.config.heatmap != enabled {
        world.config.heatmap = enabled;
        world.refresh_view();
    }
}

pub(super) fn get_heatmap(world: &LifeController) -> bool {
    world.config.heatmap
}

pub(super) fn set_tick_interval(world: &mut LifeController, interval_ms: u32) -> Result<(), LifeError> {
    if interval_ms == 0 {
        return Err(LifeError::InvalidConfig(
            "tick_interval_ms must be positive".to_string(),
        ));
    }
    world.config.tick_interval_ms = interval_ms;
    world.ticker.set_interval_ms(interval_ms);
    Ok(())
}

pub(super) fn get_tick_interval(world: &LifeController) -> u32 {
    world.ticker.interval_ms()
}

pub(super) fn set_clusters(world: &mut LifeController, num_clusters: u32, cluster_size: u32) {
    world.config.num_clusters = num_clusters;
    world.config.cluster_size = cluster_size;
}
