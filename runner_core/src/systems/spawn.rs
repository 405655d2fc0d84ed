use crate::{create_collectible, Config, Events, GameState};
use glam::Vec2;
use hecs::World;

/// Count the tick and spawn a collectible at the right edge once the
/// counter exceeds the spawn interval
pub fn spawn_collectibles(
    world: &mut World,
    state: &mut GameState,
    config: &Config,
    events: &mut Events,
) {
    state.spawn_counter += 1;
    if state.spawn_counter <= config.collectible_spawn_interval {
        return;
    }
    state.spawn_counter = 0;

    let seq = state.next_seq;
    state.next_seq += 1;

    let pos = Vec2::new(config.viewport_width, config.collectible_spawn_y);
    create_collectible(world, seq, pos, config.collectible_size);
    events.spawned = true;

    log::debug!("spawned collectible {seq} at ({}, {})", pos.x, pos.y);
}
