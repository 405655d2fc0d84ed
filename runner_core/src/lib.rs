pub mod autopilot;
pub mod background;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use autopilot::*;
pub use background::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the runner simulation by one tick
///
/// Once the game is over this only raises the terminal label and freezes
/// sprites; nothing moves and no input is applied.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    state: &mut GameState,
    background: &mut Background,
    score: &mut Score,
    events: &mut Events,
    input: &InputLatch,
    dt: f32,
) {
    // Clear events at start of tick
    events.clear();

    if !state.is_running {
        // Presses after the catch are dropped
        input.take();
        state.game_over_shown = true;
        freeze_sprites(world);
        return;
    }

    time.advance(dt);
    log::trace!("tick {} dt={}", time.tick, dt);

    // 1. Apply a pending press from the input slot
    ingest_inputs(world, input, state, config);

    // 2. Runner stays centered, runner and chaser fall
    pin_runner(world, config);
    apply_gravity(world, time, config);
    recover_chaser_speed(world, time);

    // 3. Scroll the scene
    scroll_background(background, state, config, events);

    // 4. Spawn, move and collect collectibles
    spawn_collectibles(world, state, config, events);
    update_collectibles(world, config, score, events);

    // 5. Chaser catches runner
    check_caught(world, state, events, time);

    // 6. World speed burst decays
    recover_world_speed(state, time, config);
}

/// Helper to create the runner entity, grounded at the viewport center
pub fn create_runner(world: &mut World, config: &Config) -> hecs::Entity {
    let body = Body::new(
        Vec2::new(config.runner_x(), 0.0),
        config.runner_size,
        Vec2::ZERO,
    );
    world.spawn((
        body,
        Gravity,
        Jumper::new(),
        Runner,
        Sprite::new(config.runner_image.as_str()),
    ))
}

/// Helper to create the chaser entity at the origin, moving at base speed
pub fn create_chaser(world: &mut World, config: &Config) -> hecs::Entity {
    let body = Body::new(
        Vec2::ZERO,
        config.chaser_size,
        Vec2::new(config.chaser_base_speed, 0.0),
    );
    world.spawn((
        body,
        Gravity,
        Chaser::new(config.chaser_base_speed),
        Sprite::new(config.chaser_image.as_str()),
    ))
}

/// Helper to create a collectible entity
pub fn create_collectible(world: &mut World, seq: u64, pos: Vec2, size: Vec2) -> hecs::Entity {
    world.spawn((Body::new(pos, size, Vec2::ZERO), Collectible { seq }))
}
