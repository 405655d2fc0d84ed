use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::Config;

/// Apply one primary input (tap, click or key press)
///
/// The runner jumps if grounded, the chaser is knocked back and the world
/// scroll bursts. Ignored once the game is over.
pub fn apply_primary_input(world: &mut World, state: &mut GameState, config: &Config) {
    if !state.is_running {
        return;
    }

    for (_entity, (body, jumper, _runner)) in
        world.query_mut::<(&mut Body, &mut Jumper, &Runner)>()
    {
        if !jumper.is_jumping {
            jumper.is_jumping = true;
            body.vel.y = config.jump_impulse;
        }
    }

    for (_entity, (body, _chaser)) in world.query_mut::<(&mut Body, &Chaser)>() {
        body.vel.x = config.chaser_slowdown_speed;
    }

    state.world_velocity_x = config.world_burst_speed();
}

/// Drain the pending input slot before simulating the tick
pub fn ingest_inputs(
    world: &mut World,
    latch: &InputLatch,
    state: &mut GameState,
    config: &Config,
) {
    if latch.take() {
        apply_primary_input(world, state, config);
    }
}
