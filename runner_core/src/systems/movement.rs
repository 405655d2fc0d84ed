use crate::{Body, Chaser, Config, Gravity, Jumper, Runner, Time};
use hecs::World;

/// Integrate one tick of motion and apply gravity
///
/// Position advances by the raw velocity (not scaled by dt); only the
/// gravity acceleration is dt-scaled. Returns true when the body ends the
/// tick grounded.
pub fn move_with_gravity(body: &mut Body, dt: f32, config: &Config) -> bool {
    body.pos += body.vel;

    if body.vel.y > config.terminal_fall_speed && body.pos.y > 0.0 {
        body.vel.y -= dt * config.gravity;
        false
    } else {
        body.vel.y = 0.0;
        true
    }
}

/// Keep the runner horizontally centered in the viewport
pub fn pin_runner(world: &mut World, config: &Config) {
    for (_entity, (body, _runner)) in world.query_mut::<(&mut Body, &Runner)>() {
        body.pos.x = config.runner_x();
    }
}

/// Move every gravity-bound body, clearing jump state on ground contact
pub fn apply_gravity(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (body, _gravity, jumper)) in
        world.query_mut::<(&mut Body, &Gravity, Option<&mut Jumper>)>()
    {
        let grounded = move_with_gravity(body, time.dt, config);
        if let (true, Some(jumper)) = (grounded, jumper) {
            jumper.is_jumping = false;
        }
    }
}

/// Chaser horizontal speed recovers linearly toward its base speed
pub fn recover_chaser_speed(world: &mut World, time: &Time) {
    for (_entity, (body, chaser)) in world.query_mut::<(&mut Body, &Chaser)>() {
        if body.vel.x < chaser.base_speed {
            body.vel.x += time.dt;
        } else {
            body.vel.x = chaser.base_speed;
        }
    }
}
