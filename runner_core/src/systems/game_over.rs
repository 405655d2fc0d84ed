use crate::{Body, Chaser, Events, GameState, Runner, Sprite, Time};
use hecs::World;

/// End the game once the chaser's horizontal midpoint passes the runner's left edge
pub fn check_caught(world: &World, state: &mut GameState, events: &mut Events, time: &Time) {
    let runner_x = world
        .query::<(&Body, &Runner)>()
        .iter()
        .next()
        .map(|(_e, (body, _runner))| body.pos.x);
    let chaser_mid = world
        .query::<(&Body, &Chaser)>()
        .iter()
        .next()
        .map(|(_e, (body, _chaser))| body.pos.x + body.size.x / 2.0);

    if let (Some(runner_x), Some(chaser_mid)) = (runner_x, chaser_mid) {
        if chaser_mid > runner_x {
            state.end();
            events.caught = true;
            log::info!("runner caught at tick {}", time.tick);
        }
    }
}

/// Freeze every sprite animation
pub fn freeze_sprites(world: &mut World) {
    for (_entity, sprite) in world.query_mut::<&mut Sprite>() {
        sprite.stop();
    }
}
