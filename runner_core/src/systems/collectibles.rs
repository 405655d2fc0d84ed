use crate::{Body, Collectible, Config, Events, Runner, Score};
use hecs::World;

/// Scroll collectibles left, despawning those off-screen or collected
///
/// Collectibles are visited in spawn order. A collectible is collected only
/// when its whole box lies inside the runner's box; the off-screen check
/// runs first, so a collectible is never both despawned and scored.
pub fn update_collectibles(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    let runner_rect = world
        .query::<(&Body, &Runner)>()
        .iter()
        .next()
        .map(|(_e, (body, _runner))| body.rect());

    // Deterministic: visit in spawn order
    let mut collectibles: Vec<(hecs::Entity, u64)> = world
        .query::<&Collectible>()
        .iter()
        .map(|(entity, c)| (entity, c.seq))
        .collect();
    collectibles.sort_by_key(|(_e, seq)| *seq);

    let mut to_remove = Vec::new();

    for (entity, seq) in collectibles {
        let Ok(mut body) = world.get::<&mut Body>(entity) else {
            continue;
        };
        body.pos.x -= config.collectible_step;

        if body.pos.x + body.size.x < 0.0 {
            events.despawned += 1;
            log::debug!("collectible {seq} scrolled off-screen");
            to_remove.push(entity);
            continue;
        }

        if runner_rect.is_some_and(|runner| runner.contains_rect(&body.rect())) {
            score.award(config.collect_reward);
            events.collected += 1;
            log::debug!("collectible {seq} collected, score {}", score.points);
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}
