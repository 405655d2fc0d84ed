//! Heuristic player for demos and long-running tests

use crate::GameSimulation;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Tap once the chaser's midpoint is this close to the runner's left edge
    pub danger_distance: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            danger_distance: 120.0,
        }
    }
}

impl Autopilot {
    pub fn new(danger_distance: f32) -> Self {
        Self { danger_distance }
    }

    /// Strategy:
    /// 1. Never tap while airborne, the press would only knock the chaser back.
    /// 2. Tap when the chaser closes within `danger_distance`.
    pub fn should_tap(&self, sim: &GameSimulation) -> bool {
        if !sim.is_running() || sim.runner_is_jumping() {
            return false;
        }

        match (sim.runner_body(), sim.chaser_body()) {
            (Some(runner), Some(chaser)) => {
                let gap = runner.pos.x - (chaser.pos.x + chaser.size.x / 2.0);
                gap < self.danger_distance
            }
            _ => false,
        }
    }

    /// Tap if needed, then advance one tick
    pub fn drive(&self, sim: &mut GameSimulation, dt: f32) {
        if self.should_tap(sim) {
            sim.on_primary_input();
        }
        sim.update(dt);
    }
}
