use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,   // Delta time for this step
    pub now: f32,  // Total elapsed time
    pub tick: u64, // Ticks simulated so far
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now, tick: 0 }
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
        self.tick += 1;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(Params::FIXED_DT, 0.0)
    }
}

/// Points earned from collectibles
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}

/// Session-wide state that is not attached to any entity
#[derive(Debug, Clone, Copy)]
pub struct GameState {
    pub is_running: bool,     // Goes false once, when the chaser catches the runner
    pub game_over_shown: bool, // Terminal label raised on the first tick after the catch
    pub world_velocity_x: f32,
    pub spawn_counter: u32, // Ticks since last collectible spawn
    pub next_seq: u64,      // Sequence number for the next collectible
}

impl GameState {
    pub fn new(world_velocity_x: f32) -> Self {
        Self {
            is_running: true,
            game_over_shown: false,
            world_velocity_x,
            spawn_counter: 0,
            next_seq: 0,
        }
    }

    pub fn end(&mut self) {
        self.is_running = false;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub spawned: bool,
    pub collected: u32,
    pub despawned: u32,
    pub background_wrapped: bool,
    pub caught: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.spawned = false;
        self.collected = 0;
        self.despawned = 0;
        self.background_wrapped = false;
        self.caught = false;
    }
}

/// Single-slot pending input shared with an input thread
///
/// Presses are idempotent triggers: any number of presses between two
/// ticks is consumed as one.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pending: Arc<AtomicBool>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self) {
        self.pending.store(true, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Consume the pending press, if any
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

/// Converts variable host frame times into whole fixed ticks
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestep {
    pub fixed_dt: f32,
    pub max_dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// # Panics
    ///
    /// Panics unless `fixed_dt` is positive and finite.
    pub fn new(fixed_dt: f32, max_dt: f32) -> Self {
        assert!(
            fixed_dt.is_finite() && fixed_dt > 0.0,
            "fixed timestep must be positive, got {fixed_dt}"
        );
        Self {
            fixed_dt,
            max_dt,
            accumulator: 0.0,
        }
    }

    /// Add a host frame and return how many ticks are now due
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // Clamp dt to prevent large jumps; NaN or infinite frames count as zero
        if frame_dt.is_finite() {
            self.accumulator += frame_dt.clamp(0.0, self.max_dt);
        }

        let mut ticks = 0;
        while self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            ticks += 1;
        }
        ticks
    }

    pub fn remainder(&self) -> f32 {
        self.accumulator
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(Params::FIXED_DT, Params::MAX_DT)
    }
}
