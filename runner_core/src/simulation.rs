//! Owning facade over the runner simulation
//!
//! Hosts create one [`GameSimulation`], call [`GameSimulation::update`] once
//! per tick and [`GameSimulation::on_primary_input`] between ticks, then read
//! a [`Snapshot`] to draw the frame.

use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::apply_primary_input;
use crate::{
    create_chaser, create_runner, step, Background, Body, Collectible, Config, Events, GameState,
    InputLatch, Jumper, Rect, Score, Sprite, TileView, Time,
};

pub const GAME_OVER_LABEL: &str = "GAME OVER";

/// Position, size and image state of a runner or chaser
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteView {
    pub pos: Vec2,
    pub size: Vec2,
    pub image: String,
    pub stopped: bool,
}

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub runner: Option<SpriteView>,
    pub chaser: Option<SpriteView>,
    pub collectibles: Vec<Rect>, // Spawn order
    pub tiles: [TileView; 3],
    pub score: u32,
    pub is_running: bool,
    pub game_over_label: Option<&'static str>,
}

pub struct GameSimulation {
    world: World,
    time: Time,
    config: Config,
    state: GameState,
    background: Background,
    score: Score,
    events: Events,
    input: InputLatch,
    runner: Entity,
    chaser: Entity,
}

impl GameSimulation {
    /// Start a game with the given configuration
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`Config::validate`].
    pub fn new(config: Config) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid runner config: {err}");
        }

        let mut world = World::new();
        let runner = create_runner(&mut world, &config);
        let chaser = create_chaser(&mut world, &config);
        let background = Background::new(config.tile_width, config.background_images.clone());

        log::info!(
            "starting game in {}x{} viewport",
            config.viewport_width,
            config.viewport_height
        );

        Self {
            world,
            time: Time::default(),
            state: GameState::new(config.world_default_speed),
            background,
            score: Score::new(),
            events: Events::new(),
            input: InputLatch::new(),
            runner,
            chaser,
            config,
        }
    }

    /// Start a game with default tuning in a viewport of the given size
    pub fn initialize(viewport_width: f32, viewport_height: f32) -> Self {
        Self::new(Config::with_viewport(viewport_width, viewport_height))
    }

    /// Throw away the current game and start over with the same config
    ///
    /// Input latches handed out earlier stay connected.
    pub fn restart(&mut self) {
        let input = self.input.clone();
        input.take();
        *self = Self::new(self.config.clone());
        self.input = input;
    }

    /// Advance one tick
    pub fn update(&mut self, dt: f32) {
        let was_running = self.state.is_running;

        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.state,
            &mut self.background,
            &mut self.score,
            &mut self.events,
            &self.input,
            dt,
        );

        if was_running && !self.state.is_running {
            log::info!(
                "game over after {} ticks, final score {}",
                self.time.tick,
                self.score.points
            );
        }
    }

    /// Player tap, click or key press
    pub fn on_primary_input(&mut self) {
        apply_primary_input(&mut self.world, &mut self.state, &self.config);
    }

    /// Handle for delivering presses from another thread
    ///
    /// A press is applied at the start of the next [`update`](Self::update).
    pub fn input_latch(&self) -> InputLatch {
        self.input.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn score(&self) -> u32 {
        self.score.points
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn world_velocity_x(&self) -> f32 {
        self.state.world_velocity_x
    }

    pub fn runner_body(&self) -> Option<Body> {
        self.body(self.runner)
    }

    pub fn chaser_body(&self) -> Option<Body> {
        self.body(self.chaser)
    }

    pub fn runner_is_jumping(&self) -> bool {
        self.world
            .get::<&Jumper>(self.runner)
            .map(|jumper| jumper.is_jumping)
            .unwrap_or(false)
    }

    pub fn set_runner_position(&mut self, pos: Vec2) {
        self.with_body(self.runner, |body| body.pos = pos);
    }

    pub fn set_runner_velocity(&mut self, vel: Vec2) {
        self.with_body(self.runner, |body| body.vel = vel);
    }

    pub fn set_chaser_position(&mut self, pos: Vec2) {
        self.with_body(self.chaser, |body| body.pos = pos);
    }

    pub fn set_chaser_velocity(&mut self, vel: Vec2) {
        self.with_body(self.chaser, |body| body.vel = vel);
    }

    /// Swap the image shown for the chaser
    pub fn set_chaser_image(&mut self, image: impl Into<String>) {
        if let Ok(mut sprite) = self.world.get::<&mut Sprite>(self.chaser) {
            sprite.image = image.into();
        }
    }

    /// Current collectibles in spawn order
    pub fn collectibles(&self) -> Vec<Rect> {
        let mut collectibles: Vec<(u64, Rect)> = self
            .world
            .query::<(&Body, &Collectible)>()
            .iter()
            .map(|(_e, (body, c))| (c.seq, body.rect()))
            .collect();
        collectibles.sort_by_key(|(seq, _rect)| *seq);
        collectibles.into_iter().map(|(_seq, rect)| rect).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            runner: self.sprite_view(self.runner),
            chaser: self.sprite_view(self.chaser),
            collectibles: self.collectibles(),
            tiles: self.background.tiles(),
            score: self.score.points,
            is_running: self.state.is_running,
            game_over_label: self.state.game_over_shown.then_some(GAME_OVER_LABEL),
        }
    }

    fn body(&self, entity: Entity) -> Option<Body> {
        self.world.get::<&Body>(entity).ok().map(|body| *body)
    }

    fn with_body(&mut self, entity: Entity, f: impl FnOnce(&mut Body)) {
        if let Ok(mut body) = self.world.get::<&mut Body>(entity) {
            f(&mut *body);
        }
    }

    fn sprite_view(&self, entity: Entity) -> Option<SpriteView> {
        let body = self.body(entity)?;
        let sprite = self.world.get::<&Sprite>(entity).ok()?;
        Some(SpriteView {
            pos: body.pos,
            size: body.size,
            image: sprite.image.clone(),
            stopped: sprite.stopped,
        })
    }
}

impl Default for GameSimulation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
