use crate::params::Params;
use glam::Vec2;
use thiserror::Error;

/// Reasons a [`Config`] cannot start a game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("{entity} size must be positive, got {width}x{height}")]
    InvalidSize {
        entity: &'static str,
        width: f32,
        height: f32,
    },
    #[error("background tile width must be positive, got {0}")]
    InvalidTileWidth(f32),
    #[error("collectible spawn interval must be at least one tick")]
    ZeroSpawnInterval,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub runner_size: Vec2,
    pub chaser_size: Vec2,
    pub collectible_size: Vec2,
    pub jump_impulse: f32,
    pub gravity: f32,
    pub terminal_fall_speed: f32,
    pub chaser_base_speed: f32,
    pub chaser_slowdown_speed: f32,
    pub collectible_spawn_y: f32,
    pub collectible_step: f32,
    pub collectible_spawn_interval: u32,
    pub collect_reward: u32,
    pub world_default_speed: f32,
    pub world_burst: f32,
    pub tile_width: f32,
    pub runner_image: String,
    pub chaser_image: String,
    pub background_images: [String; 3],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: Params::VIEWPORT_WIDTH,
            viewport_height: Params::VIEWPORT_HEIGHT,
            runner_size: Vec2::new(Params::RUNNER_WIDTH, Params::RUNNER_HEIGHT),
            chaser_size: Vec2::new(Params::CHASER_WIDTH, Params::CHASER_HEIGHT),
            collectible_size: Vec2::new(Params::COLLECTIBLE_WIDTH, Params::COLLECTIBLE_HEIGHT),
            jump_impulse: Params::JUMP_IMPULSE,
            gravity: Params::GRAVITY,
            terminal_fall_speed: Params::TERMINAL_FALL_SPEED,
            chaser_base_speed: Params::CHASER_BASE_SPEED,
            chaser_slowdown_speed: Params::CHASER_SLOWDOWN_SPEED,
            collectible_spawn_y: Params::COLLECTIBLE_SPAWN_Y,
            collectible_step: Params::COLLECTIBLE_STEP,
            collectible_spawn_interval: Params::COLLECTIBLE_SPAWN_INTERVAL,
            collect_reward: Params::COLLECT_REWARD,
            world_default_speed: Params::WORLD_DEFAULT_SPEED,
            world_burst: Params::WORLD_BURST,
            tile_width: Params::BACKGROUND_TILE_WIDTH,
            runner_image: Params::RUNNER_IMAGE.to_string(),
            chaser_image: Params::CHASER_IMAGE.to_string(),
            background_images: Params::BACKGROUND_IMAGES.map(String::from),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config for a viewport of the given size
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    /// Runner X is pinned to the viewport center
    pub fn runner_x(&self) -> f32 {
        self.viewport_width / 2.0
    }

    /// World speed while a burst is active
    pub fn world_burst_speed(&self) -> f32 {
        self.world_default_speed + self.world_burst
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        for (entity, size) in [
            ("runner", self.runner_size),
            ("chaser", self.chaser_size),
            ("collectible", self.collectible_size),
        ] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(ConfigError::InvalidSize {
                    entity,
                    width: size.x,
                    height: size.y,
                });
            }
        }
        if !(self.tile_width > 0.0) {
            return Err(ConfigError::InvalidTileWidth(self.tile_width));
        }
        if self.collectible_spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        Ok(())
    }
}
