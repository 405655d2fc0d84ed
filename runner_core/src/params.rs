/// Game tuning parameters for the runner
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport
    pub const VIEWPORT_WIDTH: f32 = 900.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    // Runner
    pub const RUNNER_WIDTH: f32 = 160.0;
    pub const RUNNER_HEIGHT: f32 = 160.0;
    pub const JUMP_IMPULSE: f32 = 5.0;

    // Chaser
    pub const CHASER_WIDTH: f32 = 100.0;
    pub const CHASER_HEIGHT: f32 = 100.0;
    pub const CHASER_BASE_SPEED: f32 = 2.0;
    pub const CHASER_SLOWDOWN_SPEED: f32 = -1.5;

    // Gravity (shared by runner and chaser)
    pub const GRAVITY: f32 = 10.0; // velocity lost per unit of dt
    pub const TERMINAL_FALL_SPEED: f32 = -10.0;

    // Collectibles
    pub const COLLECTIBLE_WIDTH: f32 = 40.0;
    pub const COLLECTIBLE_HEIGHT: f32 = 40.0;
    pub const COLLECTIBLE_SPAWN_Y: f32 = 80.0;
    pub const COLLECTIBLE_STEP: f32 = 10.0; // units per tick, not dt-scaled
    pub const COLLECTIBLE_SPAWN_INTERVAL: u32 = 50;
    pub const COLLECT_REWARD: u32 = 100;

    // World scroll
    pub const WORLD_DEFAULT_SPEED: f32 = -8.0;
    pub const WORLD_BURST: f32 = -3.0; // added to default speed on input
    pub const BACKGROUND_TILE_WIDTH: f32 = 1800.0; // Wider than the viewport so wraps are periodic

    // Images
    pub const RUNNER_IMAGE: &str = "cat.zip";
    pub const CHASER_IMAGE: &str = "dog.zip";
    pub const BACKGROUND_IMAGES: [&str; 3] =
        ["background_1.png", "background_2.png", "background_3.png"];

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp host frames to prevent large jumps
}
