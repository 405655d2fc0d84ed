use glam::Vec2;

/// Axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// True when `other` lies entirely inside `self`, edges inclusive
    pub fn contains_rect(&self, other: &Rect) -> bool {
        let (min, max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        min.x <= other_min.x
            && other_max.x <= max.x
            && min.y <= other_min.y
            && other_max.y <= max.y
    }
}

/// Body component - position, size and velocity of a visible entity
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Marker: body falls under gravity
#[derive(Debug, Clone, Copy, Default)]
pub struct Gravity;

/// Jump state, cleared whenever gravity grounds the body
#[derive(Debug, Clone, Copy, Default)]
pub struct Jumper {
    pub is_jumping: bool,
}

impl Jumper {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker: the player-controlled entity
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner;

/// Chaser component - horizontal speed recovers toward `base_speed`
#[derive(Debug, Clone, Copy)]
pub struct Chaser {
    pub base_speed: f32,
}

impl Chaser {
    pub fn new(base_speed: f32) -> Self {
        Self { base_speed }
    }
}

/// Collectible component
#[derive(Debug, Clone, Copy)]
pub struct Collectible {
    pub seq: u64, // Spawn order
}

/// Image shown for an entity, and whether its animation is frozen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub image: String,
    pub stopped: bool,
}

impl Sprite {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            stopped: false,
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
