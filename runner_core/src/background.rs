//! Three-tile cyclic background scroller

use glam::Vec2;

/// Position and image of one background tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub pos: Vec2,
    pub image: String,
}

/// Scrolling scene made of three tiles laid out to the left of the lead tile
///
/// Only the lead tile is simulated. The other two are always placed one and
/// two tile widths behind it.
#[derive(Debug, Clone)]
pub struct Background {
    pub scene_x: f32,
    pub tile_width: f32,
    pub images: [String; 3],
}

impl Background {
    pub fn new(tile_width: f32, images: [String; 3]) -> Self {
        Self {
            scene_x: 0.0,
            tile_width,
            images,
        }
    }

    /// Move the scene by one tick of world velocity
    ///
    /// Returns true when the lead tile scrolled past the viewport and the
    /// scene wrapped around.
    pub fn scroll(&mut self, velocity_x: f32, viewport_width: f32) -> bool {
        self.scene_x += velocity_x;

        if self.scene_x + self.tile_width < viewport_width {
            self.scene_x = viewport_width;
            // tile1 <- tile3, tile2 <- tile1, tile3 <- tile2
            self.images.rotate_right(1);
            return true;
        }
        false
    }

    pub fn tile_x(&self, index: usize) -> f32 {
        self.scene_x - self.tile_width * index as f32
    }

    pub fn tiles(&self) -> [TileView; 3] {
        std::array::from_fn(|i| TileView {
            pos: Vec2::new(self.tile_x(i), 0.0),
            image: self.images[i].clone(),
        })
    }
}
