pub mod collectibles;
pub mod game_over;
pub mod input;
pub mod movement;
pub mod scroll;
pub mod spawn;

pub use collectibles::*;
pub use game_over::*;
pub use input::*;
pub use movement::*;
pub use scroll::*;
pub use spawn::*;
