mod camera;
mod grid;
mod texture;

pub use camera::Camera;

pub use grid::{MapError, MapGrid, MaterialId, OPEN, builtin_map};

pub use texture::{Palette, Rgba, Texture, TextureStore, UNKNOWN_MATERIAL, darken};
pub(crate) use texture::{channels, pack};
