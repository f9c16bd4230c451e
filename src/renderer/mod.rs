//! Rendering abstraction layer.
//!
//! *The library never touches a window.* A backend fills an internal
//! pixel buffer and **loans** it to a caller closure once per frame;
//! binaries forward the loan to their window, tests read the pixels
//! directly. Everything a draw pass needs arrives as arguments – map,
//! textures, camera, options – so the whole pipeline runs headless.

use crate::world::{Camera, MapGrid, TextureStore};

pub use crate::world::Rgba;

/// Knobs the input layer may flip at runtime.
#[derive(Clone, Copy, Debug)]
pub struct ViewOptions {
    /// Bilinear texture filtering; nearest-neighbour when off.
    pub bilinear: bool,
    /// Draw the diagnostic minimap overlay.
    pub minimap: bool,
    pub ceiling: Rgba,
    pub floor: Rgba,
    /// Square minimap footprint in pixels.
    pub minimap_size: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            bilinear: false,
            minimap: true,
            ceiling: 0xFF_87CEFA, // light sky blue
            floor: 0xFF_2F4F4F,   // dark slate gray
            minimap_size: 160,
        }
    }
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure, so
/// back-ends never know (or care) where the pixels end up.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution.
    /// Called every frame; reallocates only when the size changed.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Cast and draw the whole scene into the internal buffer.
    fn draw_scene(
        &mut self,
        grid: &MapGrid,
        store: &TextureStore,
        camera: &Camera,
        opts: &ViewOptions,
    );

    /// Finish the frame and **loan** the buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` runs exactly once per frame.
    /// * Window callers pass `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

pub mod software;
pub use software::{Frame, RayHit, Software, WallFace, cast_column, cast_ray};
