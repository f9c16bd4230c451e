//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * One DDA ray per screen column, drawn as a vertical sliver scaled by
//!   perpendicular distance into an owned **0xAARRGGBB** frame.
//! * Ceiling/floor bands first, wall columns on top, minimap overlay last.
//! * No per-frame state survives `end_frame` except the allocations.
//! ---------------------------------------------------------------------------

mod caster;
mod column;
mod frame;
mod minimap;
mod renderer;

pub use caster::{RayHit, WallFace, cast_column, cast_ray};
pub use frame::Frame;
pub use minimap::draw_minimap;
pub use renderer::Software;
