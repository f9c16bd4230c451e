//! Wolfenstein-style grid raycaster.
//!
//! The library owns everything that can run without a window: the map
//! grid, the texture store, the per-column DDA ray caster and the CPU
//! column renderer. Binaries supply input and a surface to blit into.

pub mod assets;
pub mod renderer;
pub mod sim;
pub mod world;
