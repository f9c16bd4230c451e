use std::f32::consts::PI;

use crate::renderer::ViewOptions;
use crate::sim::Player;
use crate::world::MapGrid;

/// Grid units travelled per move command.
pub const MOVE_STEP: f32 = 0.08;

/// Radians turned per rotate command (5°).
pub const TURN_STEP: f32 = 5.0 * PI / 180.0;

/// One frame's worth of player commands, filled by the window loop.
///
/// Key bindings stay in the binaries; the simulation only sees these
/// abstract fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputCmd {
    /// +1 forward, −1 backward (scaled by [`MOVE_STEP`]).
    pub forward: f32,
    /// +1 turns right (clockwise on the minimap), −1 left.
    pub turn: f32,
    /// Snap back to the spawn pose.
    pub reset: bool,
    /// Flip bilinear texture filtering.
    pub toggle_filter: bool,
}

/// Apply one frame of input.
///
/// Rotation is unconditional; translation is validate-then-commit
/// against the grid (a blocked step is a silent no-op); reset overrides
/// movement for the frame.
pub fn step(cmd: &InputCmd, player: &mut Player, grid: &MapGrid, view: &mut ViewOptions) {
    if cmd.toggle_filter {
        view.bilinear = !view.bilinear;
    }
    if cmd.reset {
        player.reset();
        return;
    }
    if cmd.turn != 0.0 {
        player.turn(cmd.turn * TURN_STEP);
    }
    if cmd.forward != 0.0 {
        let dest = player.pos + player.forward() * (cmd.forward * MOVE_STEP);
        player.try_move(grid, dest);
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
