use std::f32::consts::TAU;

use glam::Vec2;

use crate::world::MapGrid;

/// The player's pose, owned by the simulation step.
///
/// The renderer only ever sees a per-frame `Camera` copy of it; every
/// mutation funnels through the validated methods here, so the pose can
/// never name a wall cell or a spot outside the grid (given an open
/// spawn).
#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub yaw: f32,
    spawn_pos: Vec2,
    spawn_yaw: f32,
}

impl Player {
    /// Place the player at `pos` facing `yaw`; the pose is also
    /// remembered as the reset target.
    pub fn spawn(pos: Vec2, yaw: f32) -> Self {
        Self {
            pos,
            yaw,
            spawn_pos: pos,
            spawn_yaw: yaw,
        }
    }

    /// Unit vector the player is facing along.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        let (s, c) = self.yaw.sin_cos();
        Vec2::new(c, s)
    }

    /// Commit `dest` if its cell lies inside the grid and is open;
    /// walls and the void reject the move silently.
    pub fn try_move(&mut self, grid: &MapGrid, dest: Vec2) -> bool {
        let moved = grid.is_open(dest.x.floor() as i32, dest.y.floor() as i32);
        if moved {
            self.pos = dest;
        }
        moved
    }

    /// Turn by `delta` radians, wrapped into `[0, TAU)`. Unconditional –
    /// rotation needs no collision check.
    pub fn turn(&mut self, delta: f32) {
        self.yaw = (self.yaw + delta).rem_euclid(TAU);
    }

    /// Back to the exact spawn pose.
    pub fn reset(&mut self) {
        self.pos = self.spawn_pos;
        self.yaw = self.spawn_yaw;
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
