use glam::Vec2;

use crate::world::{Camera, MapGrid, MaterialId, OPEN};

/// Side distance assigned to an axis the ray never crosses, so the DDA
/// comparison can never pick that axis.
const FAR: f32 = 1e30;

/// Which family of grid lines the ray crossed last.
///
/// Crossing a vertical line exposes an east/west wall face; crossing a
/// horizontal line exposes a north/south face, which draws darkened so
/// perpendicular faces stay distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallFace {
    EastWest,
    NorthSouth,
}

impl WallFace {
    /// Faces on the secondary axis get the flat directional darken.
    #[inline]
    pub fn shaded(self) -> bool {
        matches!(self, WallFace::NorthSouth)
    }
}

/// Everything one column needs to draw its wall sliver.
/// Born and discarded within a single frame.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// Distance along the camera's forward axis – **not** the ray length
    /// (see [`cast_ray`]).
    pub perp_dist: f32,
    /// World-space point where the ray met the wall.
    pub point: Vec2,
    pub material: MaterialId,
    pub face: WallFace,
    /// Fractional offset along the struck face in `0..1`, mirrored when
    /// the ray approaches from the positive side so texture orientation
    /// follows the wall's facing direction.
    pub wall_u: f32,
}

/// Cast the ray for screen column `x` of a `screen_w`-wide viewport.
#[inline]
pub fn cast_column(grid: &MapGrid, camera: &Camera, x: usize, screen_w: usize) -> Option<RayHit> {
    cast_ray(grid, camera.pos, camera.column_ray(x, screen_w))
}

/// Walk `ray` from `origin` across the grid, one line crossing at a
/// time, until it enters a wall cell (`Some`) or leaves the table
/// (`None` – a map without an enclosing border is an authoring mistake,
/// not a reason to spin forever).
///
/// `perp_dist` is the crossing parameter `t` of `origin + t·ray`. For
/// the unnormalized column rays from [`Camera::column_ray`] (forward
/// component 1) that *is* the camera-perpendicular distance; for a unit
/// `ray` it is the Euclidean length.
pub fn cast_ray(grid: &MapGrid, origin: Vec2, ray: Vec2) -> Option<RayHit> {
    let mut map_x = origin.x.floor() as i32;
    let mut map_y = origin.y.floor() as i32;

    let delta_x = if ray.x == 0.0 { FAR } else { (1.0 / ray.x).abs() };
    let delta_y = if ray.y == 0.0 { FAR } else { (1.0 / ray.y).abs() };

    let (step_x, mut side_x) = if ray.x < 0.0 {
        (-1, (origin.x - map_x as f32) * delta_x)
    } else {
        (1, (map_x as f32 + 1.0 - origin.x) * delta_x)
    };
    let (step_y, mut side_y) = if ray.y < 0.0 {
        (-1, (origin.y - map_y as f32) * delta_y)
    } else {
        (1, (map_y as f32 + 1.0 - origin.y) * delta_y)
    };

    loop {
        let face = if side_x < side_y {
            side_x += delta_x;
            map_x += step_x;
            WallFace::EastWest
        } else {
            side_y += delta_y;
            map_y += step_y;
            WallFace::NorthSouth
        };

        let material = grid.cell(map_x, map_y)?;
        if material == OPEN {
            continue;
        }

        let perp_dist = match face {
            WallFace::EastWest => (map_x as f32 - origin.x + (1 - step_x) as f32 * 0.5) / ray.x,
            WallFace::NorthSouth => (map_y as f32 - origin.y + (1 - step_y) as f32 * 0.5) / ray.y,
        };
        let point = origin + ray * perp_dist;
        let wall_u = match face {
            WallFace::EastWest => {
                let u = point.y - point.y.floor();
                if ray.x > 0.0 { 1.0 - u } else { u }
            }
            WallFace::NorthSouth => {
                let u = point.x - point.x.floor();
                if ray.y < 0.0 { 1.0 - u } else { u }
            }
        };

        return Some(RayHit {
            perp_dist,
            point,
            material,
            face,
            wall_u,
        });
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
