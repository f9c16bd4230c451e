use glam::Vec2;

/// Player view-point for one frame.
///
/// * Only **yaw** (heading) exists – the view never tilts.
/// * Coordinates are fractional grid units; screen y grows downward, so
///   positive yaw turns clockwise when seen on the minimap.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub pos: Vec2,
    pub yaw: f32, // radians (0 = +x)
    pub fov: f32, // horizontal FoV (radians, 60° in the walker)
}

impl Camera {
    /// Create a camera at `pos`, heading `yaw`, with horizontal FoV `fov`.
    pub fn new(pos: Vec2, yaw: f32, fov: f32) -> Self {
        Self { pos, yaw, fov }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the camera looks.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        let (s, c) = self.yaw.sin_cos();
        Vec2::new(c, s)
    }

    /// Unit vector spanning the screen's x axis on the map plane.
    #[inline(always)]
    pub fn right(self) -> Vec2 {
        // (c, s) -> (-s, c): +90° in this y-down convention
        self.forward().perp()
    }

    /*──────────────────────── ray generation ────────────────────────*/

    /// Ray through screen column `x` of a `screen_w`-wide viewport.
    ///
    /// `lens` runs −1..1 across the view and the ray is the
    /// **unnormalized** `forward + right · lens·tan(fov/2)`, which points
    /// along `yaw + atan(lens·tan(fov/2))`. The arctangent mapping is
    /// mandatory: grid-line crossings divided by this vector's components
    /// come out as camera-perpendicular distance rather than ray length,
    /// so a flat wall draws as a flat line. Normalizing the vector here
    /// would bow the walls back into a fisheye.
    #[inline]
    pub fn column_ray(self, x: usize, screen_w: usize) -> Vec2 {
        let lens = 2.0 * x as f32 / screen_w as f32 - 1.0;
        self.forward() + self.right() * (lens * (self.fov * 0.5).tan())
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn forward_and_right_are_orthonormal() {
        let cam = Camera::new(Vec2::ZERO, 0.3, 1.57);
        let f = cam.forward();
        let r = cam.right();
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
    }

    #[test]
    fn center_column_looks_forward() {
        let cam = Camera::new(Vec2::ZERO, 0.7, FRAC_PI_2);
        let ray = cam.column_ray(320, 640);
        assert!((ray - cam.forward()).length() < 1e-5);
    }

    #[test]
    fn leftmost_column_spans_half_fov() {
        // fov 90°: lens −1 must point 45° left of forward.
        let cam = Camera::new(Vec2::ZERO, 0.0, FRAC_PI_2);
        let ray = cam.column_ray(0, 640);
        assert!((ray - vec2(1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn column_rays_share_forward_component() {
        // Every column ray projects to exactly 1 on the forward axis –
        // the invariant the perpendicular-distance division relies on.
        let cam = Camera::new(vec2(3.0, 4.0), 1.1, 60_f32.to_radians());
        for x in [0, 100, 333, 639] {
            let ray = cam.column_ray(x, 640);
            assert!((ray.dot(cam.forward()) - 1.0).abs() < 1e-5);
        }
    }
}
