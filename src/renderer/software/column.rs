use crate::renderer::ViewOptions;
use crate::renderer::software::caster::RayHit;
use crate::renderer::software::frame::Frame;
use crate::world::{TextureStore, darken};

/// Distances below this clamp to "touching the wall" so the projection
/// division cannot produce a non-finite height.
const MIN_DIST: f32 = 1e-4;

/// RGB multiplier for north/south wall faces.
const FACE_SHADE: f32 = 0.8;

/// Vertical extent of the wall sliver for a hit at `dist`: inclusive
/// `(draw_start, draw_end)` pixel rows, centered on the horizon, height
/// capped at the screen and both ends clamped into it.
pub(crate) fn wall_extent(dist: f32, screen_h: usize) -> (i32, i32) {
    let h = screen_h as i32;
    let line_h = ((screen_h as f32 / dist.max(MIN_DIST)) as i32).min(h);
    let start = h / 2 - line_h / 2;
    let end = h / 2 + line_h / 2;
    (start.max(0), end.min(h - 1))
}

/// Draw the wall sliver for `hit` into screen column `x`.
///
/// Texture row index walks the sliver proportionally; the texture column
/// is fixed per screen column at `wall_u · tex_w`. Without a texture the
/// material's palette color fills the run instead.
pub(crate) fn draw_column(
    frame: &mut Frame,
    x: usize,
    hit: &RayHit,
    store: &TextureStore,
    opts: &ViewOptions,
) {
    let (start, end) = wall_extent(hit.perp_dist, frame.height());
    if end < start {
        return;
    }

    if let Some(tex) = store.texture(hit.material) {
        let tex_x = hit.wall_u * tex.w as f32;
        let dest_h = (end - start + 1) as f32;
        for y in start..=end {
            let tex_y = ((y - start) as f32 * tex.h as f32 / dest_h).min(tex.h as f32 - 1.0);
            let mut c = tex.sample(tex_x, tex_y, opts.bilinear);
            if hit.face.shaded() {
                c = darken(c, FACE_SHADE);
            }
            frame.put_unclipped(x, y as usize, c);
        }
    } else {
        let mut c = store.wall_color(hit.material);
        if hit.face.shaded() {
            c = darken(c, FACE_SHADE);
        }
        for y in start..=end {
            frame.put_unclipped(x, y as usize, c);
        }
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::software::caster::WallFace;
    use crate::world::{Palette, Texture, TextureStore};
    use glam::vec2;

    #[test]
    fn extent_is_centered_and_scales_with_distance() {
        assert_eq!(wall_extent(2.0, 100), (25, 75));
        assert_eq!(wall_extent(4.0, 100), (38, 62));
    }

    #[test]
    fn degenerate_distance_clamps_to_full_height() {
        let (start, end) = wall_extent(0.0, 100);
        assert_eq!((start, end), (0, 99));
        let (start, end) = wall_extent(-1.0, 100);
        assert_eq!((start, end), (0, 99));
    }

    fn hit(face: WallFace) -> RayHit {
        RayHit {
            perp_dist: 2.0,
            point: vec2(0.0, 0.0),
            material: 1,
            face,
            wall_u: 0.0,
        }
    }

    #[test]
    fn palette_column_fills_extent_only() {
        let mut frame = Frame::default();
        frame.resize(4, 100);
        let store = TextureStore::palette_only(Palette::default());
        draw_column(&mut frame, 2, &hit(WallFace::EastWest), &store, &ViewOptions::default());

        assert_eq!(frame.pixels()[25 * 4 + 2], 0xFF_C8C8C8);
        assert_eq!(frame.pixels()[75 * 4 + 2], 0xFF_C8C8C8);
        assert_eq!(frame.pixels()[24 * 4 + 2], 0); // above the sliver
        assert_eq!(frame.pixels()[76 * 4 + 2], 0); // below it
        assert_eq!(frame.pixels()[50 * 4 + 3], 0); // neighbouring column
    }

    #[test]
    fn secondary_face_is_darkened() {
        let mut frame = Frame::default();
        frame.resize(1, 100);
        let store = TextureStore::palette_only(Palette::default());
        draw_column(&mut frame, 0, &hit(WallFace::NorthSouth), &store, &ViewOptions::default());
        // 0xC8 = 200 → ×0.8 = 160 = 0xA0
        assert_eq!(frame.pixels()[50], 0xFF_A0A0A0);
    }

    #[test]
    fn textured_column_samples_fixed_texture_column() {
        // 2×2 texture: left column red, right column blue. wall_u 0.6
        // lands on texel column 1 for every pixel of the sliver.
        let tex = Texture {
            w: 2,
            h: 2,
            pixels: vec![0xFF_FF0000, 0xFF_0000FF, 0xFF_FF0000, 0xFF_0000FF],
        };
        let store = TextureStore::with_textures(vec![None, Some(tex)], Palette::default());
        let mut frame = Frame::default();
        frame.resize(1, 100);
        let mut h = hit(WallFace::EastWest);
        h.wall_u = 0.6;
        draw_column(&mut frame, 0, &h, &store, &ViewOptions::default());
        for y in 25..=75 {
            assert_eq!(frame.pixels()[y], 0xFF_0000FF, "row {y}");
        }
    }
}
