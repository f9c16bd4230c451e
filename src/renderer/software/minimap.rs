use glam::Vec2;

use crate::renderer::software::caster::RayHit;
use crate::renderer::software::frame::Frame;
use crate::world::{MapGrid, OPEN, Rgba, TextureStore};

const BACKDROP: Rgba = 0xA0_000000;
const BORDER: Rgba = 0xFF_FFFFFF;
const FLOOR_CELL: Rgba = 0x50_808080;
const CELL_OUTLINE: Rgba = 0x28_000000;
const PLAYER: Rgba = 0xFF_FF0000;
const RAY: Rgba = 0xC8_00FFFF;

/// Draw the diagnostic overlay into the frame's top-left corner: the
/// whole grid scaled into a `size`px square, the player disc, and one
/// line plus marker per ray hit of the current frame.
///
/// Purely visual – reads the hit list, mutates nothing but pixels.
pub fn draw_minimap(
    frame: &mut Frame,
    grid: &MapGrid,
    store: &TextureStore,
    player: Vec2,
    hits: &[RayHit],
    size: usize,
) {
    let scale = (size as f32 / grid.width() as f32).min(size as f32 / grid.height() as f32);
    let size = size as i32;

    frame.fill_rect(0, 0, size, size, BACKDROP);
    frame.stroke_rect(0, 0, size, size, BORDER);

    for my in 0..grid.height() as i32 {
        for mx in 0..grid.width() as i32 {
            let x0 = (mx as f32 * scale) as i32;
            let y0 = (my as f32 * scale) as i32;
            let w = ((mx + 1) as f32 * scale) as i32 - x0;
            let h = ((my + 1) as f32 * scale) as i32 - y0;
            let cell = grid.cell(mx, my).unwrap_or(OPEN);
            let color = if cell == OPEN {
                FLOOR_CELL
            } else {
                store.map_color(cell)
            };
            frame.fill_rect(x0, y0, w, h, color);
            frame.stroke_rect(x0, y0, w, h, CELL_OUTLINE);
        }
    }

    let px = player.x * scale;
    let py = player.y * scale;
    frame.fill_circle(px, py, (scale * 0.25).max(2.5), PLAYER);

    for hit in hits {
        let hx = hit.point.x * scale;
        let hy = hit.point.y * scale;
        frame.draw_line(px as i32, py as i32, hx as i32, hy as i32, RAY);
        frame.fill_circle(hx, hy, 2.0, RAY);
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::software::caster::{RayHit, WallFace};
    use crate::world::{MapGrid, Palette, TextureStore};
    use glam::vec2;

    #[test]
    fn cells_player_and_hit_markers_are_drawn() {
        let grid = MapGrid::from_rows(&[&[1, 0], &[0, 0]]).unwrap();
        let store = TextureStore::palette_only(Palette::default());
        let mut frame = Frame::default();
        frame.resize(100, 100);

        let hit = RayHit {
            perp_dist: 1.0,
            point: vec2(1.0, 0.5),
            material: 1,
            face: WallFace::EastWest,
            wall_u: 0.0,
        };
        // 40px footprint over a 2×2 grid = 20px cells
        draw_minimap(&mut frame, &grid, &store, vec2(0.5, 1.5), &[hit], 40);

        // wall cell (0,0) center takes the opaque palette color
        assert_eq!(frame.pixels()[10 * 100 + 10], 0xFF_C8C8C8);
        // player disc pixel (off the ray line) is solid red
        assert_eq!(frame.pixels()[32 * 100 + 8], 0xFF_FF0000);
        // hit marker tints the pixel at the scaled hit point cyan-ish
        let (_, r, g, b) = crate::world::channels(frame.pixels()[10 * 100 + 20]);
        assert!(b > 100 && g > 100 && r < 100);
        // pixels past the footprint stay untouched
        assert_eq!(frame.pixels()[50 * 100 + 50], 0);
    }
}
