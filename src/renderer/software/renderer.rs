use crate::{
    renderer::software::caster::{self, RayHit},
    renderer::software::column,
    renderer::software::frame::Frame,
    renderer::software::minimap,
    renderer::{Renderer, Rgba, ViewOptions},
    world::{Camera, MapGrid, TextureStore},
};

/// CPU backend: owns the frame and the per-frame ray-hit list.
#[derive(Default)]
pub struct Software {
    frame: Frame,
    hits: Vec<RayHit>,
}

impl Software {
    /// Finished frame of the current pass, valid until the next
    /// `begin_frame`.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Ray hits collected by the last `draw_scene`, in column order.
    pub fn hits(&self) -> &[RayHit] {
        &self.hits
    }
}

impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        self.frame.resize(w, h);
        self.hits.clear();
    }

    fn draw_scene(
        &mut self,
        grid: &MapGrid,
        store: &TextureStore,
        camera: &Camera,
        opts: &ViewOptions,
    ) {
        self.frame.fill_bands(opts.ceiling, opts.floor);

        let w = self.frame.width();
        for x in 0..w {
            // a ray that leaves the grid leaves its column at the bands
            let Some(hit) = caster::cast_column(grid, camera, x, w) else {
                continue;
            };
            column::draw_column(&mut self.frame, x, &hit, store, opts);
            self.hits.push(hit);
        }

        if opts.minimap {
            minimap::draw_minimap(
                &mut self.frame,
                grid,
                store,
                camera.pos,
                &self.hits,
                opts.minimap_size,
            );
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(self.frame.pixels(), self.frame.width(), self.frame.height());
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{MapGrid, Palette};
    use glam::vec2;

    fn no_map_opts() -> ViewOptions {
        ViewOptions {
            minimap: false,
            ..ViewOptions::default()
        }
    }

    /// First and last wall row of column `x`, or `None` when the column
    /// holds nothing but the ceiling/floor bands.
    fn wall_rows(fb: &[Rgba], w: usize, h: usize, x: usize, opts: &ViewOptions) -> Option<(usize, usize)> {
        let mut rows = (0..h).filter(|&y| {
            let px = fb[y * w + x];
            px != opts.ceiling && px != opts.floor
        });
        let first = rows.next()?;
        Some((first, rows.last().unwrap_or(first)))
    }

    #[test]
    fn flat_wall_renders_as_flat_line() {
        let mut rows: Vec<Vec<u8>> = vec![vec![0; 11]; 11];
        for row in rows.iter_mut() {
            row[10] = 2;
        }
        let rows: Vec<&[u8]> = rows.iter().map(Vec::as_slice).collect();
        let grid = MapGrid::from_rows(&rows).unwrap();
        let store = TextureStore::palette_only(Palette::default());
        let cam = Camera::new(vec2(2.5, 5.5), 0.0, 60_f32.to_radians());
        let opts = no_map_opts();

        let mut sw = Software::default();
        sw.begin_frame(64, 64);
        sw.draw_scene(&grid, &store, &cam, &opts);

        let fb = sw.frame().pixels();
        let center = wall_rows(fb, 64, 64, 32, &opts).unwrap();
        for x in 0..64 {
            assert_eq!(
                wall_rows(fb, 64, 64, x, &opts).unwrap(),
                center,
                "column {x} bows away from the flat wall"
            );
        }
    }

    #[test]
    fn columns_without_hits_keep_the_bands() {
        let grid = MapGrid::from_rows(&[&[0, 0], &[0, 0]]).unwrap();
        let store = TextureStore::palette_only(Palette::default());
        let cam = Camera::new(vec2(1.0, 1.0), 0.3, 60_f32.to_radians());
        let opts = no_map_opts();

        let mut sw = Software::default();
        sw.begin_frame(32, 32);
        sw.draw_scene(&grid, &store, &cam, &opts);

        assert!(sw.hits().is_empty());
        let fb = sw.frame().pixels();
        for y in 0..32 {
            for x in 0..32 {
                let expect = if y < 16 { opts.ceiling } else { opts.floor };
                assert_eq!(fb[y * 32 + x], expect);
            }
        }
    }

    #[test]
    fn hit_list_is_one_entry_per_wall_column() {
        let grid = crate::world::builtin_map();
        let store = TextureStore::palette_only(Palette::default());
        let cam = Camera::new(vec2(3.5, 3.5), 1.2, 60_f32.to_radians());
        let opts = no_map_opts();

        let mut sw = Software::default();
        sw.begin_frame(48, 48);
        sw.draw_scene(grid, &store, &cam, &opts);

        // enclosed map: every column hits something
        assert_eq!(sw.hits().len(), 48);
    }

    #[test]
    fn resize_between_frames_reallocates() {
        let grid = crate::world::builtin_map();
        let store = TextureStore::palette_only(Palette::default());
        let cam = Camera::new(vec2(3.5, 3.5), 0.0, 60_f32.to_radians());
        let opts = no_map_opts();

        let mut sw = Software::default();
        sw.begin_frame(16, 16);
        sw.draw_scene(grid, &store, &cam, &opts);
        sw.begin_frame(24, 20);
        sw.draw_scene(grid, &store, &cam, &opts);
        sw.end_frame(|fb, w, h| {
            assert_eq!((w, h), (24, 20));
            assert_eq!(fb.len(), 24 * 20);
        });
    }
}
