// ──────────────────────────────────────────────────────────────────────────
// assets/atlas.rs
//
//  *   image file on disk            ──╮
//  *   tile into cols × rows tiles     │   --->  world::TextureStore
//  *   trim separator borders        ──╯         (palette-only on failure)
// ──────────────────────────────────────────────────────────────────────────

use std::path::Path;

use image::RgbaImage;
use thiserror::Error;
use tracing::{debug, warn};

use crate::world::{Palette, Texture, TextureStore, pack};

/// Fixed number of atlas columns; the row count follows from the sheet's
/// aspect ratio.
pub const ATLAS_COLS: usize = 4;

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error(transparent)]
    Decode(#[from] image::ImageError),

    #[error("atlas {w}×{h} is too small to tile into {cols} columns")]
    TooSmall { w: u32, h: u32, cols: usize },
}

/*====================================================================*/
/*                           Public API                               */
/*====================================================================*/

/// Build the store the renderer runs on: the atlas at `path` when it
/// decodes, the bare palette otherwise.
///
/// Asset trouble is never fatal – a missing or unreadable sheet
/// downgrades to flat-colored walls and the caller cannot tell the
/// difference beyond the log line.
pub fn load_store(path: &Path, palette: Palette) -> TextureStore {
    if !path.exists() {
        debug!(path = %path.display(), "no texture atlas, using palette");
        return TextureStore::palette_only(palette);
    }
    let tiles = image::open(path)
        .map_err(AtlasError::from)
        .and_then(|img| slice_atlas(&img.to_rgba8(), ATLAS_COLS));
    match tiles {
        Ok(tiles) => {
            debug!(path = %path.display(), tiles = tiles.len() - 1, "texture atlas loaded");
            TextureStore::with_textures(tiles, palette)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "atlas unusable, falling back to palette");
            TextureStore::palette_only(palette)
        }
    }
}

/// Slice `img` into `cols × rows` equal tiles, border-trim each one, and
/// return them indexed by material id (slot 0 left empty – material 0 is
/// open floor). `rows = max(1, height·cols/width)`, the layout the
/// shipped sheets use.
pub fn slice_atlas(img: &RgbaImage, cols: usize) -> Result<Vec<Option<Texture>>, AtlasError> {
    let (w, h) = img.dimensions();
    let rows = ((h as usize * cols) / (w as usize).max(1)).max(1);
    let tile_w = w as usize / cols;
    let tile_h = h as usize / rows;
    if tile_w == 0 || tile_h == 0 {
        return Err(AtlasError::TooSmall { w, h, cols });
    }

    let mut tiles: Vec<Option<Texture>> = Vec::with_capacity(cols * rows + 1);
    tiles.push(None);
    for ry in 0..rows {
        for rx in 0..cols {
            let mut tex = slice_tile(img, rx * tile_w, ry * tile_h, tile_w, tile_h);
            tex.trim_border();
            tiles.push(Some(tex));
        }
    }
    Ok(tiles)
}

fn slice_tile(img: &RgbaImage, x0: usize, y0: usize, w: usize, h: usize) -> Texture {
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let [r, g, b, a] = img.get_pixel((x0 + x) as u32, (y0 + y) as u32).0;
            pixels.push(pack(a as u32, r as u32, g as u32, b as u32));
        }
    }
    Texture { w, h, pixels }
}

/*====================================================================*/
/*                               Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    /// 8×4 sheet = 4 columns × 2 rows of 2×2 tiles, each tile a flat
    /// distinct color.
    fn sheet() -> RgbaImage {
        RgbaImage::from_fn(8, 4, |x, y| {
            let tile = (y / 2) * 4 + x / 2;
            image::Rgba([40 + 20 * tile as u8, 100, 200, 255])
        })
    }

    #[test]
    fn slices_in_reading_order() {
        let tiles = slice_atlas(&sheet(), 4).unwrap();
        assert_eq!(tiles.len(), 9); // slot 0 + 8 tiles
        assert!(tiles[0].is_none());
        for (i, tile) in tiles.iter().enumerate().skip(1) {
            let t = tile.as_ref().unwrap();
            assert_eq!((t.w, t.h), (2, 2));
            let expected = pack(255, 40 + 20 * (i as u32 - 1), 100, 200);
            assert!(t.pixels.iter().all(|&p| p == expected));
        }
    }

    #[test]
    fn single_row_sheet_keeps_one_row() {
        // 8×2 with 4 cols: rows = max(1, 2·4/8) = 1, so 4 tiles of 2×2.
        let img = RgbaImage::from_pixel(8, 2, image::Rgba([90, 90, 90, 255]));
        let tiles = slice_atlas(&img, 4).unwrap();
        assert_eq!(tiles.len(), 5);
        let t = tiles[1].as_ref().unwrap();
        assert_eq!((t.w, t.h), (2, 2));
    }

    #[test]
    fn degenerate_sheet_rejected() {
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]));
        assert!(matches!(
            slice_atlas(&img, 4),
            Err(AtlasError::TooSmall { .. })
        ));
    }

    #[test]
    fn missing_file_downgrades_to_palette() {
        let store = load_store(Path::new("/no/such/atlas.jpg"), Palette::default());
        assert!(!store.has_textures());
        assert_eq!(store.wall_color(1), 0xFF_C8C8C8);
    }
}
