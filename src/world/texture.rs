// Per-material pixel buffers plus the flat-color fallback palette.
// The renderer and minimap reach textures through material ids only.

use crate::world::grid::{MaterialId, OPEN};

/// Pixel format of every buffer in this crate: 0xAARRGGBB.
/// `minifb` ignores the alpha byte when presenting.
pub type Rgba = u32;

/// Color shown for material ids with neither texture nor palette entry.
pub const UNKNOWN_MATERIAL: Rgba = 0xFF_FF00FF;

/// r+g+b sums below this count as near-black (atlas separator residue).
const BLACK_SUM: u32 = 30;

/// Fraction of near-black pixels at which an edge row/column is treated
/// as separator border and trimmed.
const BORDER_FRACTION: f32 = 0.9;

#[inline]
pub(crate) fn channels(c: Rgba) -> (u32, u32, u32, u32) {
    ((c >> 24) & 0xFF, (c >> 16) & 0xFF, (c >> 8) & 0xFF, c & 0xFF)
}

#[inline]
pub(crate) fn pack(a: u32, r: u32, g: u32, b: u32) -> Rgba {
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Scale the RGB channels of `c` by `f`, leaving alpha untouched.
pub fn darken(c: Rgba, f: f32) -> Rgba {
    let (a, r, g, b) = channels(c);
    let scale = |v: u32| ((v as f32 * f) as i32).clamp(0, 255) as u32;
    pack(a, scale(r), scale(g), scale(b))
}

/// CPU-side storage: 32-bit ARGB in row-major order.
/// Built once by the atlas loader, never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgba>,
}

impl Texture {
    #[inline]
    fn is_dark(&self, x: usize, y: usize) -> bool {
        let (_, r, g, b) = channels(self.pixels[y * self.w + x]);
        r + g + b < BLACK_SUM
    }

    /// Sample at fractional texel coordinates, clamped to the buffer.
    ///
    /// Bilinear interpolates all four channels (alpha included) from the
    /// surrounding texels; at exact integer coordinates it reduces to the
    /// nearest-neighbour value.
    pub fn sample(&self, xf: f32, yf: f32, bilinear: bool) -> Rgba {
        let max_x = self.w as i32 - 1;
        let max_y = self.h as i32 - 1;

        if !bilinear {
            let xi = (xf as i32).clamp(0, max_x) as usize;
            let yi = (yf as i32).clamp(0, max_y) as usize;
            return self.pixels[yi * self.w + xi];
        }

        let sx = xf - xf.floor();
        let sy = yf - yf.floor();
        let x0 = (xf.floor() as i32).clamp(0, max_x) as usize;
        let y0 = (yf.floor() as i32).clamp(0, max_y) as usize;
        let x1 = (x0 + 1).min(max_x as usize);
        let y1 = (y0 + 1).min(max_y as usize);

        let c00 = channels(self.pixels[y0 * self.w + x0]);
        let c10 = channels(self.pixels[y0 * self.w + x1]);
        let c01 = channels(self.pixels[y1 * self.w + x0]);
        let c11 = channels(self.pixels[y1 * self.w + x1]);

        let lerp2 = |t00: u32, t10: u32, t01: u32, t11: u32| -> u32 {
            let top = t00 as f32 + (t10 as f32 - t00 as f32) * sx;
            let bot = t01 as f32 + (t11 as f32 - t01 as f32) * sx;
            ((top + (bot - top) * sy + 0.5) as i32).clamp(0, 255) as u32
        };

        pack(
            lerp2(c00.0, c10.0, c01.0, c11.0),
            lerp2(c00.1, c10.1, c01.1, c11.1),
            lerp2(c00.2, c10.2, c01.2, c11.2),
            lerp2(c00.3, c10.3, c01.3, c11.3),
        )
    }

    /// Crop atlas separator borders in place.
    ///
    /// Scans inward from each edge and drops rows/columns whose pixels
    /// are ≥90% near-black, each side independently. A texture the crop
    /// would consume entirely is left untouched.
    pub fn trim_border(&mut self) {
        let dark_row = |y: usize| {
            let n = (0..self.w).filter(|&x| self.is_dark(x, y)).count();
            n as f32 / self.w as f32 >= BORDER_FRACTION
        };
        let dark_col = |x: usize| {
            let n = (0..self.h).filter(|&y| self.is_dark(x, y)).count();
            n as f32 / self.h as f32 >= BORDER_FRACTION
        };

        let top = (0..self.h).take_while(|&y| dark_row(y)).count();
        if top == self.h {
            return; // all separator – nothing sensible to keep
        }
        let bottom = (0..self.h).rev().take_while(|&y| dark_row(y)).count();

        let left = (0..self.w).take_while(|&x| dark_col(x)).count();
        if left == self.w {
            return;
        }
        let right = (0..self.w).rev().take_while(|&x| dark_col(x)).count();

        if left + right >= self.w || top + bottom >= self.h {
            return;
        }
        if left == 0 && right == 0 && top == 0 && bottom == 0 {
            return;
        }

        let nw = self.w - left - right;
        let nh = self.h - top - bottom;
        let mut out = Vec::with_capacity(nw * nh);
        for y in top..self.h - bottom {
            let row = y * self.w + left;
            out.extend_from_slice(&self.pixels[row..row + nw]);
        }
        self.pixels = out;
        self.w = nw;
        self.h = nh;
    }

    /// Average of a 5×5 window around the texture centre, skipping
    /// near-black samples. Falls back to the centre pixel verbatim when
    /// every sample is rejected.
    pub fn representative_color(&self) -> Rgba {
        let cx = self.w / 2;
        let cy = self.h / 2;

        let (mut asum, mut rsum, mut gsum, mut bsum) = (0u32, 0u32, 0u32, 0u32);
        let mut samples = 0u32;
        for oy in -2i32..=2 {
            let sy = cy as i32 + oy;
            if sy < 0 || sy >= self.h as i32 {
                continue;
            }
            for ox in -2i32..=2 {
                let sx = cx as i32 + ox;
                if sx < 0 || sx >= self.w as i32 {
                    continue;
                }
                if self.is_dark(sx as usize, sy as usize) {
                    continue;
                }
                let (a, r, g, b) = channels(self.pixels[sy as usize * self.w + sx as usize]);
                asum += a;
                rsum += r;
                gsum += g;
                bsum += b;
                samples += 1;
            }
        }

        if samples == 0 {
            return self.pixels[cy * self.w + cx];
        }
        pack(asum / samples, rsum / samples, gsum / samples, bsum / samples)
    }
}

/// Flat id→color table used when a material has no texture.
pub struct Palette(Vec<Rgba>);

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Self {
        Palette(colors)
    }

    /// Fallback-safe lookup: ids past the table resolve to the magenta
    /// sentinel rather than panicking.
    pub fn color(&self, id: MaterialId) -> Rgba {
        self.0.get(id as usize).copied().unwrap_or(UNKNOWN_MATERIAL)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette(vec![
            0xFF_000000, // 0 – unused (open floor)
            0xFF_C8C8C8, // 1 – light gray
            0xFF_8B4513, // 2 – saddle brown
            0xFF_00008B, // 3 – dark blue
            0xFF_556B2F, // 4 – dark olive
            0xFF_8B0000, // 5 – dark red
            0xFF_FFA500, // 6 – orange
            0xFF_800080, // 7 – purple
            0xFF_008080, // 8 – teal
            0xFF_FFFF00, // 9 – yellow
        ])
    }
}

/// Per-material texture table plus the palette fallback.
///
/// * Slot 0 is never populated – material 0 is open floor.
/// * Works with zero textures loaded; every query then answers from the
///   palette, so the renderer needs no special case beyond "is there a
///   texture for this id".
/// * Minimap colors are derived once at construction; textures are
///   immutable afterwards, so the cache cannot go stale.
pub struct TextureStore {
    textures: Vec<Option<Texture>>,
    map_colors: Vec<Option<Rgba>>,
    palette: Palette,
}

impl TextureStore {
    /// Store with no textures at all; every wall draws from the palette.
    pub fn palette_only(palette: Palette) -> Self {
        Self {
            textures: Vec::new(),
            map_colors: Vec::new(),
            palette,
        }
    }

    /// Wrap per-material buffers (index = material id, slot 0 unused).
    pub fn with_textures(textures: Vec<Option<Texture>>, palette: Palette) -> Self {
        let map_colors = textures
            .iter()
            .map(|t| t.as_ref().map(Texture::representative_color))
            .collect();
        Self {
            textures,
            map_colors,
            palette,
        }
    }

    /// Texture for `id`, if one was loaded. Material 0 never has one.
    pub fn texture(&self, id: MaterialId) -> Option<&Texture> {
        if id == OPEN {
            return None;
        }
        self.textures.get(id as usize)?.as_ref()
    }

    pub fn has_textures(&self) -> bool {
        self.textures.iter().any(Option::is_some)
    }

    /// Flat wall color for `id`.
    pub fn wall_color(&self, id: MaterialId) -> Rgba {
        self.palette.color(id)
    }

    /// Minimap cell color: the material's representative texture color
    /// when it has pixels, its palette color otherwise.
    pub fn map_color(&self, id: MaterialId) -> Rgba {
        match self.map_colors.get(id as usize).copied().flatten() {
            Some(c) => c,
            None => self.palette.color(id),
        }
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
