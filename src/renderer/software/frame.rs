use crate::world::{Rgba, channels, pack};

/// Owned contiguous framebuffer, row-major 0xAARRGGBB.
///
/// Fully overwritten every frame; nothing carries over except the
/// allocation itself. Presentation goes through [`Frame::copy_rows_into`]
/// or a borrow of [`Frame::pixels`], so the target platform's row layout
/// never leaks into draw code.
#[derive(Default)]
pub struct Frame {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Frame {
    /// (Re)allocate when the target size changed.
    pub fn resize(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.pixels.resize(w * h, 0);
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Flood the whole frame with one color.
    pub fn clear(&mut self, c: Rgba) {
        self.pixels.fill(c);
    }

    /// Ceiling color over the top half, floor color under it.
    pub fn fill_bands(&mut self, ceiling: Rgba, floor: Rgba) {
        let split = self.height / 2 * self.width;
        self.pixels[..split].fill(ceiling);
        self.pixels[split..].fill(floor);
    }

    #[inline]
    pub fn put(&mut self, x: i32, y: i32, c: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.pixels[y as usize * self.width + x as usize] = c;
        }
    }

    /// Write one pixel of a wall column; `y` is already clamped by the
    /// column projection, `x` by the column loop.
    #[inline]
    pub(crate) fn put_unclipped(&mut self, x: usize, y: usize, c: Rgba) {
        self.pixels[y * self.width + x] = c;
    }

    /// Alpha-blend `c` over the existing pixel (straight alpha).
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, c: Rgba) {
        if !(0..self.width as i32).contains(&x) || !(0..self.height as i32).contains(&y) {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        let (sa, sr, sg, sb) = channels(c);
        if sa == 0xFF {
            self.pixels[idx] = c;
            return;
        }
        let (_, dr, dg, db) = channels(self.pixels[idx]);
        let mix = |s: u32, d: u32| (s * sa + d * (0xFF - sa)) / 0xFF;
        self.pixels[idx] = pack(0xFF, mix(sr, dr), mix(sg, dg), mix(sb, db));
    }

    pub fn fill_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, c: Rgba) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                self.blend(x, y, c);
            }
        }
    }

    pub fn stroke_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, c: Rgba) {
        if w <= 0 || h <= 0 {
            return;
        }
        for x in x0..x0 + w {
            self.blend(x, y0, c);
            self.blend(x, y0 + h - 1, c);
        }
        for y in y0 + 1..y0 + h - 1 {
            self.blend(x0, y, c);
            self.blend(x0 + w - 1, y, c);
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, c: Rgba) {
        let x0 = (cx - r).floor() as i32;
        let x1 = (cx + r).ceil() as i32;
        let y0 = (cy - r).floor() as i32;
        let y1 = (cy + r).ceil() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend(x, y, c);
                }
            }
        }
    }

    /// Integer Bresenham line, alpha-aware.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgba) {
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend(x0, y0, c);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Copy every row into `dst`, whose rows may be laid out with a wider
    /// stride than this frame (both in pixels, not bytes).
    ///
    /// Two named cases, matching how windowing back-ends hand out their
    /// buffers:
    /// * `dst_stride == width` – the whole frame is one contiguous run,
    ///   a single `copy_from_slice`.
    /// * `dst_stride > width` – rows are copied one by one, each landing
    ///   at its own stride offset.
    pub fn copy_rows_into(&self, dst: &mut [Rgba], dst_stride: usize) {
        debug_assert!(dst_stride >= self.width);
        if dst_stride == self.width {
            let n = self.pixels.len().min(dst.len());
            dst[..n].copy_from_slice(&self.pixels[..n]);
            return;
        }
        for (y, row) in self.pixels.chunks_exact(self.width).enumerate() {
            let start = y * dst_stride;
            let Some(slot) = dst.get_mut(start..start + self.width) else {
                break;
            };
            slot.copy_from_slice(row);
        }
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
