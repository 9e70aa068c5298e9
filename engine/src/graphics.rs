use crate::surface::SurfaceSize;

pub type Color = [u8; 4];

pub const BLACK: Color = [0, 0, 0, 255];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_size(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }
}

/// CPU drawing into an RGBA frame buffer. Everything is clipped to the buffer.
pub struct CpuCanvas<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

impl<'a> CpuCanvas<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn clear(&mut self, color: Color) {
        let s = self.size;
        self.fill_rect(Rect::from_size(s.width, s.height), color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let width = self.size.width;
        let height = self.size.height;

        let max_x = rect.x.saturating_add(rect.w).min(width);
        let max_y = rect.y.saturating_add(rect.h).min(height);
        if rect.x >= max_x || rect.y >= max_y {
            return;
        }
        if self.frame.len() < self.size.rgba_len() {
            return;
        }

        let stride = width as usize * 4;
        let row_bytes = (max_x - rect.x) as usize * 4;
        let mut row_start = rect.y as usize * stride + rect.x as usize * 4;

        for _ in rect.y..max_y {
            let row = &mut self.frame[row_start..row_start + row_bytes];
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
            row_start += stride;
        }
    }

    pub fn rect_outline(&mut self, rect: Rect, color: Color) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }

        let x1 = rect.x.saturating_add(rect.w).min(self.size.width);
        let y1 = rect.y.saturating_add(rect.h).min(self.size.height);
        if rect.x >= x1 || rect.y >= y1 {
            return;
        }

        let w = x1 - rect.x;
        let h = y1 - rect.y;

        self.fill_rect(Rect::new(rect.x, rect.y, w, 1), color);
        if h > 1 {
            self.fill_rect(Rect::new(rect.x, y1 - 1, w, 1), color);
        }
        self.fill_rect(Rect::new(rect.x, rect.y, 1, h), color);
        if w > 1 {
            self.fill_rect(Rect::new(x1 - 1, rect.y, 1, h), color);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = (y as usize * self.size.width as usize + x as usize) * 4;
        let px = self.frame.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Nearest-neighbour scale of `src` into the whole of `dst`.
pub fn blit_scaled(src: &[u8], src_size: SurfaceSize, dst: &mut [u8], dst_size: SurfaceSize) {
    if src_size.is_empty() || dst_size.is_empty() {
        return;
    }
    if src.len() < src_size.rgba_len() || dst.len() < dst_size.rgba_len() {
        return;
    }

    let (sw, sh) = (src_size.width as usize, src_size.height as usize);
    let (dw, dh) = (dst_size.width as usize, dst_size.height as usize);

    for dy in 0..dh {
        let sy = (dy * sh / dh).min(sh - 1);
        let src_row = &src[sy * sw * 4..(sy + 1) * sw * 4];
        let dst_row = &mut dst[dy * dw * 4..(dy + 1) * dw * 4];
        for (dx, px) in dst_row.chunks_exact_mut(4).enumerate() {
            let sx = (dx * sw / dw).min(sw - 1);
            px.copy_from_slice(&src_row[sx * 4..sx * 4 + 4]);
        }
    }
}

/// Copies `src` into `dst` with its top-left corner at (`left`, `top`), clipping whatever
/// falls outside `dst`.
pub fn composite(
    src: &[u8],
    src_size: SurfaceSize,
    dst: &mut [u8],
    dst_size: SurfaceSize,
    left: i64,
    top: i64,
) {
    if src.len() < src_size.rgba_len() || dst.len() < dst_size.rgba_len() {
        return;
    }

    let x0 = left.max(0);
    let y0 = top.max(0);
    let x1 = (left + src_size.width as i64).min(dst_size.width as i64);
    let y1 = (top + src_size.height as i64).min(dst_size.height as i64);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let row_bytes = (x1 - x0) as usize * 4;
    for y in y0..y1 {
        let sx = (x0 - left) as usize;
        let sy = (y - top) as usize;
        let s = (sy * src_size.width as usize + sx) * 4;
        let d = (y as usize * dst_size.width as usize + x0 as usize) * 4;
        dst[d..d + row_bytes].copy_from_slice(&src[s..s + row_bytes]);
    }
}
