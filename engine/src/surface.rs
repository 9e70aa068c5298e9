use std::convert::Infallible;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    pub fn as_f32(self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

/// A resizable RGBA render surface (the canvas the game is drawn into).
///
/// Works the same for a real window-backed surface and an offscreen one.
pub trait Surface {
    type Error;

    fn size(&self) -> SurfaceSize;
    fn frame_mut(&mut self) -> &mut [u8];

    fn resize(&mut self, size: SurfaceSize) -> Result<(), Self::Error>;
    fn present(&mut self) -> Result<(), Self::Error>;
}

pub fn create_surface(width: u32, height: u32) -> RgbaBufferSurface {
    RgbaBufferSurface::new(SurfaceSize::new(width, height))
}

/// Resizes `surface` unless it already has the requested size. Returns whether it resized.
pub fn resize_surface<S: Surface>(
    surface: &mut S,
    width: u32,
    height: u32,
) -> Result<bool, S::Error> {
    let size = SurfaceSize::new(width, height);
    if surface.size() == size {
        return Ok(false);
    }
    surface.resize(size)?;
    Ok(true)
}

/// A simple in-memory RGBA surface for headless execution and tests.
#[derive(Debug, Clone)]
pub struct RgbaBufferSurface {
    size: SurfaceSize,
    buf: Vec<u8>,
    resizes: usize,
}

impl RgbaBufferSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
            resizes: 0,
        }
    }

    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    /// How many times the buffer was reallocated.
    pub fn resize_count(&self) -> usize {
        self.resizes
    }
}

impl Surface for RgbaBufferSurface {
    type Error = Infallible;

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    fn resize(&mut self, size: SurfaceSize) -> Result<(), Self::Error> {
        self.size = size;
        self.buf.resize(size.rgba_len(), 0u8);
        self.resizes += 1;
        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_surface_skips_identical_size() {
        let mut surface = create_surface(4, 3);
        assert_eq!(surface.frame().len(), 4 * 3 * 4);

        assert_eq!(resize_surface(&mut surface, 4, 3), Ok(false));
        assert_eq!(surface.resize_count(), 0);

        assert_eq!(resize_surface(&mut surface, 8, 2), Ok(true));
        assert_eq!(surface.resize_count(), 1);
        assert_eq!(surface.frame().len(), 8 * 2 * 4);
    }

    #[test]
    fn empty_sizes() {
        assert!(SurfaceSize::new(0, 10).is_empty());
        assert!(!SurfaceSize::new(1, 1).is_empty());
    }
}
