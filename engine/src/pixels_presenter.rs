use log::{debug, warn};
use pixels::Pixels;

use crate::graphics::{BLACK, CpuCanvas, composite};
use crate::layout::ComputedLayout;
use crate::surface::SurfaceSize;

/// Puts the canvas on screen through `pixels`.
///
/// The pixel buffer always matches the window, so the letterbox bars are plain buffer pixels
/// and the canvas is copied in at the layout offsets.
pub struct PixelsPresenter {
    pixels: Pixels,
    size: SurfaceSize,
    clear_color: [u8; 4],
}

impl PixelsPresenter {
    pub fn new(mut pixels: Pixels, size: SurfaceSize) -> Result<Self, pixels::Error> {
        if !size.is_empty() {
            pixels.resize_buffer(size.width, size.height)?;
        }
        Ok(Self {
            pixels,
            size,
            clear_color: BLACK,
        })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn set_clear_color(&mut self, color: [u8; 4]) {
        self.clear_color = color;
    }

    /// Minimised windows report a zero size; those are skipped.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<(), pixels::Error> {
        if size.is_empty() || size == self.size {
            return Ok(());
        }
        debug!("window surface resized to {}x{}", size.width, size.height);
        self.size = size;
        self.pixels.resize_surface(size.width, size.height)?;
        self.pixels.resize_buffer(size.width, size.height)?;
        Ok(())
    }

    pub fn present(
        &mut self,
        canvas: &[u8],
        canvas_size: SurfaceSize,
        layout: &ComputedLayout,
    ) -> Result<(), pixels::Error> {
        if self.size.is_empty() {
            return Ok(());
        }

        let size = self.size;
        let frame = self.pixels.frame_mut();
        if frame.len() < size.rgba_len() {
            warn!("pixel buffer smaller than the window; skipping frame");
            return Ok(());
        }

        CpuCanvas::new(frame, size).clear(self.clear_color);
        composite(
            canvas,
            canvas_size,
            frame,
            size,
            layout.offset_left.round() as i64,
            layout.offset_top.round() as i64,
        );
        self.pixels.render()
    }
}
