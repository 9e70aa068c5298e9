//! Page space <-> logical game space.

use crate::layout::{ComputedLayout, ViewportConfig};

/// Page-space placement of the canvas.
///
/// Some hosts cannot report where the canvas sits; missing offsets count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasBounds {
    pub offset_left: Option<f32>,
    pub offset_top: Option<f32>,
    pub width: f32,
    pub height: f32,
}

impl CanvasBounds {
    pub fn new(offset_left: f32, offset_top: f32, width: f32, height: f32) -> Self {
        Self {
            offset_left: Some(offset_left),
            offset_top: Some(offset_top),
            width,
            height,
        }
    }

    pub fn from_layout(layout: &ComputedLayout) -> Self {
        Self::new(
            layout.offset_left,
            layout.offset_top,
            layout.render_width,
            layout.render_height,
        )
    }

    pub fn left(&self) -> f32 {
        self.offset_left.unwrap_or(0.0)
    }

    pub fn top(&self) -> f32 {
        self.offset_top.unwrap_or(0.0)
    }

    pub fn contains(&self, page_x: f32, page_y: f32) -> bool {
        page_x >= self.left()
            && page_x < self.left() + self.width
            && page_y >= self.top()
            && page_y < self.top() + self.height
    }
}

pub fn page_to_logical(
    config: &ViewportConfig,
    bounds: &CanvasBounds,
    page_x: f32,
    page_y: f32,
) -> (f32, f32) {
    let x = (page_x - bounds.left()) * ratio(config.logical_width, bounds.width);
    let y = (page_y - bounds.top()) * ratio(config.logical_height, bounds.height);
    (x, y)
}

pub fn logical_to_page(
    config: &ViewportConfig,
    bounds: &CanvasBounds,
    logical_x: f32,
    logical_y: f32,
) -> (f32, f32) {
    let x = bounds.left() + logical_x * ratio(bounds.width, config.logical_width);
    let y = bounds.top() + logical_y * ratio(bounds.height, config.logical_height);
    (x, y)
}

fn ratio(num: f32, den: f32) -> f32 {
    if den > 0.0 { num / den } else { 0.0 }
}
