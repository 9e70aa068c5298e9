//! Fit-to-viewport layout.
//!
//! The game is authored against a fixed logical resolution. Whenever the window (or the
//! configuration) changes, `compute_layout` decides how large the canvas is on screen and
//! where it sits inside the margin box. It is a pure function: same inputs, same output.

use serde::{Deserialize, Serialize};

/// Pixels reserved around the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Negative (or NaN) margins are treated as zero.
    pub fn clamped(self) -> Self {
        Self {
            top: non_negative(self.top),
            right: non_negative(self.right),
            bottom: non_negative(self.bottom),
            left: non_negative(self.left),
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub logical_width: f32,
    pub logical_height: f32,
    pub margins: Margins,
    pub keep_aspect_ratio: bool,
    /// Shrink the canvas to fit even when not fullscreen.
    pub reduce_if_needed: bool,
    pub is_fullscreen: bool,
    /// Platform override: the game always runs fullscreen.
    pub is_forced_fullscreen: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl ViewportConfig {
    pub fn new(logical_width: f32, logical_height: f32) -> Self {
        Self {
            logical_width,
            logical_height,
            margins: Margins::ZERO,
            keep_aspect_ratio: true,
            reduce_if_needed: true,
            is_fullscreen: false,
            is_forced_fullscreen: false,
        }
    }

    pub fn effective_fullscreen(&self) -> bool {
        self.is_fullscreen || self.is_forced_fullscreen
    }
}

/// Where the canvas ends up on screen, in page (window) pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputedLayout {
    pub render_width: f32,
    pub render_height: f32,
    pub offset_left: f32,
    pub offset_top: f32,
}

impl ComputedLayout {
    /// Render size rounded to whole pixels, for sizing a surface.
    pub fn pixel_size(&self) -> (u32, u32) {
        (to_pixels(self.render_width), to_pixels(self.render_height))
    }

    pub fn scale_x(&self, config: &ViewportConfig) -> f32 {
        ratio(self.render_width, config.logical_width)
    }

    pub fn scale_y(&self, config: &ViewportConfig) -> f32 {
        ratio(self.render_height, config.logical_height)
    }
}

pub fn compute_layout(
    config: &ViewportConfig,
    available_width: f32,
    available_height: f32,
) -> ComputedLayout {
    let margins = config.margins.clamped();
    let max_width = non_negative(available_width - margins.horizontal());
    let max_height = non_negative(available_height - margins.vertical());

    let logical_width = non_negative(config.logical_width);
    let logical_height = non_negative(config.logical_height);
    let fullscreen = config.effective_fullscreen();
    let exceeds = logical_width > max_width || logical_height > max_height;

    let (render_width, render_height) = if fullscreen && !config.keep_aspect_ratio {
        (max_width, max_height)
    } else if (fullscreen && config.keep_aspect_ratio) || (config.reduce_if_needed && exceeds) {
        let factor = fit_factor(logical_width, logical_height, max_width, max_height);
        (logical_width * factor, logical_height * factor)
    } else {
        (logical_width, logical_height)
    };

    ComputedLayout {
        render_width,
        render_height,
        offset_left: margins.left + (max_width - render_width) / 2.0,
        offset_top: margins.top + (max_height - render_height) / 2.0,
    }
}

fn fit_factor(logical_width: f32, logical_height: f32, max_width: f32, max_height: f32) -> f32 {
    if logical_width <= 0.0 || logical_height <= 0.0 {
        return 0.0;
    }

    let mut factor = max_width / logical_width;
    if logical_height * factor > max_height {
        factor = max_height / logical_height;
    }
    factor
}

fn non_negative(v: f32) -> f32 {
    if v > 0.0 { v } else { 0.0 }
}

fn ratio(num: f32, den: f32) -> f32 {
    if den > 0.0 { num / den } else { 0.0 }
}

fn to_pixels(v: f32) -> u32 {
    non_negative(v).round() as u32
}
