//! The runtime renderer: owns the viewport configuration and keeps the canvas laid out.
//!
//! The embedding application constructs one and hands it to whatever needs it; there is no
//! process-wide instance. Every setter recomputes the layout, resizes the canvas surface only
//! when its pixel size actually changed, and tells the observer about the new layout.

use log::{debug, info};

use crate::coords::{CanvasBounds, logical_to_page, page_to_logical};
use crate::fullscreen::{FullscreenController, FullscreenState};
use crate::graphics::blit_scaled;
use crate::layout::{ComputedLayout, Margins, ViewportConfig, compute_layout};
use crate::platform::PlatformWindow;
use crate::surface::{Surface, SurfaceSize, resize_surface};

/// Told whenever the layout (or the configuration behind it) changes, so dependent scene
/// state can be re-laid out.
pub trait LayoutObserver {
    fn on_layout_changed(&mut self, config: &ViewportConfig, layout: &ComputedLayout);
}

impl<F> LayoutObserver for F
where
    F: FnMut(&ViewportConfig, &ComputedLayout),
{
    fn on_layout_changed(&mut self, config: &ViewportConfig, layout: &ComputedLayout) {
        self(config, layout)
    }
}

pub struct RuntimeRenderer<S: Surface> {
    config: ViewportConfig,
    viewport: SurfaceSize,
    layout: ComputedLayout,
    surface: S,
    fullscreen: FullscreenController,
    observer: Option<Box<dyn LayoutObserver>>,
}

impl<S: Surface> RuntimeRenderer<S> {
    pub fn new(
        mut config: ViewportConfig,
        viewport: SurfaceSize,
        surface: S,
    ) -> Result<Self, S::Error> {
        config.margins = config.margins.clamped();
        let fullscreen =
            FullscreenController::starting(config.is_forced_fullscreen, config.is_fullscreen);
        let layout = compute_layout(&config, viewport.width as f32, viewport.height as f32);

        let mut renderer = Self {
            config,
            viewport,
            layout,
            surface,
            fullscreen,
            observer: None,
        };
        renderer.resize_canvas()?;
        Ok(renderer)
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn layout(&self) -> ComputedLayout {
        self.layout
    }

    pub fn viewport(&self) -> SurfaceSize {
        self.viewport
    }

    pub fn canvas_bounds(&self) -> CanvasBounds {
        CanvasBounds::from_layout(&self.layout)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn set_observer(&mut self, observer: impl LayoutObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Changes the logical (game) resolution.
    pub fn set_size(&mut self, logical_width: f32, logical_height: f32) -> Result<(), S::Error> {
        self.config.logical_width = logical_width;
        self.config.logical_height = logical_height;
        self.relayout(true)
    }

    /// Negative margins are clamped to zero.
    pub fn set_margins(
        &mut self,
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    ) -> Result<(), S::Error> {
        self.config.margins = Margins::new(top, right, bottom, left).clamped();
        self.relayout(true)
    }

    pub fn keep_aspect_ratio(&mut self, enable: bool) -> Result<(), S::Error> {
        self.config.keep_aspect_ratio = enable;
        self.relayout(true)
    }

    pub fn set_reduce_if_needed(&mut self, enable: bool) -> Result<(), S::Error> {
        self.config.reduce_if_needed = enable;
        self.relayout(true)
    }

    pub fn set_forced_fullscreen(&mut self, forced: bool) -> Result<(), S::Error> {
        if self.config.is_forced_fullscreen == forced {
            return Ok(());
        }
        self.fullscreen.set_forced(forced);
        self.config.is_forced_fullscreen = forced;
        if !forced {
            self.config.is_fullscreen = false;
        }
        self.relayout(true)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.config.effective_fullscreen()
    }

    pub fn fullscreen_state(&self) -> FullscreenState {
        self.fullscreen.state()
    }

    pub fn fullscreen(&self) -> &FullscreenController {
        &self.fullscreen
    }

    /// Asks the platform to enter or leave fullscreen and relays out right away, without
    /// waiting for the platform to actually switch. No-op in forced fullscreen mode.
    pub fn set_fullscreen<W: PlatformWindow>(
        &mut self,
        window: &W,
        enable: bool,
    ) -> Result<bool, S::Error> {
        if !self.fullscreen.set_fullscreen(window, enable) {
            return Ok(false);
        }
        self.config.is_fullscreen = self.fullscreen.state().is_fullscreen();
        self.relayout(true)?;
        Ok(true)
    }

    /// Feeds back what the platform reports (e.g. the user left fullscreen with a system key).
    pub fn confirm_fullscreen(&mut self, active: bool) -> Result<bool, S::Error> {
        if !self.fullscreen.confirm(active) {
            return Ok(false);
        }
        let fullscreen = self.fullscreen.state().is_fullscreen();
        if fullscreen == self.config.is_fullscreen {
            return Ok(true);
        }
        self.config.is_fullscreen = fullscreen;
        self.relayout(true)?;
        Ok(true)
    }

    pub fn on_viewport_resized(&mut self, width: u32, height: u32) -> Result<(), S::Error> {
        self.viewport = SurfaceSize::new(width, height);
        self.relayout(false)
    }

    pub fn map_page_to_logical(&self, page_x: f32, page_y: f32) -> (f32, f32) {
        page_to_logical(&self.config, &self.canvas_bounds(), page_x, page_y)
    }

    pub fn map_logical_to_page(&self, logical_x: f32, logical_y: f32) -> (f32, f32) {
        logical_to_page(&self.config, &self.canvas_bounds(), logical_x, logical_y)
    }

    pub fn window_title<W: PlatformWindow>(&self, window: &W) -> String {
        window.title()
    }

    pub fn set_window_title<W: PlatformWindow>(&self, window: &mut W, title: &str) {
        window.set_title(title);
    }

    /// Scales a frame drawn at logical resolution into the canvas and presents it.
    pub fn present_scene(&mut self, scene: &[u8], scene_size: SurfaceSize) -> Result<(), S::Error> {
        let canvas_size = self.surface.size();
        blit_scaled(scene, scene_size, self.surface.frame_mut(), canvas_size);
        self.surface.present()
    }

    fn relayout(&mut self, config_changed: bool) -> Result<(), S::Error> {
        let (width, height) = self.viewport.as_f32();
        let layout = compute_layout(&self.config, width, height);
        let layout_changed = layout != self.layout;
        self.layout = layout;

        self.resize_canvas()?;

        if layout_changed {
            debug!(
                "layout {}x{} at ({}, {}) in {}x{}",
                layout.render_width,
                layout.render_height,
                layout.offset_left,
                layout.offset_top,
                self.viewport.width,
                self.viewport.height
            );
        }
        if layout_changed || config_changed {
            if let Some(observer) = self.observer.as_mut() {
                observer.on_layout_changed(&self.config, &self.layout);
            }
        }
        Ok(())
    }

    fn resize_canvas(&mut self) -> Result<(), S::Error> {
        let (width, height) = self.layout.pixel_size();
        if resize_surface(&mut self.surface, width, height)? {
            info!("canvas resized to {width}x{height}");
        }
        Ok(())
    }
}
