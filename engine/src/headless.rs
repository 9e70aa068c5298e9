use std::time::{Duration, Instant};

use winit::event::WindowEvent;

use crate::frame_loop::{FrameLoop, ManualScheduler};
use crate::input::{InputBinder, InputState};
use crate::layout::ViewportConfig;
use crate::platform::{HeadlessWindow, PlatformWindow};
use crate::renderer::RuntimeRenderer;
use crate::surface::{RgbaBufferSurface, SurfaceSize, create_surface};

/// Everything the headful app wires together, minus the real window: for tests, tooling and
/// deterministic replays.
pub struct HeadlessRuntime {
    pub window: HeadlessWindow,
    pub renderer: RuntimeRenderer<RgbaBufferSurface>,
    pub input: InputState,
    binder: InputBinder,
    frame_loop: FrameLoop,
    scheduler: ManualScheduler,
    now: Instant,
}

impl HeadlessRuntime {
    pub fn new(config: ViewportConfig, width: u32, height: u32) -> Self {
        let window = HeadlessWindow::new(width, height);
        let viewport = window.viewport_size();
        let renderer = match RuntimeRenderer::new(config, viewport, create_surface(0, 0)) {
            Ok(renderer) => renderer,
            Err(never) => match never {},
        };

        Self {
            window,
            renderer,
            input: InputState::default(),
            binder: InputBinder::new(),
            frame_loop: FrameLoop::new(),
            scheduler: ManualScheduler::new(),
            now: Instant::now(),
        }
    }

    pub fn with_window(mut self, window: HeadlessWindow) -> Self {
        let size = window.viewport_size();
        self.window = window;
        self.resize_window(size.width, size.height);
        self
    }

    pub fn resize_window(&mut self, width: u32, height: u32) {
        self.window.resize(width, height);
        let active = self.window.is_fullscreen_active();
        let results = self
            .renderer
            .on_viewport_resized(width, height)
            .and_then(|()| self.renderer.confirm_fullscreen(active));
        if let Err(never) = results {
            match never {}
        }
    }

    pub fn set_fullscreen(&mut self, enable: bool) -> bool {
        match self.renderer.set_fullscreen(&self.window, enable) {
            Ok(changed) => changed,
            Err(never) => match never {},
        }
    }

    /// Feeds one window event through the input binder.
    pub fn dispatch(&mut self, event: &WindowEvent<'_>) -> bool {
        let bounds = self.renderer.canvas_bounds();
        self.binder
            .handle_event(event, self.renderer.config(), &bounds, &mut self.input)
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    pub fn surface_size(&self) -> SurfaceSize {
        crate::surface::Surface::size(self.renderer.surface())
    }

    /// Runs frames `step` apart until `frame` returns false or `max_frames` ran.
    pub fn run_frames<F>(&mut self, step: Duration, max_frames: usize, mut frame: F) -> usize
    where
        F: FnMut(Duration, &InputState, &mut RuntimeRenderer<RgbaBufferSurface>) -> bool,
    {
        let renderer = &mut self.renderer;
        let input = &mut self.input;
        let delivered = self.scheduler.run(&mut self.frame_loop, self.now, step, max_frames, |dt| {
            let keep_going = frame(dt, input, renderer);
            input.on_frame_ended();
            keep_going
        });
        self.now += step * delivered as u32;
        delivered
    }
}
