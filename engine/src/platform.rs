//! Window-level capabilities the runtime needs from its host.

use std::cell::Cell;

use winit::window::{Fullscreen, Window};

use crate::frame_loop::FrameScheduler;
use crate::fullscreen::{FullscreenKind, Probe};
use crate::surface::SurfaceSize;

pub trait PlatformWindow: Sized + 'static {
    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);

    /// Ask for a frame callback on the next display refresh.
    fn request_frame(&self);

    /// Size available for the game, in page (window) pixels.
    fn viewport_size(&self) -> SurfaceSize;

    /// Entry points for going fullscreen, in the order they should be tried.
    fn enter_fullscreen_probes() -> &'static [Probe<Self, FullscreenKind>];
    fn exit_fullscreen_probes() -> &'static [Probe<Self, ()>];

    fn is_fullscreen_active(&self) -> bool;
}

/// `winit` window plus the title we last set on it.
pub struct WinitWindow {
    window: Window,
    title: String,
}

impl WinitWindow {
    pub fn new(window: Window, title: impl Into<String>) -> Self {
        Self {
            window,
            title: title.into(),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

const WINIT_ENTER: &[Probe<WinitWindow, FullscreenKind>] = &[
    Probe {
        name: "borderless",
        run: winit_enter_borderless,
    },
    Probe {
        name: "exclusive",
        run: winit_enter_exclusive,
    },
];

const WINIT_EXIT: &[Probe<WinitWindow, ()>] = &[Probe {
    name: "windowed",
    run: winit_exit,
}];

fn winit_enter_borderless(w: &WinitWindow) -> Option<FullscreenKind> {
    let monitor = w.window.current_monitor()?;
    w.window.set_fullscreen(Some(Fullscreen::Borderless(Some(monitor))));
    Some(FullscreenKind::Borderless)
}

fn winit_enter_exclusive(w: &WinitWindow) -> Option<FullscreenKind> {
    let mode = w.window.current_monitor()?.video_modes().next()?;
    w.window.set_fullscreen(Some(Fullscreen::Exclusive(mode)));
    Some(FullscreenKind::Exclusive)
}

fn winit_exit(w: &WinitWindow) -> Option<()> {
    w.window.set_fullscreen(None);
    Some(())
}

impl PlatformWindow for WinitWindow {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
        self.title = title.to_owned();
    }

    fn request_frame(&self) {
        self.window.request_redraw();
    }

    fn viewport_size(&self) -> SurfaceSize {
        let size = self.window.inner_size();
        SurfaceSize::new(size.width, size.height)
    }

    fn enter_fullscreen_probes() -> &'static [Probe<Self, FullscreenKind>] {
        WINIT_ENTER
    }

    fn exit_fullscreen_probes() -> &'static [Probe<Self, ()>] {
        WINIT_EXIT
    }

    fn is_fullscreen_active(&self) -> bool {
        self.window.fullscreen().is_some()
    }
}

impl FrameScheduler for WinitWindow {
    fn request_frame(&mut self) {
        PlatformWindow::request_frame(self);
    }
}

/// In-memory window for headless runs and tests.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    title: String,
    size: SurfaceSize,
    borderless: bool,
    exclusive: bool,
    fullscreen_active: Cell<bool>,
    frame_requests: Cell<usize>,
}

const HEADLESS_ENTER: &[Probe<HeadlessWindow, FullscreenKind>] = &[
    Probe {
        name: "borderless",
        run: headless_enter_borderless,
    },
    Probe {
        name: "exclusive",
        run: headless_enter_exclusive,
    },
];

const HEADLESS_EXIT: &[Probe<HeadlessWindow, ()>] = &[Probe {
    name: "windowed",
    run: headless_exit,
}];

fn headless_enter_borderless(w: &HeadlessWindow) -> Option<FullscreenKind> {
    w.borderless.then(|| {
        w.fullscreen_active.set(true);
        FullscreenKind::Borderless
    })
}

fn headless_enter_exclusive(w: &HeadlessWindow) -> Option<FullscreenKind> {
    w.exclusive.then(|| {
        w.fullscreen_active.set(true);
        FullscreenKind::Exclusive
    })
}

fn headless_exit(w: &HeadlessWindow) -> Option<()> {
    (w.borderless || w.exclusive).then(|| w.fullscreen_active.set(false))
}

impl HeadlessWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            title: String::new(),
            size: SurfaceSize::new(width, height),
            borderless: true,
            exclusive: true,
            fullscreen_active: Cell::new(false),
            frame_requests: Cell::new(0),
        }
    }

    pub fn with_borderless(mut self, supported: bool) -> Self {
        self.borderless = supported;
        self
    }

    pub fn with_exclusive(mut self, supported: bool) -> Self {
        self.exclusive = supported;
        self
    }

    pub fn without_fullscreen_support(self) -> Self {
        self.with_borderless(false).with_exclusive(false)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = SurfaceSize::new(width, height);
    }

    pub fn frame_requests(&self) -> usize {
        self.frame_requests.get()
    }
}

impl PlatformWindow for HeadlessWindow {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn request_frame(&self) {
        self.frame_requests.set(self.frame_requests.get() + 1);
    }

    fn viewport_size(&self) -> SurfaceSize {
        self.size
    }

    fn enter_fullscreen_probes() -> &'static [Probe<Self, FullscreenKind>] {
        HEADLESS_ENTER
    }

    fn exit_fullscreen_probes() -> &'static [Probe<Self, ()>] {
        HEADLESS_EXIT
    }

    fn is_fullscreen_active(&self) -> bool {
        self.fullscreen_active.get()
    }
}

impl FrameScheduler for HeadlessWindow {
    fn request_frame(&mut self) {
        PlatformWindow::request_frame(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_window_tracks_title_and_frame_requests() {
        let mut window = HeadlessWindow::new(320, 200);
        window.set_title("Letterbox");
        PlatformWindow::request_frame(&window);
        FrameScheduler::request_frame(&mut window);

        assert_eq!(window.title(), "Letterbox");
        assert_eq!(window.frame_requests(), 2);
        assert_eq!(window.viewport_size(), SurfaceSize::new(320, 200));
    }
}
