//! Headful runner: a `winit` window, a `pixels` surface and the runtime renderer wired
//! together around the cooperative frame loop.

use std::convert::Infallible;
use std::time::{Duration, Instant};

use log::{info, warn};
use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::error::Result;
use crate::frame_loop::FrameLoop;
use crate::graphics::CpuCanvas;
use crate::input::{InputBinder, InputState};
use crate::pixels_presenter::PixelsPresenter;
use crate::platform::{PlatformWindow, WinitWindow};
use crate::renderer::RuntimeRenderer;
use crate::settings::RuntimeSettings;
use crate::surface::{RgbaBufferSurface, Surface, SurfaceSize, create_surface, resize_surface};

pub struct AppContext {
    pub window: WinitWindow,
    pub renderer: RuntimeRenderer<RgbaBufferSurface>,
    pub presenter: PixelsPresenter,
    /// Frame the game draws into, at logical resolution.
    pub scene: RgbaBufferSurface,
}

impl AppContext {
    pub fn set_fullscreen(&mut self, enable: bool) -> bool {
        infallible(self.renderer.set_fullscreen(&self.window, enable))
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        let enable = !self.renderer.is_fullscreen();
        self.set_fullscreen(enable)
    }

    pub fn set_title(&mut self, title: &str) {
        self.renderer.set_window_title(&mut self.window, title);
    }

    pub fn logical_size(&self) -> SurfaceSize {
        let config = self.renderer.config();
        SurfaceSize::new(
            config.logical_width.max(0.0) as u32,
            config.logical_height.max(0.0) as u32,
        )
    }

    fn on_resized(&mut self, size: PhysicalSize<u32>) {
        let size = SurfaceSize::new(size.width, size.height);
        if let Err(err) = self.presenter.resize(size) {
            warn!("resize failed: {err}");
        }
        infallible(self.renderer.on_viewport_resized(size.width, size.height));
        infallible(self.renderer.confirm_fullscreen(self.window.is_fullscreen_active()));
    }

    fn draw_and_present<G: GameApp + ?Sized>(&mut self, game: &mut G) {
        let logical = self.logical_size();
        infallible(resize_surface(&mut self.scene, logical.width, logical.height));

        let scene_size = self.scene.size();
        {
            let mut canvas = CpuCanvas::new(self.scene.frame_mut(), scene_size);
            game.draw(&mut canvas, &self.renderer);
        }
        infallible(self.renderer.present_scene(self.scene.frame(), scene_size));

        let layout = self.renderer.layout();
        let canvas = self.renderer.surface();
        if let Err(err) = self.presenter.present(canvas.frame(), canvas.size(), &layout) {
            warn!("present failed: {err}");
        }
    }
}

pub trait GameApp {
    fn init(&mut self, _ctx: &mut AppContext) {}

    /// Advances one frame. `dt` is zero on the first frame. Returning false ends the loop.
    fn update(&mut self, dt: Duration, input: &InputState, ctx: &mut AppContext) -> bool;

    /// Draws the scene at logical resolution.
    fn draw(&mut self, canvas: &mut CpuCanvas<'_>, renderer: &RuntimeRenderer<RgbaBufferSurface>);
}

pub fn run_game<G: GameApp + 'static>(settings: RuntimeSettings, mut game: G) -> Result<()> {
    let settings = settings.sanitized();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(settings.title.as_str())
        .with_inner_size(PhysicalSize::new(settings.window.width, settings.window.height))
        .build(&event_loop)?;
    let window = WinitWindow::new(window, settings.title.clone());

    let viewport = window.viewport_size();
    let pixels = {
        let buffer = SurfaceSize::new(viewport.width.max(1), viewport.height.max(1));
        let surface_texture = SurfaceTexture::new(buffer.width, buffer.height, window.window());
        PixelsBuilder::new(buffer.width, buffer.height, surface_texture)
            .enable_vsync(settings.window.vsync)
            .build()?
    };
    let presenter = PixelsPresenter::new(pixels, viewport)?;

    let renderer = infallible(RuntimeRenderer::new(
        settings.viewport_config(),
        viewport,
        create_surface(0, 0),
    ));
    let logical = settings.viewport_config();
    let scene = create_surface(logical.logical_width as u32, logical.logical_height as u32);

    let mut ctx = AppContext {
        window,
        renderer,
        presenter,
        scene,
    };
    if settings.window.start_fullscreen {
        ctx.set_fullscreen(true);
    }
    info!(
        "running {} at {}x{} logical",
        settings.title, logical.logical_width, logical.logical_height
    );
    game.init(&mut ctx);

    let mut input = InputState::default();
    let mut binder = InputBinder::new();
    let mut frame_loop = FrameLoop::new();
    frame_loop.start(&mut ctx.window);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match &event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    ctx.on_resized(*size);
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    ctx.on_resized(**new_inner_size);
                }
                other => {
                    let bounds = ctx.renderer.canvas_bounds();
                    binder.handle_event(other, ctx.renderer.config(), &bounds, &mut input);
                }
            },
            Event::RedrawRequested(_) => {
                let keep_going = frame_loop.tick(Instant::now(), |dt| {
                    let keep_going = game.update(dt, &input, &mut ctx);
                    ctx.draw_and_present(&mut game);
                    keep_going
                });
                input.on_frame_ended();

                if keep_going {
                    PlatformWindow::request_frame(&ctx.window);
                } else {
                    info!("frame loop stopped after {} frames", frame_loop.frames());
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn infallible<T>(result: std::result::Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
