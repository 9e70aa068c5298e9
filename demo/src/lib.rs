pub mod scene;

use std::time::Duration;

use letterbox::RuntimeRenderer;
use letterbox::app::{AppContext, GameApp};
use letterbox::graphics::CpuCanvas;
use letterbox::input::InputState;
use letterbox::surface::RgbaBufferSurface;
use log::{debug, info, warn};

use crate::scene::{Command, DemoScene};

#[derive(Debug, Default)]
pub struct DemoGame {
    scene: DemoScene,
}

impl DemoGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &DemoScene {
        &self.scene
    }
}

impl GameApp for DemoGame {
    fn init(&mut self, ctx: &mut AppContext) {
        let size = ctx.logical_size();
        info!("demo scene ready at {}x{}", size.width, size.height);
    }

    fn update(&mut self, dt: Duration, input: &InputState, ctx: &mut AppContext) -> bool {
        for command in self.scene.handle_input(input) {
            debug!("demo command {command:?}");
            let applied = match command {
                Command::ToggleFullscreen => {
                    if !ctx.toggle_fullscreen() {
                        warn!("fullscreen toggle had no effect");
                    }
                    Ok(())
                }
                Command::ToggleAspectRatio => {
                    let keep = !ctx.renderer.config().keep_aspect_ratio;
                    ctx.renderer.keep_aspect_ratio(keep)
                }
                Command::ToggleReduceIfNeeded => {
                    let reduce = !ctx.renderer.config().reduce_if_needed;
                    ctx.renderer.set_reduce_if_needed(reduce)
                }
                Command::SetMargins(m) => {
                    let m = m as f32;
                    ctx.renderer.set_margins(m, m, m, m)
                }
                Command::Quit => return false,
            };
            if let Err(never) = applied {
                match never {}
            }
        }

        let size = ctx.logical_size();
        self.scene.update(dt, size.width as f32, size.height as f32);
        true
    }

    fn draw(&mut self, canvas: &mut CpuCanvas<'_>, _renderer: &RuntimeRenderer<RgbaBufferSurface>) {
        self.scene.draw(canvas);
    }
}
