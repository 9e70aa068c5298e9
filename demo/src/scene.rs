//! A small fixed-resolution scene: a box bouncing around the logical canvas and a cursor
//! marker, plus key bindings that poke at the viewport settings.

use std::time::Duration;

use letterbox::graphics::{Color, CpuCanvas, Rect};
use letterbox::input::InputState;
use letterbox::keys::{self, KeyCode};

pub const BACKGROUND: Color = [24, 26, 38, 255];
pub const TILE: Color = [30, 33, 48, 255];
pub const BORDER: Color = [90, 96, 130, 255];
pub const BOX_IDLE: Color = [0, 229, 255, 255];
pub const BOX_HELD: Color = [255, 215, 0, 255];
pub const CURSOR: Color = [235, 235, 245, 255];

const KEY_A: KeyCode = 65;
const KEY_F: KeyCode = 70;
const KEY_M: KeyCode = 77;
const KEY_R: KeyCode = 82;
const KEY_F11: KeyCode = keys::F1 + 10;

const TILE_SIZE: u32 = 16;
const MARGIN_STEPS: [f32; 3] = [0.0, 32.0, 64.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleFullscreen,
    ToggleAspectRatio,
    ToggleReduceIfNeeded,
    SetMargins(u32),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BouncingBox {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
}

impl BouncingBox {
    pub fn new(size: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 90.0,
            vy: 60.0,
            size,
        }
    }

    /// Moves by `dt` and reflects off the edges of a `width` x `height` area.
    pub fn step(&mut self, dt: Duration, width: f32, height: f32) {
        let t = dt.as_secs_f32();
        self.x += self.vx * t;
        self.y += self.vy * t;

        let max_x = (width - self.size).max(0.0);
        let max_y = (height - self.size).max(0.0);
        if self.x < 0.0 || self.x > max_x {
            self.vx = -self.vx;
            self.x = self.x.clamp(0.0, max_x);
        }
        if self.y < 0.0 || self.y > max_y {
            self.vy = -self.vy;
            self.y = self.y.clamp(0.0, max_y);
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x.max(0.0) as u32,
            self.y.max(0.0) as u32,
            self.size as u32,
            self.size as u32,
        )
    }
}

#[derive(Debug, Clone)]
pub struct DemoScene {
    pub bouncer: BouncingBox,
    pub cursor: (f32, f32),
    pub held: bool,
    margin_step: usize,
}

impl DemoScene {
    pub fn new() -> Self {
        Self {
            bouncer: BouncingBox::new(24.0),
            cursor: (0.0, 0.0),
            held: false,
            margin_step: 0,
        }
    }

    /// Reads this frame's input and returns what the host should do about it.
    pub fn handle_input(&mut self, input: &InputState) -> Vec<Command> {
        self.cursor = input.cursor();
        self.held = input.is_button_down(0);

        let mut commands = Vec::new();
        if input.was_key_released(KEY_F) || input.was_key_released(KEY_F11) {
            commands.push(Command::ToggleFullscreen);
        }
        if input.was_key_released(KEY_A) {
            commands.push(Command::ToggleAspectRatio);
        }
        if input.was_key_released(KEY_R) {
            commands.push(Command::ToggleReduceIfNeeded);
        }
        if input.was_key_released(KEY_M) {
            self.margin_step = (self.margin_step + 1) % MARGIN_STEPS.len();
            commands.push(Command::SetMargins(MARGIN_STEPS[self.margin_step] as u32));
        }
        if input.was_key_released(keys::ESCAPE) {
            commands.push(Command::Quit);
        }
        commands
    }

    pub fn update(&mut self, dt: Duration, width: f32, height: f32) {
        self.bouncer.step(dt, width, height);
    }

    pub fn draw(&self, canvas: &mut CpuCanvas<'_>) {
        let size = canvas.size();
        canvas.clear(BACKGROUND);

        for ty in 0..size.height.div_ceil(TILE_SIZE) {
            for tx in 0..size.width.div_ceil(TILE_SIZE) {
                if (tx + ty) % 2 == 0 {
                    canvas.fill_rect(
                        Rect::new(tx * TILE_SIZE, ty * TILE_SIZE, TILE_SIZE, TILE_SIZE),
                        TILE,
                    );
                }
            }
        }
        canvas.rect_outline(Rect::from_size(size.width, size.height), BORDER);

        let color = if self.held { BOX_HELD } else { BOX_IDLE };
        canvas.fill_rect(self.bouncer.rect(), color);

        let (cx, cy) = (self.cursor.0.max(0.0) as u32, self.cursor.1.max(0.0) as u32);
        canvas.fill_rect(Rect::new(cx.saturating_sub(4), cy, 9, 1), CURSOR);
        canvas.fill_rect(Rect::new(cx, cy.saturating_sub(4), 1, 9), CURSOR);
    }
}

impl Default for DemoScene {
    fn default() -> Self {
        Self::new()
    }
}
