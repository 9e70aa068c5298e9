//! Input plumbing: window events in, logical-space input calls out.

use std::collections::{BTreeMap, BTreeSet};

use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};

use crate::coords::{CanvasBounds, page_to_logical};
use crate::keys::{KeyCode, key_code};
use crate::layout::ViewportConfig;

pub type TouchId = u64;

/// Wheel delta reported for one line (notch) of scrolling.
pub const WHEEL_DELTA_PER_LINE: f32 = 120.0;

/// Receives input already converted to logical game coordinates.
pub trait InputManager {
    fn on_key_pressed(&mut self, code: KeyCode);
    fn on_key_released(&mut self, code: KeyCode);
    fn on_mouse_move(&mut self, x: f32, y: f32);
    fn on_mouse_button_pressed(&mut self, button: u32);
    fn on_mouse_button_released(&mut self, button: u32);
    fn on_mouse_wheel(&mut self, delta: f32);
    fn on_touch_start(&mut self, id: TouchId, x: f32, y: f32);
    fn on_touch_move(&mut self, id: TouchId, x: f32, y: f32);
    fn on_touch_end(&mut self, id: TouchId);

    /// Everything held is let go (e.g. the window lost focus).
    fn release_all(&mut self) {}
}

/// Button numbering seen by the game: left, right, middle, then the rest.
pub fn button_index(button: MouseButton) -> u32 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
        MouseButton::Other(n) => n as u32,
    }
}

/// Default `InputManager` that simply records state for the game to poll.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_down: BTreeSet<KeyCode>,
    keys_released: BTreeSet<KeyCode>,
    last_key: Option<KeyCode>,
    cursor: (f32, f32),
    buttons_down: BTreeSet<u32>,
    buttons_released: BTreeSet<u32>,
    wheel: f32,
    touches: BTreeMap<TouchId, (f32, f32)>,
    touches_started: Vec<TouchId>,
    touches_ended: Vec<TouchId>,
}

impl InputState {
    pub fn is_key_down(&self, code: KeyCode) -> bool {
        self.keys_down.contains(&code)
    }

    pub fn was_key_released(&self, code: KeyCode) -> bool {
        self.keys_released.contains(&code)
    }

    pub fn any_key_down(&self) -> bool {
        !self.keys_down.is_empty()
    }

    pub fn last_key(&self) -> Option<KeyCode> {
        self.last_key
    }

    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    pub fn is_button_down(&self, button: u32) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn was_button_released(&self, button: u32) -> bool {
        self.buttons_released.contains(&button)
    }

    pub fn wheel_delta(&self) -> f32 {
        self.wheel
    }

    pub fn touch(&self, id: TouchId) -> Option<(f32, f32)> {
        self.touches.get(&id).copied()
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    pub fn started_touches(&self) -> &[TouchId] {
        &self.touches_started
    }

    pub fn ended_touches(&self) -> &[TouchId] {
        &self.touches_ended
    }

    /// Drops per-frame data (releases, wheel, touch start/end lists).
    pub fn on_frame_ended(&mut self) {
        self.keys_released.clear();
        self.buttons_released.clear();
        self.wheel = 0.0;
        self.touches_started.clear();
        self.touches_ended.clear();
    }
}

impl InputManager for InputState {
    fn on_key_pressed(&mut self, code: KeyCode) {
        self.keys_down.insert(code);
        self.last_key = Some(code);
    }

    fn on_key_released(&mut self, code: KeyCode) {
        self.keys_down.remove(&code);
        self.keys_released.insert(code);
    }

    fn on_mouse_move(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
    }

    fn on_mouse_button_pressed(&mut self, button: u32) {
        self.buttons_down.insert(button);
    }

    fn on_mouse_button_released(&mut self, button: u32) {
        self.buttons_down.remove(&button);
        self.buttons_released.insert(button);
    }

    fn on_mouse_wheel(&mut self, delta: f32) {
        self.wheel += delta;
    }

    fn on_touch_start(&mut self, id: TouchId, x: f32, y: f32) {
        self.touches.insert(id, (x, y));
        self.touches_started.push(id);
    }

    fn on_touch_move(&mut self, id: TouchId, x: f32, y: f32) {
        if let Some(pos) = self.touches.get_mut(&id) {
            *pos = (x, y);
        }
    }

    fn on_touch_end(&mut self, id: TouchId) {
        if self.touches.remove(&id).is_some() {
            self.touches_ended.push(id);
        }
    }

    fn release_all(&mut self) {
        let keys = std::mem::take(&mut self.keys_down);
        self.keys_released.extend(keys);
        let buttons = std::mem::take(&mut self.buttons_down);
        self.buttons_released.extend(buttons);
        let touches = std::mem::take(&mut self.touches);
        self.touches_ended.extend(touches.into_keys());
    }
}

/// Translates `winit` window events into `InputManager` calls.
#[derive(Debug, Clone, Default)]
pub struct InputBinder {
    buttons_down: BTreeSet<u32>,
}

impl InputBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the event was an input event and was forwarded.
    pub fn handle_event(
        &mut self,
        event: &WindowEvent<'_>,
        config: &ViewportConfig,
        bounds: &CanvasBounds,
        input: &mut dyn InputManager,
    ) -> bool {
        match event {
            WindowEvent::KeyboardInput { input: key, .. } => {
                let Some(code) = key.virtual_keycode.and_then(key_code) else {
                    return false;
                };
                match key.state {
                    ElementState::Pressed => input.on_key_pressed(code),
                    ElementState::Released => input.on_key_released(code),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = page_to_logical(config, bounds, position.x as f32, position.y as f32);
                input.on_mouse_move(x, y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let index = button_index(*button);
                match state {
                    ElementState::Pressed => {
                        self.buttons_down.insert(index);
                        input.on_mouse_button_pressed(index);
                    }
                    ElementState::Released => {
                        self.buttons_down.remove(&index);
                        input.on_mouse_button_released(index);
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => lines * WHEEL_DELTA_PER_LINE,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                input.on_mouse_wheel(delta);
            }
            WindowEvent::Touch(touch) => {
                let (x, y) = page_to_logical(
                    config,
                    bounds,
                    touch.location.x as f32,
                    touch.location.y as f32,
                );
                match touch.phase {
                    TouchPhase::Started => input.on_touch_start(touch.id, x, y),
                    TouchPhase::Moved => input.on_touch_move(touch.id, x, y),
                    TouchPhase::Ended | TouchPhase::Cancelled => input.on_touch_end(touch.id),
                }
            }
            WindowEvent::CursorLeft { .. } => {
                for button in std::mem::take(&mut self.buttons_down) {
                    input.on_mouse_button_released(button);
                }
            }
            WindowEvent::Focused(false) => {
                self.buttons_down.clear();
                input.release_all();
            }
            _ => return false,
        }
        true
    }
}
