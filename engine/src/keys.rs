//! Numeric key codes handed to the input manager.
//!
//! Codes follow the classic browser `keyCode` table so game logic can keep using familiar
//! constants. Keys that exist on both sides of the keyboard get `code + 1000 * location`
//! (left = 1, right = 2) so the two can be told apart.

use winit::event::VirtualKeyCode;

pub type KeyCode = u32;

pub const BACKSPACE: KeyCode = 8;
pub const TAB: KeyCode = 9;
pub const ENTER: KeyCode = 13;
pub const SHIFT: KeyCode = 16;
pub const CONTROL: KeyCode = 17;
pub const ALT: KeyCode = 18;
pub const PAUSE: KeyCode = 19;
pub const ESCAPE: KeyCode = 27;
pub const SPACE: KeyCode = 32;
pub const PAGE_UP: KeyCode = 33;
pub const PAGE_DOWN: KeyCode = 34;
pub const END: KeyCode = 35;
pub const HOME: KeyCode = 36;
pub const LEFT: KeyCode = 37;
pub const UP: KeyCode = 38;
pub const RIGHT: KeyCode = 39;
pub const DOWN: KeyCode = 40;
pub const INSERT: KeyCode = 45;
pub const DELETE: KeyCode = 46;
pub const META: KeyCode = 91;
pub const F1: KeyCode = 112;

const LOCATION_LEFT: KeyCode = 1;
const LOCATION_RIGHT: KeyCode = 2;

const fn located(code: KeyCode, location: KeyCode) -> KeyCode {
    code + 1000 * location
}

pub fn key_code(key: VirtualKeyCode) -> Option<KeyCode> {
    use VirtualKeyCode as K;

    let code = match key {
        K::Back => BACKSPACE,
        K::Tab => TAB,
        K::Return | K::NumpadEnter => ENTER,
        K::Pause => PAUSE,
        K::Escape => ESCAPE,
        K::Space => SPACE,
        K::PageUp => PAGE_UP,
        K::PageDown => PAGE_DOWN,
        K::End => END,
        K::Home => HOME,
        K::Left => LEFT,
        K::Up => UP,
        K::Right => RIGHT,
        K::Down => DOWN,
        K::Insert => INSERT,
        K::Delete => DELETE,

        K::LShift => located(SHIFT, LOCATION_LEFT),
        K::RShift => located(SHIFT, LOCATION_RIGHT),
        K::LControl => located(CONTROL, LOCATION_LEFT),
        K::RControl => located(CONTROL, LOCATION_RIGHT),
        K::LAlt => located(ALT, LOCATION_LEFT),
        K::RAlt => located(ALT, LOCATION_RIGHT),
        K::LWin => located(META, LOCATION_LEFT),
        K::RWin => located(META, LOCATION_RIGHT),

        K::Key0 => 48,
        K::Key1 => 49,
        K::Key2 => 50,
        K::Key3 => 51,
        K::Key4 => 52,
        K::Key5 => 53,
        K::Key6 => 54,
        K::Key7 => 55,
        K::Key8 => 56,
        K::Key9 => 57,

        K::A => 65,
        K::B => 66,
        K::C => 67,
        K::D => 68,
        K::E => 69,
        K::F => 70,
        K::G => 71,
        K::H => 72,
        K::I => 73,
        K::J => 74,
        K::K => 75,
        K::L => 76,
        K::M => 77,
        K::N => 78,
        K::O => 79,
        K::P => 80,
        K::Q => 81,
        K::R => 82,
        K::S => 83,
        K::T => 84,
        K::U => 85,
        K::V => 86,
        K::W => 87,
        K::X => 88,
        K::Y => 89,
        K::Z => 90,

        K::Numpad0 => 96,
        K::Numpad1 => 97,
        K::Numpad2 => 98,
        K::Numpad3 => 99,
        K::Numpad4 => 100,
        K::Numpad5 => 101,
        K::Numpad6 => 102,
        K::Numpad7 => 103,
        K::Numpad8 => 104,
        K::Numpad9 => 105,
        K::NumpadMultiply => 106,
        K::NumpadAdd => 107,
        K::NumpadSubtract => 109,
        K::NumpadDecimal => 110,
        K::NumpadDivide => 111,

        K::F1 => F1,
        K::F2 => F1 + 1,
        K::F3 => F1 + 2,
        K::F4 => F1 + 3,
        K::F5 => F1 + 4,
        K::F6 => F1 + 5,
        K::F7 => F1 + 6,
        K::F8 => F1 + 7,
        K::F9 => F1 + 8,
        K::F10 => F1 + 9,
        K::F11 => F1 + 10,
        K::F12 => F1 + 11,

        K::Semicolon => 186,
        K::Equals => 187,
        K::Comma => 188,
        K::Minus => 189,
        K::Period => 190,
        K::Slash => 191,
        K::Grave => 192,
        K::LBracket => 219,
        K::Backslash => 220,
        K::RBracket => 221,
        K::Apostrophe => 222,
        _ => return None,
    };
    Some(code)
}
