// `modifiers` fields are deprecated in winit but still have to be filled in.
#![allow(deprecated)]

use letterbox::keys;
use letterbox::{HeadlessRuntime, ViewportConfig};
use winit::dpi::PhysicalPosition;
use winit::event::{
    DeviceId, ElementState, KeyboardInput, ModifiersState, MouseButton, MouseScrollDelta, Touch,
    TouchPhase, VirtualKeyCode, WindowEvent,
};

fn device() -> DeviceId {
    // SAFETY: only used as an opaque id in synthesized events.
    unsafe { DeviceId::dummy() }
}

fn key(state: ElementState, code: VirtualKeyCode) -> WindowEvent<'static> {
    WindowEvent::KeyboardInput {
        device_id: device(),
        input: KeyboardInput {
            scancode: 0,
            state,
            virtual_keycode: Some(code),
            modifiers: ModifiersState::empty(),
        },
        is_synthetic: false,
    }
}

fn cursor(x: f64, y: f64) -> WindowEvent<'static> {
    WindowEvent::CursorMoved {
        device_id: device(),
        position: PhysicalPosition::new(x, y),
        modifiers: ModifiersState::empty(),
    }
}

fn mouse(state: ElementState, button: MouseButton) -> WindowEvent<'static> {
    WindowEvent::MouseInput {
        device_id: device(),
        state,
        button,
        modifiers: ModifiersState::empty(),
    }
}

fn touch(id: u64, phase: TouchPhase, x: f64, y: f64) -> WindowEvent<'static> {
    WindowEvent::Touch(Touch {
        device_id: device(),
        phase,
        location: PhysicalPosition::new(x, y),
        force: None,
        id,
    })
}

/// 800x600 game in a 500x500 window: canvas is 500x375 at (0, 62.5).
fn runtime() -> HeadlessRuntime {
    HeadlessRuntime::new(ViewportConfig::new(800.0, 600.0), 500, 500)
}

#[test]
fn cursor_position_is_mapped_into_logical_space() {
    let mut rt = runtime();

    assert!(rt.dispatch(&cursor(250.0, 62.5)));
    let (x, y) = rt.input.cursor();
    assert!((x - 400.0).abs() < 1e-3);
    assert!(y.abs() < 1e-3);

    rt.dispatch(&cursor(500.0, 437.5));
    let (x, y) = rt.input.cursor();
    assert!((x - 800.0).abs() < 1e-3);
    assert!((y - 600.0).abs() < 1e-3);
}

#[test]
fn keys_are_forwarded_with_numeric_codes() {
    let mut rt = runtime();

    rt.dispatch(&key(ElementState::Pressed, VirtualKeyCode::Space));
    rt.dispatch(&key(ElementState::Pressed, VirtualKeyCode::RShift));
    assert!(rt.input.is_key_down(keys::SPACE));
    assert!(rt.input.is_key_down(2016));

    rt.dispatch(&key(ElementState::Released, VirtualKeyCode::Space));
    assert!(!rt.input.is_key_down(keys::SPACE));
    assert!(rt.input.was_key_released(keys::SPACE));
}

#[test]
fn unmapped_keys_are_not_consumed() {
    let mut rt = runtime();
    assert!(!rt.dispatch(&key(ElementState::Pressed, VirtualKeyCode::Mute)));
    assert!(!rt.input.any_key_down());
}

#[test]
fn cursor_leaving_the_window_releases_held_buttons() {
    let mut rt = runtime();
    rt.dispatch(&mouse(ElementState::Pressed, MouseButton::Right));
    assert!(rt.input.is_button_down(1));

    rt.dispatch(&WindowEvent::CursorLeft { device_id: device() });
    assert!(!rt.input.is_button_down(1));
    assert!(rt.input.was_button_released(1));
}

#[test]
fn wheel_lines_become_classic_wheel_deltas() {
    let mut rt = runtime();
    rt.dispatch(&WindowEvent::MouseWheel {
        device_id: device(),
        delta: MouseScrollDelta::LineDelta(0.0, 2.0),
        phase: TouchPhase::Moved,
        modifiers: ModifiersState::empty(),
    });
    assert_eq!(rt.input.wheel_delta(), 240.0);
}

#[test]
fn touches_are_mapped_and_tracked_by_id() {
    let mut rt = runtime();
    rt.dispatch(&touch(3, TouchPhase::Started, 0.0, 62.5));
    rt.dispatch(&touch(3, TouchPhase::Moved, 125.0, 62.5));

    let (x, y) = rt.input.touch(3).expect("touch 3 should be active");
    assert!((x - 200.0).abs() < 1e-3);
    assert!(y.abs() < 1e-3);

    rt.dispatch(&touch(3, TouchPhase::Cancelled, 125.0, 62.5));
    assert_eq!(rt.input.touch(3), None);
    assert_eq!(rt.input.ended_touches(), &[3]);
}

#[test]
fn losing_focus_releases_everything() {
    let mut rt = runtime();
    rt.dispatch(&key(ElementState::Pressed, VirtualKeyCode::Left));
    rt.dispatch(&mouse(ElementState::Pressed, MouseButton::Left));

    assert!(rt.dispatch(&WindowEvent::Focused(false)));
    assert!(!rt.input.any_key_down());
    assert!(!rt.input.is_button_down(0));
}

#[test]
fn non_input_events_are_ignored() {
    let mut rt = runtime();
    assert!(!rt.dispatch(&WindowEvent::Focused(true)));
    assert!(!rt.dispatch(&WindowEvent::Moved(PhysicalPosition::new(10, 10))));
}
