use std::time::Duration;

use letterbox::fullscreen::FullscreenState;
use letterbox::graphics::{CpuCanvas, Rect};
use letterbox::platform::{HeadlessWindow, PlatformWindow};
use letterbox::surface::{Surface, SurfaceSize, create_surface};
use letterbox::{HeadlessRuntime, ViewportConfig};

#[test]
fn window_resize_shrinks_canvas_and_keeps_aspect() {
    let mut runtime = HeadlessRuntime::new(ViewportConfig::new(800.0, 600.0), 1024, 768);
    assert_eq!(runtime.surface_size(), SurfaceSize::new(800, 600));

    runtime.resize_window(500, 500);
    assert_eq!(runtime.surface_size(), SurfaceSize::new(500, 375));
    let layout = runtime.renderer.layout();
    assert_eq!(layout.offset_top, 62.5);
}

#[test]
fn fullscreen_request_is_confirmed_on_next_resize() {
    let mut runtime = HeadlessRuntime::new(ViewportConfig::new(800.0, 600.0), 1024, 768);

    assert!(runtime.set_fullscreen(true));
    assert_eq!(runtime.renderer.fullscreen_state(), FullscreenState::Requested);
    assert!(runtime.window.is_fullscreen_active());

    // The platform grows the window to the monitor size.
    runtime.resize_window(1600, 1200);
    assert_eq!(runtime.renderer.fullscreen_state(), FullscreenState::Active);
    assert_eq!(runtime.surface_size(), SurfaceSize::new(1600, 1200));

    assert!(runtime.set_fullscreen(false));
    runtime.resize_window(1024, 768);
    assert_eq!(runtime.renderer.fullscreen_state(), FullscreenState::Windowed);
    assert_eq!(runtime.surface_size(), SurfaceSize::new(800, 600));
}

#[test]
fn unsupported_fullscreen_still_relays_out() {
    let mut runtime = HeadlessRuntime::new(ViewportConfig::new(400.0, 300.0), 800, 800)
        .with_window(HeadlessWindow::new(800, 800).without_fullscreen_support());

    assert!(runtime.set_fullscreen(true));
    assert!(!runtime.window.is_fullscreen_active());
    assert_eq!(runtime.surface_size(), SurfaceSize::new(800, 600));

    // Nothing changes on the platform side, so the request stays pending.
    runtime.resize_window(800, 800);
    assert_eq!(runtime.renderer.fullscreen_state(), FullscreenState::Requested);
}

#[test]
fn runtime_configured_fullscreen_can_exit() {
    let mut config = ViewportConfig::new(800.0, 600.0);
    config.is_fullscreen = true;
    let mut runtime = HeadlessRuntime::new(config, 800, 800);
    assert!(runtime.renderer.is_fullscreen());

    assert!(runtime.set_fullscreen(false));
    assert!(!runtime.renderer.is_fullscreen());
    assert_eq!(runtime.renderer.fullscreen_state(), FullscreenState::Windowed);
    assert_eq!(runtime.renderer.layout().offset_top, 100.0);
}

#[test]
fn forced_fullscreen_ignores_exit_requests() {
    let mut config = ViewportConfig::new(800.0, 600.0);
    config.is_forced_fullscreen = true;
    let mut runtime = HeadlessRuntime::new(config, 1024, 768);
    let layout = runtime.renderer.layout();

    assert!(!runtime.set_fullscreen(false));
    assert_eq!(runtime.renderer.layout(), layout);
    assert!(runtime.renderer.is_fullscreen());
}

#[test]
fn frame_loop_stops_when_callback_says_so() {
    let mut runtime = HeadlessRuntime::new(ViewportConfig::new(320.0, 240.0), 640, 480);
    let mut deltas = Vec::new();

    let frames = runtime.run_frames(Duration::from_millis(16), 60, |dt, _input, _renderer| {
        deltas.push(dt);
        deltas.len() < 3
    });

    assert_eq!(frames, 3);
    assert_eq!(
        deltas,
        vec![Duration::ZERO, Duration::from_millis(16), Duration::from_millis(16)]
    );
    assert!(!runtime.frame_loop().is_running());

    let more = runtime.run_frames(Duration::from_millis(16), 60, |_, _, _| true);
    assert_eq!(more, 0);
}

#[test]
fn frame_loop_resumes_with_continuous_timing() {
    let mut runtime = HeadlessRuntime::new(ViewportConfig::new(320.0, 240.0), 640, 480);
    assert_eq!(runtime.run_frames(Duration::from_millis(10), 2, |_, _, _| true), 2);

    let mut first_dt = None;
    runtime.run_frames(Duration::from_millis(10), 1, |dt, _, _| {
        first_dt = Some(dt);
        true
    });
    assert_eq!(first_dt, Some(Duration::from_millis(10)));
}

#[test]
fn renderer_can_change_logical_size_mid_run() {
    let mut runtime = HeadlessRuntime::new(ViewportConfig::new(320.0, 240.0), 640, 480);

    runtime.run_frames(Duration::from_millis(16), 1, |_, _, renderer| {
        renderer.set_size(1280.0, 960.0).unwrap();
        true
    });

    assert_eq!(runtime.surface_size(), SurfaceSize::new(640, 480));
}

#[test]
fn present_scene_scales_logical_frame_into_canvas() {
    let mut runtime = HeadlessRuntime::new(ViewportConfig::new(4.0, 2.0), 8, 4);
    runtime.renderer.set_fullscreen(&runtime.window, true).unwrap();
    assert_eq!(runtime.surface_size(), SurfaceSize::new(8, 4));

    let mut scene = create_surface(4, 2);
    let scene_size = scene.size();
    {
        let mut canvas = CpuCanvas::new(scene.frame_mut(), scene_size);
        canvas.fill_rect(Rect::new(0, 0, 1, 1), [255, 0, 0, 255]);
    }
    runtime
        .renderer
        .present_scene(scene.frame(), scene_size)
        .unwrap();

    let frame = runtime.renderer.surface().frame();
    // Logical pixel (0, 0) covers canvas pixels (0..2, 0..2).
    let px = |x: usize, y: usize| &frame[(y * 8 + x) * 4..(y * 8 + x) * 4 + 4];
    assert_eq!(px(1, 1), &[255, 0, 0, 255]);
    assert_eq!(px(2, 0), &[0, 0, 0, 0]);
}
