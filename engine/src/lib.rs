pub mod app;
pub mod coords;
pub mod error;
pub mod frame_loop;
pub mod fullscreen;
pub mod graphics;
pub mod headless;
pub mod input;
pub mod keys;
pub mod layout;
pub mod pixels_presenter;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod surface;

pub use error::{Error, Result};
pub use headless::HeadlessRuntime;
pub use layout::{ComputedLayout, Margins, ViewportConfig, compute_layout};
pub use renderer::{LayoutObserver, RuntimeRenderer};
