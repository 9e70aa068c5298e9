use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read settings from {}: {source}", path.display())]
    SettingsRead { path: PathBuf, source: io::Error },

    #[error("failed to parse settings from {}: {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write settings: {0}")]
    SettingsWrite(#[from] io::Error),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixels surface error: {0}")]
    Pixels(#[from] pixels::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
