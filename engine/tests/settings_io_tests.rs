use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use letterbox::Error;
use letterbox::Margins;
use letterbox::settings::{RuntimeSettings, SettingsStore};

fn unique_temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir()
        .join(format!("letterbox_settings_test_{name}_{nanos}"))
        .join("settings.json")
}

#[test]
fn save_then_load_keeps_every_field() {
    let path = unique_temp_path("roundtrip");
    let store = SettingsStore::new(&path);

    let mut settings = RuntimeSettings::default();
    settings.title = "Platformer".to_owned();
    settings.viewport.logical_width = 640;
    settings.viewport.logical_height = 360;
    settings.viewport.margins = Margins::new(0.0, 0.0, 48.0, 0.0);
    settings.viewport.keep_aspect_ratio = false;
    settings.window.start_fullscreen = true;

    store.save(&settings).expect("save settings");
    assert_eq!(store.load(), settings);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn missing_file_loads_defaults_but_try_load_reports_it() {
    let store = SettingsStore::new(unique_temp_path("missing"));

    assert_eq!(store.load(), RuntimeSettings::default());
    assert!(matches!(store.try_load(), Err(Error::SettingsRead { .. })));
}

#[test]
fn broken_json_falls_back_to_defaults() {
    let path = unique_temp_path("broken");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();
    let store = SettingsStore::new(&path);

    assert!(matches!(store.try_load(), Err(Error::SettingsParse { .. })));
    assert_eq!(store.load(), RuntimeSettings::default());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn loaded_settings_are_sanitized() {
    let path = unique_temp_path("sanitize");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{
            "version": 42,
            "viewport": {
                "logical_width": 0,
                "margins": { "top": -3, "right": 1, "bottom": 2, "left": -4 }
            }
        }"#,
    )
    .unwrap();

    let settings = SettingsStore::new(&path).load();
    assert_eq!(settings.version, 1);
    assert_eq!(settings.viewport.logical_width, 1);
    assert_eq!(settings.viewport.margins, Margins::new(0.0, 1.0, 2.0, 0.0));

    let _ = fs::remove_dir_all(path.parent().unwrap());
}
