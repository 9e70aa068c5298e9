use letterbox::app::run_game;
use letterbox::settings::SettingsStore;
use letterbox_demo::DemoGame;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = SettingsStore::from_env();
    let mut settings = store.load();
    if settings.title == "letterbox" {
        settings.title = "letterbox demo".to_string();
    }
    log::info!("settings from {}", store.path().display());

    run_game(settings, DemoGame::new())?;
    Ok(())
}
