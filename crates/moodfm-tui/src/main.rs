mod action;
mod app;
mod app_state;
mod component;
mod components;
mod theme;
mod widgets;

use moodfm_core::config::Config;
use moodfm_core::coordinator::FetchCoordinator;
use moodfm_core::favorites::FavoritesStore;
use moodfm_core::fetch::LastfmClient;
use moodfm_core::platform;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let log_path = data_dir.join("moodfm.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Allow RUST_LOG override; default to debug for app code but suppress
    // noisy connection-level DEBUG from HTTP client internals.
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "debug,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("moodfm log: {}", log_path.display());

    tracing::info!("moodfm starting…");

    let config = Config::load().unwrap_or_default();
    let api_key = config.api.resolved_api_key();
    if api_key.is_empty() {
        tracing::warn!("no API key in config.toml or $LASTFM_API_KEY; fetches will fail");
    }

    let client = LastfmClient::new(config.api.base_url.clone(), api_key)?;
    let coordinator = FetchCoordinator::new(client);
    let favorites = FavoritesStore::load(&config.paths.favorites_file);

    let app = app::App::new(coordinator, favorites);
    app.run().await
}
