// Engine main entry point: loads the item feed and prints a JSON cost report
use anyhow::{Context, Result};
use chrono::Utc;
use engine::config::settings::EngineSettings;
use engine::services::CatalogService;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "ITEM_ENGINE_CONFIG";
const FEED_ENV: &str = "ITEM_ENGINE_FEED";

fn main() -> Result<()> {
    let settings = load_settings()?;
    init_tracing(&settings.log_level);

    info!(feed = %settings.feed_path.display(), "Starting item cost engine...");
    let service = CatalogService::from_settings(&settings);

    // Sampled once so every item in the report shares the same "now"
    let now = Utc::now();
    let report = service.report(now);

    let output = if settings.pretty_output {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize catalog report")?;
    println!("{}", output);

    Ok(())
}

// Config path comes from the first argument or ITEM_ENGINE_CONFIG; without
// either, defaults are used. ITEM_ENGINE_FEED overrides the feed path.
fn load_settings() -> Result<EngineSettings> {
    let config_path = env::args().nth(1).or_else(|| env::var(CONFIG_ENV).ok());
    let settings = match config_path {
        Some(path) => EngineSettings::load(&path).with_context(|| format!("Failed to load settings from '{}'", path))?,
        None => EngineSettings::default(),
    };

    Ok(match env::var(FEED_ENV) {
        Ok(feed) if !feed.is_empty() => settings.with_feed_path(feed),
        _ => settings,
    })
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
