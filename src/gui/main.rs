use anyhow::{Context, Result};
use clap::Parser;
use driveview::core::config::DriveConfig;
use driveview::core::telemetry::logging::init_logging;
use driveview::services::store::{FolderSource, StaticStore};
use driveview::ui::DriveApp;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    let config = DriveConfig::parse();
    init_logging(&config.log);
    config.validate()?;

    let store = match &config.store {
        Some(path) => StaticStore::load(path)
            .with_context(|| format!("loading drive store from {}", path.display()))?,
        None => {
            info!("using built-in demo drive");
            StaticStore::mock()
        }
    };
    let source: Arc<dyn FolderSource> = Arc::new(store);

    DriveApp::run(config, source);
    Ok(())
}
