use crate::core::errors::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: f32 = 1280.0;
pub const DEFAULT_HEIGHT: f32 = 780.0;

/// Command line configuration for the drive window.
#[derive(Debug, Clone, Parser)]
#[command(name = "DriveView", about = "Mock cloud drive browser", version)]
pub struct DriveConfig {
    /// JSON file mapping folder ids to item lists. The built-in demo drive is used when omitted.
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Initial window width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f32,

    /// Initial window height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f32,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            store: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            log: "info".to_string(),
        }
    }
}

impl DriveConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::Other(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
