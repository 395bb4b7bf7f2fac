#![cfg(feature = "gui")]

use rust_embed::RustEmbed;

/// SVG icons compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct DriveAssets;

impl gpui::AssetSource for DriveAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<std::borrow::Cow<'static, [u8]>>> {
        match Self::get(path) {
            Some(file) => Ok(Some(file.data)),
            None => {
                tracing::warn!(path, "missing drive asset");
                Err(anyhow::anyhow!("could not find asset at path \"{}\"", path))
            }
        }
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<gpui::SharedString>> {
        Ok(Self::iter()
            .filter(|p| p.starts_with(path))
            .map(|p| gpui::SharedString::from(p.to_string()))
            .collect())
    }
}
