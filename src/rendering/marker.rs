use bevy::log::{info, warn};
use std::path::Path;
use tiny_skia::Pixmap;

use crate::utils::SimError;

/// Sprite used for the aircraft marker.
///
/// A sprite that cannot be read resolves to `Fallback`, which the renderer
/// draws as a flat placeholder triangle.
#[derive(Debug, Clone, Default)]
pub enum MarkerAsset {
    Loaded(Pixmap),
    #[default]
    Fallback,
}

impl MarkerAsset {
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(pixmap) => {
                info!(
                    "Loaded marker sprite {} ({}x{})",
                    path.display(),
                    pixmap.width(),
                    pixmap.height()
                );
                MarkerAsset::Loaded(pixmap)
            }
            Err(e) => {
                warn!("Using placeholder marker: {}", e);
                MarkerAsset::Fallback
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Pixmap, SimError> {
        if !path.exists() {
            return Err(SimError::AssetError(format!(
                "Marker sprite not found: {}",
                path.display()
            )));
        }
        Pixmap::load_png(path).map_err(|e| {
            SimError::AssetError(format!("Failed to decode {}: {}", path.display(), e))
        })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, MarkerAsset::Loaded(_))
    }
}
