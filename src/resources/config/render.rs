use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::components::Viewport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Optional PNG sprite for the aircraft marker.
    #[serde(default)]
    pub marker_path: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            marker_path: None,
        }
    }
}

impl RenderConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.screen_width as f32, self.screen_height as f32)
    }
}
