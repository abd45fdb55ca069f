use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Offscreen frame capture settings for headless runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Render every n-th frame. Zero disables capture.
    pub capture_every: u32,
    /// Stop the app after this many frames.
    pub frame_limit: Option<u32>,
    /// Where the final frame is written when the limit is reached.
    pub output: Option<PathBuf>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capture_every: 1,
            frame_limit: None,
            output: None,
        }
    }
}
