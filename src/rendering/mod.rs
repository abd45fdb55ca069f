mod marker;
mod renderer;

pub use marker::MarkerAsset;
pub use renderer::FrameRenderer;
