use std::path::Path;
use tiny_skia::*;

use crate::components::{HorizonFrame, Line2D};
use crate::rendering::MarkerAsset;
use crate::resources::RenderConfig;
use crate::utils::{rad_to_deg, SimError};

const SKY_TOP: (u8, u8, u8) = (0x87, 0xCE, 0xFA);
const SKY_BOTTOM: (u8, u8, u8) = (0x46, 0x82, 0xB4);
const GRID_COLOR: (u8, u8, u8) = (0x44, 0x44, 0x44);
const RUNWAY_COLOR: (u8, u8, u8) = (0x88, 0x88, 0x88);
const MARKER_COLOR: (u8, u8, u8) = (0xFF, 0xFF, 0x00);

/// Rasterises horizon frames into pixmaps sized to each frame's viewport.
pub struct FrameRenderer {
    marker: MarkerAsset,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let marker = config
            .marker_path
            .as_deref()
            .map(MarkerAsset::load)
            .unwrap_or_default();
        Self { marker }
    }

    pub fn with_marker(mut self, marker: MarkerAsset) -> Self {
        self.marker = marker;
        self
    }

    pub fn render(&self, frame: &HorizonFrame) -> Result<Pixmap, SimError> {
        let mut canvas = create_canvas(frame)?;

        self.draw_sky(&mut canvas)?;

        let grid: Vec<Line2D> = frame.screen_grid_lines().collect();
        stroke_lines(&mut canvas, &grid, GRID_COLOR, 1.0);
        stroke_lines(&mut canvas, &frame.screen_runway_edges(), RUNWAY_COLOR, 2.0);

        self.draw_marker(&mut canvas, frame);

        Ok(canvas)
    }

    pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<(), SimError> {
        pixmap
            .save_png(path)
            .map_err(|e| SimError::RenderError(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn draw_sky(&self, canvas: &mut Pixmap) -> Result<(), SimError> {
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let shader = LinearGradient::new(
            Point::from_xy(0.0, 0.0),
            Point::from_xy(0.0, height),
            vec![
                GradientStop::new(0.0, rgb(SKY_TOP)),
                GradientStop::new(1.0, rgb(SKY_BOTTOM)),
            ],
            SpreadMode::Pad,
            Transform::identity(),
        )
        .ok_or_else(|| SimError::RenderError("Invalid sky gradient".into()))?;

        let paint = Paint {
            shader,
            ..Default::default()
        };
        let rect = Rect::from_xywh(0.0, 0.0, width, height)
            .ok_or_else(|| SimError::RenderError("Invalid sky rect".into()))?;
        canvas.fill_rect(rect, &paint, Transform::identity(), None);
        Ok(())
    }

    fn draw_marker(&self, canvas: &mut Pixmap, frame: &HorizonFrame) {
        let position = frame.marker_position();
        let transform = Transform::from_rotate(rad_to_deg(frame.marker_angle_rad() as f64) as f32)
            .post_translate(position.x, position.y);

        match &self.marker {
            MarkerAsset::Loaded(sprite) => {
                let transform = transform.pre_translate(
                    -(sprite.width() as f32) / 2.0,
                    -(sprite.height() as f32) / 2.0,
                );
                canvas.draw_pixmap(
                    0,
                    0,
                    sprite.as_ref(),
                    &PixmapPaint::default(),
                    transform,
                    None,
                );
            }
            MarkerAsset::Fallback => {
                let triangle = {
                    let mut pb = PathBuilder::new();
                    pb.move_to(0.0, -10.0);
                    pb.line_to(20.0, 10.0);
                    pb.line_to(-20.0, 10.0);
                    pb.close();
                    pb.finish()
                };
                if let Some(path) = triangle {
                    let mut paint = Paint::default();
                    paint.set_color(rgb(MARKER_COLOR));
                    paint.anti_alias = true;
                    canvas.fill_path(&path, &paint, FillRule::Winding, transform, None);
                }
            }
        }
    }
}

fn create_canvas(frame: &HorizonFrame) -> Result<Pixmap, SimError> {
    let width = frame.viewport.width.ceil();
    let height = frame.viewport.height.ceil();
    if !(width >= 1.0 && height >= 1.0) {
        return Err(SimError::RenderError(format!(
            "Cannot render a {}x{} viewport",
            frame.viewport.width, frame.viewport.height
        )));
    }
    Pixmap::new(width as u32, height as u32)
        .ok_or_else(|| SimError::RenderError("Failed to create canvas".into()))
}

fn stroke_lines(canvas: &mut Pixmap, lines: &[Line2D], color: (u8, u8, u8), width: f32) {
    let mut pb = PathBuilder::new();
    for line in lines {
        pb.move_to(line.start.x, line.start.y);
        pb.line_to(line.end.x, line.end.y);
    }
    // Empty builders yield no path
    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width,
        ..Default::default()
    };
    let mut paint = Paint::default();
    paint.set_color(rgb(color));
    paint.anti_alias = true;

    canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgba8(r, g, b, 255)
}
