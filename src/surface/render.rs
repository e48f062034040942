//! Rendering boundary and the wheel painter
//!
//! The core only needs a 2D immediate-mode surface with translate/rotate
//! support. [`CommandRecorder`] captures draw calls for headless runs.

use serde::Serialize;
use std::f64::consts::TAU;

use crate::util::color::Color;
use crate::wheel::constants::render::{
    segment_color, HUB_COLOR, HUB_FONT, HUB_LABEL, HUB_LABEL_COLOR, HUB_RADIUS, LABEL_COLOR,
    LABEL_FONT, LABEL_RADIUS_FRACTION, PLACEHOLDER_COLOR, PLACEHOLDER_LABEL, RIM_MARGIN,
};
use crate::wheel::geometry::{self, GeometryError};

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    const LABEL: TextStyle = TextStyle {
        font: LABEL_FONT,
        color: LABEL_COLOR,
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    };

    const HUB: TextStyle = TextStyle {
        font: HUB_FONT,
        color: HUB_LABEL_COLOR,
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    };

    const PLACEHOLDER: TextStyle = TextStyle {
        font: HUB_FONT,
        color: Color::WHITE,
        align: TextAlign::Center,
        baseline: TextBaseline::Alphabetic,
    };
}

/// 2D drawing surface
///
/// Coordinates are in canvas pixels; angles in radians, clockwise on screen.
pub trait Renderer {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    /// Pie slice centred at `(x, y)` from `start` to `end`
    fn fill_wedge(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, color: Color);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
    FillWedge { x: f64, y: f64, radius: f64, start: f64, end: f64, color: Color },
    FillCircle { x: f64, y: f64, radius: f64, color: Color },
    FillText { text: String, x: f64, y: f64, style: TextStyle },
}

/// Renderer that records every command of the latest frame
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames drawn (one per `clear`)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Labels drawn in the latest frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Wedge colours drawn in the latest frame, in draw order
    pub fn wedge_colors(&self) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillWedge { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for CommandRecorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(DrawCommand::Rotate { angle });
    }

    fn fill_wedge(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, color: Color) {
        self.commands.push(DrawCommand::FillWedge { x, y, radius, start, end, color });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle { x, y, radius, color });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
            style,
        });
    }
}

/// Wheel placement on a square canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub canvas_size: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub hub_radius: f64,
}

impl WheelLayout {
    pub fn for_canvas(canvas_size: f64) -> Self {
        let half = canvas_size / 2.0;
        Self {
            canvas_size,
            center_x: half,
            center_y: half,
            radius: (half - RIM_MARGIN).max(0.0),
            hub_radius: HUB_RADIUS,
        }
    }

    #[inline]
    pub fn label_radius(&self) -> f64 {
        self.radius * LABEL_RADIUS_FRACTION
    }
}

/// Paint the wheel rotated by `angle`, or the placeholder when `entries` is empty
pub fn paint<R: Renderer>(renderer: &mut R, layout: &WheelLayout, entries: &[String], angle: f64) {
    if entries.is_empty() {
        paint_placeholder(renderer, layout);
        return;
    }
    // Only fails for an empty list, handled above
    if let Err(e) = paint_wheel(renderer, layout, entries, angle) {
        tracing::warn!("Wheel paint skipped: {}", e);
    }
}

/// Paint one wedge per entry plus the hub
pub fn paint_wheel<R: Renderer>(
    renderer: &mut R,
    layout: &WheelLayout,
    entries: &[String],
    angle: f64,
) -> Result<(), GeometryError> {
    let n = entries.len();
    let span = geometry::segment_span(n)?;

    renderer.clear(layout.canvas_size, layout.canvas_size);
    renderer.save();
    renderer.translate(layout.center_x, layout.center_y);
    renderer.rotate(angle);

    for (i, entry) in entries.iter().enumerate() {
        let start = geometry::segment_start(i, n)?;
        renderer.fill_wedge(0.0, 0.0, layout.radius, start, start + span, segment_color(i));

        renderer.save();
        renderer.rotate(geometry::segment_mid(i, n)?);
        renderer.fill_text(entry, layout.label_radius(), 0.0, TextStyle::LABEL);
        renderer.restore();
    }

    renderer.restore();

    renderer.fill_circle(layout.center_x, layout.center_y, layout.hub_radius, HUB_COLOR);
    renderer.fill_text(HUB_LABEL, layout.center_x, layout.center_y, TextStyle::HUB);
    Ok(())
}

/// Grey disc with a prompt to add names
pub fn paint_placeholder<R: Renderer>(renderer: &mut R, layout: &WheelLayout) {
    renderer.clear(layout.canvas_size, layout.canvas_size);
    renderer.fill_wedge(
        layout.center_x,
        layout.center_y,
        layout.radius,
        0.0,
        TAU,
        PLACEHOLDER_COLOR,
    );
    renderer.fill_text(
        PLACEHOLDER_LABEL,
        layout.center_x,
        layout.center_y,
        TextStyle::PLACEHOLDER,
    );
}
