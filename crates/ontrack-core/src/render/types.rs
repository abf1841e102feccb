use serde::{Deserialize, Serialize};

/// An sRGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Colors used by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Full-budget background ring and balance label
    pub budget: Rgb,
    /// Spent portion of the budget
    pub spent: Rgb,
    /// Deviation ring and label when ahead of pace
    pub positive: Rgb,
    /// Deviation ring and label when behind pace
    pub negative: Rgb,
    /// Caption text
    pub caption: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            budget: Rgb::new(0.196, 0.678, 0.902),
            spent: Rgb::new(0.557, 0.557, 0.576),
            positive: Rgb::new(0.0, 0.6667, 0.1765),
            negative: Rgb::new(1.0, 0.231, 0.188),
            caption: Rgb::new(0.0, 0.0, 0.0),
        }
    }
}

/// Sizes of the small widget family, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetLayout {
    pub width: f64,
    pub height: f64,
    /// Side of the square frame the rings are drawn in
    pub ring_frame: f64,
    pub ring_line_width: f64,
    /// Vertical gap above the ring and between ring and caption
    pub spacing: f64,
    pub balance_font_size: f64,
    pub deviation_font_size: f64,
    pub caption_font_size: f64,
}

impl Default for WidgetLayout {
    fn default() -> Self {
        Self {
            width: 155.0,
            height: 155.0,
            ring_frame: 115.0,
            ring_line_width: 15.0,
            spacing: 10.0,
            balance_font_size: 30.0,
            deviation_font_size: 25.0,
            caption_font_size: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One primitive, drawn in list order (back to front).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drawable {
    /// A stroked circular arc. Angles in degrees, 0 at three o'clock, clockwise.
    Ring {
        center: Point,
        radius: f64,
        line_width: f64,
        start_degrees: f64,
        sweep_degrees: f64,
        color: Rgb,
    },
    /// Text centered on `position`.
    Text {
        content: String,
        position: Point,
        size: f64,
        bold: bool,
        color: Rgb,
    },
}

/// A fully laid out widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetScene {
    pub width: f64,
    pub height: f64,
    pub drawables: Vec<Drawable>,
}

impl WidgetScene {
    pub fn rings(&self) -> impl Iterator<Item = &Drawable> {
        self.drawables
            .iter()
            .filter(|d| matches!(d, Drawable::Ring { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::Text { content, .. } => Some(content.as_str()),
            Drawable::Ring { .. } => None,
        })
    }
}
