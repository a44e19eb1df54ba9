use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::config::style::{Color, LineStroke};
use crate::error::{SeriesError, SeriesResult};

/// Where annotation text anchors relative to its x/y position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlignment {
    Center,
    BaselineLeft,
    BaselineRight,
    BottomCenter,
    TopCenter,
}

/// Arrow pointing at a data coordinate, with optional label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowAnnotation {
    pub x: f64,
    pub y: f64,
    /// Direction the arrow points, in degrees; 0 points right, 90 up.
    pub angle_degrees: f64,
    pub color: Color,
    pub text: Option<String>,
    pub text_alignment: TextAlignment,
}

impl ArrowAnnotation {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            angle_degrees: 0.0,
            color: Color::BLACK,
            text: None,
            text_alignment: TextAlignment::Center,
        }
    }

    #[must_use]
    pub fn with_angle(mut self, angle_degrees: f64) -> Self {
        self.angle_degrees = angle_degrees;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = alignment;
        self
    }
}

/// Free-standing text placed at a data coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Color,
    pub angle_degrees: f64,
    pub padding_left_px: f64,
    pub alignment: TextAlignment,
}

impl TextAnnotation {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color: Color::BLACK,
            angle_degrees: 0.0,
            padding_left_px: 0.0,
            alignment: TextAlignment::Center,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle_degrees: f64) -> Self {
        self.angle_degrees = angle_degrees;
        self
    }

    #[must_use]
    pub fn with_padding_left_px(mut self, padding_left_px: f64) -> Self {
        self.padding_left_px = padding_left_px;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// One plot annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationConfig {
    Arrow(ArrowAnnotation),
    Text(TextAnnotation),
}

impl AnnotationConfig {
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Arrow(arrow) => arrow.x,
            Self::Text(text) => text.x,
        }
    }

    pub fn validate(&self) -> SeriesResult<()> {
        let (x, y, angle, color) = match self {
            Self::Arrow(arrow) => (arrow.x, arrow.y, arrow.angle_degrees, arrow.color),
            Self::Text(text) => (text.x, text.y, text.angle_degrees, text.color),
        };

        if !x.is_finite() || !y.is_finite() || !angle.is_finite() {
            return Err(SeriesError::InvalidData(
                "annotation coordinates and angle must be finite".to_owned(),
            ));
        }

        if let Self::Text(text) = self {
            if !text.padding_left_px.is_finite() || text.padding_left_px < 0.0 {
                return Err(SeriesError::InvalidData(
                    "annotation text padding must be finite and >= 0".to_owned(),
                ));
            }
        }

        color.validate()
    }
}

/// Sorts annotations by ascending x so consumers draw them in axis order.
#[must_use]
pub fn annotations_in_draw_order(annotations: &[AnnotationConfig]) -> Vec<AnnotationConfig> {
    let mut sorted = annotations.to_vec();
    sorted.sort_by(|a, b| OrderedFloat(a.x()).cmp(&OrderedFloat(b.x())));
    sorted
}

/// Axis a reference line spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Straight line across a plot at a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub orientation: Orientation,
    pub value: f64,
    pub color: Color,
    pub stroke: LineStroke,
}

impl ReferenceLine {
    #[must_use]
    pub fn horizontal(value: f64) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            value,
            color: Color::BLACK,
            stroke: LineStroke::default(),
        }
    }

    #[must_use]
    pub fn vertical(value: f64) -> Self {
        Self {
            orientation: Orientation::Vertical,
            value,
            color: Color::BLACK,
            stroke: LineStroke::default(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: LineStroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn validate(&self) -> SeriesResult<()> {
        if !self.value.is_finite() {
            return Err(SeriesError::InvalidData(
                "reference line value must be finite".to_owned(),
            ));
        }
        self.color.validate()?;
        self.stroke.validate()
    }
}
