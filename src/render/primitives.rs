use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidConfig(format!("unsupported color `{input}`"));
        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |hex: &str| -> ChartResult<f64> {
            u8::from_str_radix(hex, 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let mut channels = [0.0; 3];
                for (slot, index) in channels.iter_mut().zip(0..3) {
                    let nibble = &digits[index..=index];
                    *slot = channel(&format!("{nibble}{nibble}"))?;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 | 8 => {
                let red = channel(&digits[0..2])?;
                let green = channel(&digits[2..4])?;
                let blue = channel(&digits[4..6])?;
                let alpha = if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    1.0
                };
                Ok(Self::rgba(red, green, blue, alpha))
            }
            _ => Err(invalid()),
        }
    }

    /// Multiplies the alpha channel by `opacity`.
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            alpha: self.alpha * opacity,
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub font_family: String,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            font_family: "Sans".to_owned(),
            color,
            h_align,
        }
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient between two pixel-space points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl LinearGradient {
    /// Top-to-bottom gradient from `from` to `to` over `[top, bottom]`.
    #[must_use]
    pub fn vertical(top: f64, bottom: f64, from: Color, to: Color) -> Self {
        let mut stops = SmallVec::new();
        stops.push(GradientStop {
            offset: 0.0,
            color: from,
        });
        stops.push(GradientStop {
            offset: 1.0,
            color: to,
        });
        Self {
            x1: 0.0,
            y1: top,
            x2: 0.0,
            y2: bottom,
            stops,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if ![self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "gradient endpoints must be finite".to_owned(),
            ));
        }
        if self.stops.is_empty() {
            return Err(ChartError::InvalidData(
                "gradient must have at least one stop".to_owned(),
            ));
        }
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(ChartError::InvalidData(
                    "gradient stop offset must be in [0, 1]".to_owned(),
                ));
            }
            stop.color.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::LinearGradient(gradient) => gradient.validate(),
        }
    }
}

/// Filled (and optionally stroked) closed path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPrimitive {
    pub path: Vec<PathCommand>,
    pub fill: Paint,
    pub stroke: Option<Paint>,
    pub stroke_width: f64,
}

impl AreaPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !matches!(self.path.first(), Some(PathCommand::MoveTo { .. })) {
            return Err(ChartError::InvalidData(
                "area path must start with move_to".to_owned(),
            ));
        }
        if !self.path.iter().all(|command| command.is_finite()) {
            return Err(ChartError::InvalidData(
                "area path coordinates must be finite".to_owned(),
            ));
        }
        self.fill.validate()?;
        if let Some(stroke) = &self.stroke {
            stroke.validate()?;
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "area stroke width must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
