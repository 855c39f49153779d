use serde::{Deserialize, Serialize};

use crate::core::{Curve, Margin, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PlotOffset;
use crate::render::Color;

/// Charts narrower than this render nothing.
pub const MIN_RENDER_WIDTH_PX: f64 = 10.0;
/// Bottom axis switches from 5 to 10 ticks above this plot width.
pub const WIDE_AXIS_THRESHOLD_PX: f64 = 520.0;
pub const AXIS_TICK_LENGTH_PX: f64 = 8.0;
pub const LEFT_AXIS_TICK_COUNT: usize = 5;
pub const AREA_STROKE_WIDTH_PX: f64 = 1.0;
/// Gradient opacity at the top and bottom of the filled area.
pub const GRADIENT_FROM_OPACITY: f64 = 1.0;
pub const GRADIENT_TO_OPACITY: f64 = 0.2;

fn default_axis_color() -> String {
    "#fff".to_owned()
}

fn default_font_size_px() -> f64 {
    10.0
}

fn default_font_family() -> String {
    "Arial".to_owned()
}

/// Render inputs for one [`super::AreaChart`], as passed by the parent.
///
/// `width` is the plot width used both for layout and for pixel-to-time
/// mapping during drags; `y_max` is the plot height where the bottom axis sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaChartConfig {
    pub width: f64,
    pub y_max: f64,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub margin: Margin,
    /// Container offset; also overrides `margin.top` as the group origin when non-zero.
    #[serde(default)]
    pub top: Option<f64>,
    /// Container offset; also overrides `margin.left` as the group origin when non-zero.
    #[serde(default)]
    pub left: Option<f64>,
    pub gradient_color: String,
    #[serde(default)]
    pub hide_bottom_axis: bool,
    #[serde(default)]
    pub hide_left_axis: bool,
    #[serde(default = "default_axis_color")]
    pub axis_color: String,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub curve: Curve,
}

/// Colors parsed out of [`AreaChartConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedChartColors {
    pub gradient: Color,
    pub axis: Color,
}

impl AreaChartConfig {
    #[must_use]
    pub fn new(width: f64, y_max: f64, gradient_color: impl Into<String>) -> Self {
        Self {
            width,
            y_max,
            height: None,
            margin: Margin::default(),
            top: None,
            left: None,
            gradient_color: gradient_color.into(),
            hide_bottom_axis: false,
            hide_left_axis: false,
            axis_color: default_axis_color(),
            font_size_px: default_font_size_px(),
            font_family: default_font_family(),
            curve: Curve::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, left: f64, top: f64) -> Self {
        self.left = Some(left);
        self.top = Some(top);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_hidden_axes(mut self, hide_bottom_axis: bool, hide_left_axis: bool) -> Self {
        self.hide_bottom_axis = hide_bottom_axis;
        self.hide_left_axis = hide_left_axis;
        self
    }

    #[must_use]
    pub fn with_axis_color(mut self, color: impl Into<String>) -> Self {
        self.axis_color = color.into();
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse area chart config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize area chart config: {e}"))
        })
    }

    pub fn validate(&self) -> ChartResult<ResolvedChartColors> {
        for (field, value) in [("width", self.width), ("yMax", self.y_max)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!("`{field}` must be finite and >= 0")));
            }
        }
        if let Some(height) = self.height {
            if !height.is_finite() || height <= 0.0 {
                return Err(ChartError::InvalidConfig(
                    "`height` must be finite and > 0".to_owned(),
                ));
            }
        }
        for (field, value) in [("top", self.top), ("left", self.left)] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidConfig(format!("`{field}` must be finite")));
            }
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "`fontSizePx` must be finite and > 0".to_owned(),
            ));
        }
        self.margin.validate()?;

        Ok(ResolvedChartColors {
            gradient: Color::from_hex(&self.gradient_color)?,
            axis: Color::from_hex(&self.axis_color)?,
        })
    }

    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.width >= MIN_RENDER_WIDTH_PX
    }

    /// Offset subtracted from pointer coordinates together with the margin.
    #[must_use]
    pub fn plot_offset(&self) -> PlotOffset {
        PlotOffset::new(self.left.unwrap_or(0.0), self.top.unwrap_or(0.0))
    }

    /// Top-left corner of the plot group: the container offset when set and
    /// non-zero, the margin otherwise.
    #[must_use]
    pub fn group_origin(&self) -> (f64, f64) {
        let pick = |offset: Option<f64>, margin: f64| match offset {
            Some(value) if value != 0.0 => value,
            _ => margin,
        };
        (
            pick(self.left, self.margin.left),
            pick(self.top, self.margin.top),
        )
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let (origin_x, origin_y) = self.group_origin();
        Viewport::new(
            origin_x + self.width + self.margin.right,
            self.height.unwrap_or(origin_y + self.y_max + self.margin.bottom),
        )
    }

    #[must_use]
    pub fn bottom_axis_tick_count(&self) -> usize {
        if self.width > WIDE_AXIS_THRESHOLD_PX { 10 } else { 5 }
    }
}
