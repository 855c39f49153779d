use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Epoch milliseconds.
pub type Timestamp = f64;

/// Outer pixel size of the chart area handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One observation of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: Timestamp,
    pub close: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(date: Timestamp, close: f64) -> Self {
        Self { date, close }
    }

    pub fn from_decimal_close(date: DateTime<Utc>, close: Decimal) -> ChartResult<Self> {
        Ok(Self {
            date: datetime_to_unix_millis(date),
            close: decimal_to_f64(close, "close")?,
        })
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.date.is_finite() && self.close.is_finite()
    }
}

/// Pixel insets applied around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Pointer position relative to the plot origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragPoint {
    pub x: f64,
    pub y: f64,
}

impl DragPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Candidate visible time range produced by a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainWindow {
    pub new_min: Timestamp,
    pub new_max: Timestamp,
}

impl DomainWindow {
    #[must_use]
    pub const fn new(new_min: Timestamp, new_max: Timestamp) -> Self {
        Self { new_min, new_max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.new_max - self.new_min
    }

    /// Returns `true` when the window lies inside `[min, max]`, bounds included.
    #[must_use]
    pub fn is_within(self, min: Timestamp, max: Timestamp) -> bool {
        self.new_min >= min && self.new_max <= max
    }
}
