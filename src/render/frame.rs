use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{AreaPrimitive, LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitive coordinates are relative to `(origin_x, origin_y)`, the top-left
/// corner of the plot group inside the viewport. Backends draw areas first,
/// then lines, then texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub origin_x: f64,
    pub origin_y: f64,
    pub areas: Vec<AreaPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            origin_x: 0.0,
            origin_y: 0.0,
            areas: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(ChartError::InvalidData(
                "frame origin must be finite".to_owned(),
            ));
        }

        for area in &self.areas {
            area.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize render frame: {e}")))
    }
}
