use serde::{Deserialize, Serialize};

use crate::core::{DragPoint, Margin};

/// Raw pointer sample delivered by the host.
///
/// `x`/`y` is the absolute position where the gesture started (or the current
/// position for hosts that do not track deltas) and `dx`/`dy` the displacement
/// since then. Either pair may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self { x, y, dx: 0.0, dy: 0.0 }
    }

    #[must_use]
    pub const fn with_delta(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self { x, y, dx, dy }
    }
}

/// Container offset of the plot group inside the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotOffset {
    pub left: f64,
    pub top: f64,
}

impl PlotOffset {
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Converts a pointer sample into plot-relative coordinates:
/// position plus delta, minus container offset, minus margin.
#[must_use]
pub fn to_drag_point(event: PointerEvent, offset: PlotOffset, margin: Margin) -> DragPoint {
    DragPoint::new(
        event.x + event.dx - offset.left - margin.left,
        event.y + event.dy - offset.top - margin.top,
    )
}
