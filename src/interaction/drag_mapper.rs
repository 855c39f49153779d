use serde::{Deserialize, Serialize};

use crate::core::{DomainWindow, Series};

/// Why a drag tick produced no candidate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragSkipReason {
    EmptyVisibleSeries,
    EmptyFullSeries,
    NonFinitePointer,
    NonFiniteWindow,
}

/// Outcome of mapping one drag tick to a time window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragResolution {
    /// Candidate lies inside the full-series bounds and should be emitted.
    Accepted(DomainWindow),
    /// Candidate would leave the full-series bounds; nothing is emitted and
    /// the window is not clamped.
    Rejected(DomainWindow),
    Skipped(DragSkipReason),
}

impl DragResolution {
    #[must_use]
    pub fn accepted(self) -> Option<DomainWindow> {
        match self {
            Self::Accepted(window) => Some(window),
            Self::Rejected(_) | Self::Skipped(_) => None,
        }
    }

    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Inputs for one drag tick.
///
/// `visible_window` is the time extent currently shown. When `None` it is the
/// first and last date of `visible_series`; hosts that display a window whose
/// edges fall between data points pass it explicitly so the shift is measured
/// against what is on screen.
#[derive(Debug, Clone, Copy)]
pub struct DragWindowInput<'a> {
    pub drag_start_x: f64,
    pub drag_current_x: f64,
    pub plot_width_px: f64,
    pub full_series: &'a Series,
    pub visible_series: &'a Series,
    pub visible_window: Option<DomainWindow>,
}

/// `(pixel_delta / plot_width_px) * time_range`, or `0.0` for a degenerate plot width.
#[must_use]
pub fn resolve_time_shift(pixel_delta: f64, plot_width_px: f64, time_range: f64) -> f64 {
    if !plot_width_px.is_finite() || plot_width_px <= f64::EPSILON {
        return 0.0;
    }
    (pixel_delta / plot_width_px) * time_range
}

/// Shifts the visible window by the horizontal drag displacement and checks it
/// against the full-series extent.
#[must_use]
pub fn resolve_drag_window(input: DragWindowInput<'_>) -> DragResolution {
    let visible_extent = match input.visible_window {
        Some(window) => Some((window.new_min, window.new_max)),
        None => input.visible_series.extent(),
    };
    let Some((visible_first, visible_last)) = visible_extent else {
        return DragResolution::Skipped(DragSkipReason::EmptyVisibleSeries);
    };
    let Some((full_first, full_last)) = input.full_series.extent() else {
        return DragResolution::Skipped(DragSkipReason::EmptyFullSeries);
    };
    if !input.drag_start_x.is_finite() || !input.drag_current_x.is_finite() {
        return DragResolution::Skipped(DragSkipReason::NonFinitePointer);
    }

    let time_range = visible_last - visible_first;
    let pixel_delta = input.drag_current_x - input.drag_start_x;
    let time_shift = resolve_time_shift(pixel_delta, input.plot_width_px, time_range);
    let candidate = DomainWindow::new(visible_first + time_shift, visible_last + time_shift);
    if !candidate.new_min.is_finite() || !candidate.new_max.is_finite() {
        return DragResolution::Skipped(DragSkipReason::NonFiniteWindow);
    }

    if candidate.is_within(full_first, full_last) {
        DragResolution::Accepted(candidate)
    } else {
        DragResolution::Rejected(candidate)
    }
}
