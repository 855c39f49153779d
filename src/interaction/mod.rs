mod drag_mapper;
mod pointer;

pub use drag_mapper::{
    DragResolution, DragSkipReason, DragWindowInput, resolve_drag_window, resolve_time_shift,
};
pub use pointer::{PlotOffset, PointerEvent, to_drag_point};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DomainWindow, DragPoint, Series};

/// Receives every accepted drag window.
pub trait DomainChangeObserver {
    fn on_domain_change(&mut self, window: DomainWindow);
}

impl<F> DomainChangeObserver for F
where
    F: FnMut(DomainWindow),
{
    fn on_domain_change(&mut self, window: DomainWindow) {
        self(window);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        start: DragPoint,
    },
}

/// Plot width, bounding series and shown window the gesture is mapped against.
#[derive(Debug, Clone, Copy)]
pub struct DragContext<'a> {
    pub plot_width_px: f64,
    pub full_series: &'a Series,
    pub visible_series: &'a Series,
    pub visible_window: Option<DomainWindow>,
}

/// Press-move-release state machine owning the drag start point.
///
/// A press while already dragging restarts the gesture from the new point.
/// Move and release are ignored while idle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    #[must_use]
    pub fn start_point(self) -> Option<DragPoint> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { start } => Some(start),
        }
    }

    pub fn press(&mut self, point: DragPoint) {
        if self.is_dragging() {
            debug!(x = point.x, y = point.y, "drag restarted");
        } else {
            debug!(x = point.x, y = point.y, "drag start");
        }
        self.state = DragState::Dragging { start: point };
    }

    /// Returns `None` when no gesture is active.
    pub fn move_to(
        &mut self,
        point: DragPoint,
        context: DragContext<'_>,
    ) -> Option<DragResolution> {
        let start = self.start_point()?;
        let resolution = resolve(start, point, context);
        trace!(start_x = start.x, current_x = point.x, ?resolution, "drag move");
        Some(resolution)
    }

    /// Resolves the final position and returns to idle.
    ///
    /// Returns `None` when no gesture is active.
    pub fn release(
        &mut self,
        point: DragPoint,
        context: DragContext<'_>,
    ) -> Option<DragResolution> {
        let start = self.start_point()?;
        self.state = DragState::Idle;
        let resolution = resolve(start, point, context);
        debug!(start_x = start.x, end_x = point.x, ?resolution, "drag end");
        Some(resolution)
    }

    /// Drops the active gesture without resolving it; returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
        was_dragging
    }
}

fn resolve(start: DragPoint, current: DragPoint, context: DragContext<'_>) -> DragResolution {
    let resolution = resolve_drag_window(DragWindowInput {
        drag_start_x: start.x,
        drag_current_x: current.x,
        plot_width_px: context.plot_width_px,
        full_series: context.full_series,
        visible_series: context.visible_series,
        visible_window: context.visible_window,
    });
    if let DragResolution::Rejected(window) = resolution {
        debug!(
            new_min = window.new_min,
            new_max = window.new_max,
            "drag window outside full series bounds"
        );
    }
    resolution
}
