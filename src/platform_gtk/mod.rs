use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::AreaChart;
use crate::interaction::{DragResolution, PointerEvent};
use crate::render::{CairoContextRenderer, CairoRenderer};

type SharedChart = Rc<RefCell<AreaChart<CairoRenderer>>>;

/// Hosts an [`AreaChart`] in a `DrawingArea` and drives it from a `GestureDrag`.
///
/// Drag begin/update/end map to pointer down/move/up; GTK reports the gesture
/// start point plus an offset, which is exactly the `x + dx` shape of
/// [`PointerEvent`]. With `follow_drag` the adapter applies every accepted
/// window to the chart and redraws. Observers registered on the chart run
/// while it is mutably borrowed and must not reach back into it.
pub struct GtkAreaChart {
    area: gtk::DrawingArea,
    chart: SharedChart,
}

impl GtkAreaChart {
    #[must_use]
    pub fn new(chart: AreaChart<CairoRenderer>, follow_drag: bool) -> Self {
        let area = gtk::DrawingArea::new();
        let viewport = chart.config().viewport();
        area.set_content_width(viewport.width.ceil().max(1.0) as i32);
        area.set_content_height(viewport.height.ceil().max(1.0) as i32);

        let chart = Rc::new(RefCell::new(chart));

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_area, context, _width, _height| {
            let mut chart = draw_chart.borrow_mut();
            let frame = match chart.build_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => return,
                Err(err) => {
                    warn!(%err, "failed to build area chart frame");
                    return;
                }
            };
            if let Err(err) = chart.renderer_mut().render_on_cairo_context(context, &frame) {
                warn!(%err, "failed to draw area chart frame");
            }
        });

        let gesture = gtk::GestureDrag::new();

        let begin_chart = Rc::clone(&chart);
        gesture.connect_drag_begin(move |_gesture, x, y| {
            begin_chart.borrow_mut().pointer_down(PointerEvent::at(x, y));
        });

        let update_chart = Rc::clone(&chart);
        let update_area = area.downgrade();
        gesture.connect_drag_update(move |gesture, offset_x, offset_y| {
            let Some((x, y)) = gesture.start_point() else {
                return;
            };
            let event = PointerEvent::with_delta(x, y, offset_x, offset_y);
            let resolution = update_chart.borrow_mut().pointer_move(event);
            follow(&update_chart, resolution, follow_drag, update_area.upgrade());
        });

        let end_chart = Rc::clone(&chart);
        let end_area = area.downgrade();
        gesture.connect_drag_end(move |gesture, offset_x, offset_y| {
            let Some((x, y)) = gesture.start_point() else {
                end_chart.borrow_mut().pointer_cancel();
                return;
            };
            let event = PointerEvent::with_delta(x, y, offset_x, offset_y);
            let resolution = end_chart.borrow_mut().pointer_up(event);
            follow(&end_chart, resolution, follow_drag, end_area.upgrade());
        });

        let cancel_chart = Rc::clone(&chart);
        gesture.connect_cancel(move |_gesture, _sequence| {
            cancel_chart.borrow_mut().pointer_cancel();
        });

        area.add_controller(gesture);

        Self { area, chart }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart {
        Rc::clone(&self.chart)
    }

    pub fn queue_draw(&self) {
        self.area.queue_draw();
    }
}

fn follow(
    chart: &SharedChart,
    resolution: Option<DragResolution>,
    follow_drag: bool,
    area: Option<gtk::DrawingArea>,
) {
    if !follow_drag {
        return;
    }
    let Some(window) = resolution.and_then(DragResolution::accepted) else {
        return;
    };
    if let Err(err) = chart.borrow_mut().apply_domain_window(window) {
        warn!(%err, "failed to apply dragged domain window");
        return;
    }
    if let Some(area) = area {
        area.queue_draw();
    }
}
