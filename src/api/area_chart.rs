use tracing::{debug, warn};

use crate::core::{
    AreaGeometry, AxisScale, DomainWindow, DragPoint, LinearScale, PathCommand, Series,
    project_area_geometry,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    DomainChangeObserver, DragContext, DragGesture, DragResolution, DragState, PointerEvent,
    to_drag_point,
};
use crate::render::{AreaPrimitive, LinearGradient, Paint, RenderFrame, Renderer};

use super::axis::{AxisStyle, append_bottom_axis, append_left_axis};
use super::chart_config::{
    AREA_STROKE_WIDTH_PX, AreaChartConfig, GRADIENT_FROM_OPACITY, GRADIENT_TO_OPACITY,
    LEFT_AXIS_TICK_COUNT, ResolvedChartColors,
};

/// Horizontal (time to x) and vertical (close to y) scales supplied by the host.
pub struct AreaChartScales {
    pub x: Box<dyn AxisScale>,
    pub y: Box<dyn AxisScale>,
}

impl AreaChartScales {
    #[must_use]
    pub fn new(x: impl AxisScale + 'static, y: impl AxisScale + 'static) -> Self {
        Self {
            x: Box::new(x),
            y: Box::new(y),
        }
    }

    /// Linear scales over the visible time extent and a niced close extent.
    pub fn fit(visible: &Series, width: f64, y_max: f64) -> ChartResult<Self> {
        let (time_start, time_end) = visible.extent().ok_or_else(|| {
            ChartError::InvalidData("cannot fit scales to an empty series".to_owned())
        })?;
        let (close_min, close_max) = visible.close_extent().ok_or_else(|| {
            ChartError::InvalidData("cannot fit scales to an empty series".to_owned())
        })?;

        let x = LinearScale::horizontal(time_start, time_end, width)?;
        let y = LinearScale::vertical(close_min.min(0.0), close_max, y_max)?
            .nice(LEFT_AXIS_TICK_COUNT);
        Ok(Self::new(x, y))
    }
}

impl std::fmt::Debug for AreaChartScales {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AreaChartScales")
            .field("x_domain", &self.x.domain())
            .field("x_range", &self.x.range())
            .field("y_domain", &self.y.domain())
            .field("y_range", &self.y.range())
            .finish()
    }
}

/// Area chart with drag-to-pan over the time domain.
///
/// Pointer events are converted to plot coordinates and fed to a
/// [`DragGesture`]; accepted windows go to the registered
/// [`DomainChangeObserver`]. Nothing drawn depends on the gesture state.
pub struct AreaChart<R: Renderer> {
    renderer: R,
    config: AreaChartConfig,
    colors: ResolvedChartColors,
    scales: AreaChartScales,
    visible: Series,
    full: Series,
    window: Option<DomainWindow>,
    gesture: DragGesture,
    last_point: Option<DragPoint>,
    observer: Option<Box<dyn DomainChangeObserver>>,
}

impl<R: Renderer> AreaChart<R> {
    pub fn new(renderer: R, config: AreaChartConfig, scales: AreaChartScales) -> ChartResult<Self> {
        let colors = config.validate()?;
        Ok(Self {
            renderer,
            config,
            colors,
            scales,
            visible: Series::empty(),
            full: Series::empty(),
            window: None,
            gesture: DragGesture::new(),
            last_point: None,
            observer: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AreaChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AreaChartConfig) -> ChartResult<()> {
        self.colors = config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn scales(&self) -> &AreaChartScales {
        &self.scales
    }

    pub fn set_scales(&mut self, scales: AreaChartScales) {
        self.scales = scales;
    }

    /// Replaces the displayed series and the reference series bounding drags.
    ///
    /// The shown window becomes the visible series' own extent again.
    pub fn set_series(&mut self, visible: Series, full: Series) {
        debug!(
            visible = visible.len(),
            full = full.len(),
            "set area chart series"
        );
        if visible.is_empty() || full.is_empty() {
            warn!("area chart series is empty; drags will be ignored");
        }
        self.visible = visible;
        self.full = full;
        self.window = None;
    }

    #[must_use]
    pub fn visible_series(&self) -> &Series {
        &self.visible
    }

    #[must_use]
    pub fn full_series(&self) -> &Series {
        &self.full
    }

    /// Time extent drags are measured against: the last applied window, or the
    /// visible series' extent when none was applied.
    #[must_use]
    pub fn visible_window(&self) -> Option<DomainWindow> {
        self.window.or_else(|| {
            self.visible
                .extent()
                .map(|(first, last)| DomainWindow::new(first, last))
        })
    }

    pub fn on_domain_change(&mut self, observer: impl DomainChangeObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_domain_change(&mut self) {
        self.observer = None;
    }

    #[must_use]
    pub fn gesture_state(&self) -> DragState {
        self.gesture.state()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Starts a gesture, discarding any gesture already in progress.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        let point = self.drag_point(event);
        self.last_point = Some(point);
        self.gesture.press(point);
    }

    /// Ignored unless a gesture is active.
    pub fn pointer_move(&mut self, event: PointerEvent) -> Option<DragResolution> {
        if !self.gesture.is_dragging() {
            return None;
        }
        let point = self.drag_point(event);
        self.last_point = Some(point);
        let context = DragContext {
            plot_width_px: self.config.width,
            full_series: &self.full,
            visible_series: &self.visible,
            visible_window: self.window,
        };
        let resolution = self.gesture.move_to(point, context)?;
        self.dispatch(resolution);
        Some(resolution)
    }

    /// Resolves the gesture one last time and returns to idle.
    pub fn pointer_up(&mut self, event: PointerEvent) -> Option<DragResolution> {
        let point = self.drag_point(event);
        let context = DragContext {
            plot_width_px: self.config.width,
            full_series: &self.full,
            visible_series: &self.visible,
            visible_window: self.window,
        };
        let resolution = self.gesture.release(point, context)?;
        self.last_point = None;
        self.dispatch(resolution);
        Some(resolution)
    }

    /// Drops the active gesture without emitting; returns whether one was active.
    pub fn pointer_cancel(&mut self) -> bool {
        self.last_point = None;
        self.gesture.cancel()
    }

    /// Shows `window` by slicing the full series and re-fitting the x scale to
    /// a linear scale over the window.
    ///
    /// The window itself, not the sliced points, is what later drags shift, so
    /// edges that fall between data points do not shrink it. While a gesture
    /// is active it is rebased at the latest pointer position, so later moves
    /// shift relative to the newly shown window instead of compounding on top
    /// of it.
    pub fn apply_domain_window(&mut self, window: DomainWindow) -> ChartResult<()> {
        if !window.new_min.is_finite() || !window.new_max.is_finite() || window.span() < 0.0 {
            return Err(ChartError::InvalidData(
                "domain window must be finite with new_min <= new_max".to_owned(),
            ));
        }
        let x = LinearScale::horizontal(window.new_min, window.new_max, self.config.width)?;
        self.scales.x = Box::new(x);
        self.visible = self.full.slice_window(window);
        self.window = Some(window);

        if let (true, Some(point)) = (self.gesture.is_dragging(), self.last_point) {
            self.gesture.press(point);
        }
        Ok(())
    }

    pub fn project_area_geometry(&self) -> ChartResult<AreaGeometry> {
        project_area_geometry(
            self.visible.points(),
            self.scales.x.as_ref(),
            self.scales.y.as_ref(),
            self.config.curve,
        )
    }

    /// Builds the frame, or `None` when the chart is too narrow to render.
    pub fn build_frame(&self) -> ChartResult<Option<RenderFrame>> {
        if !self.config.is_renderable() {
            debug!(width = self.config.width, "area chart too narrow; skipping frame");
            return Ok(None);
        }

        let (origin_x, origin_y) = self.config.group_origin();
        let mut frame = RenderFrame::new(self.config.viewport()).with_origin(origin_x, origin_y);

        let geometry = self.project_area_geometry()?;
        if !geometry.is_empty() {
            let gradient = area_gradient(&geometry, self.colors);
            frame.areas.push(AreaPrimitive {
                path: geometry.fill,
                fill: Paint::LinearGradient(gradient.clone()),
                stroke: Some(Paint::LinearGradient(gradient)),
                stroke_width: AREA_STROKE_WIDTH_PX,
            });
        }

        let style = AxisStyle {
            color: self.colors.axis,
            font_size_px: self.config.font_size_px,
            font_family: self.config.font_family.clone(),
        };
        if !self.config.hide_bottom_axis {
            append_bottom_axis(
                &mut frame,
                self.scales.x.as_ref(),
                self.config.y_max,
                self.config.bottom_axis_tick_count(),
                &style,
            );
        }
        if !self.config.hide_left_axis {
            append_left_axis(
                &mut frame,
                self.scales.y.as_ref(),
                LEFT_AXIS_TICK_COUNT,
                &style,
            );
        }

        Ok(Some(frame))
    }

    pub fn render(&mut self) -> ChartResult<()> {
        match self.build_frame()? {
            Some(frame) => self.renderer.render(&frame),
            None => Ok(()),
        }
    }

    fn drag_point(&self, event: PointerEvent) -> DragPoint {
        to_drag_point(event, self.config.plot_offset(), self.config.margin)
    }

    fn dispatch(&mut self, resolution: DragResolution) {
        if let (Some(window), Some(observer)) = (resolution.accepted(), self.observer.as_mut()) {
            observer.on_domain_change(window);
        }
    }
}

/// Vertical gradient over the area's bounding box, opaque at the top.
fn area_gradient(geometry: &AreaGeometry, colors: ResolvedChartColors) -> LinearGradient {
    let mut top = geometry.baseline_y;
    let mut bottom = geometry.baseline_y;
    let mut visit = |y: f64| {
        top = top.min(y);
        bottom = bottom.max(y);
    };
    for command in &geometry.fill {
        match *command {
            PathCommand::MoveTo { y, .. } | PathCommand::LineTo { y, .. } => visit(y),
            PathCommand::CubicTo { c1y, c2y, y, .. } => {
                visit(c1y);
                visit(c2y);
                visit(y);
            }
            PathCommand::Close => {}
        }
    }
    LinearGradient::vertical(
        top,
        bottom,
        colors.gradient.with_opacity(GRADIENT_FROM_OPACITY),
        colors.gradient.with_opacity(GRADIENT_TO_OPACITY),
    )
}
