use crate::core::{AxisScale, TickValues};
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::chart_config::AXIS_TICK_LENGTH_PX;
use super::label_format::{format_time_label, format_value_label};
use super::time_ticks::time_ticks;

const AXIS_STROKE_WIDTH_PX: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub(super) struct AxisStyle {
    pub color: Color,
    pub font_size_px: f64,
    pub font_family: String,
}

/// Domain line along `y = top`, downward calendar-aligned ticks and centered
/// time labels.
pub(super) fn append_bottom_axis(
    frame: &mut RenderFrame,
    scale: &dyn AxisScale,
    top: f64,
    tick_count: usize,
    style: &AxisStyle,
) {
    let (range_start, range_end) = scale.range();
    frame.lines.push(LinePrimitive::new(
        range_start,
        top,
        range_end,
        top,
        AXIS_STROKE_WIDTH_PX,
        style.color,
    ));

    let (domain_start, domain_end) = scale.domain();
    let span = domain_end - domain_start;
    let label_baseline = top + AXIS_TICK_LENGTH_PX + style.font_size_px;
    for tick in time_ticks(scale, tick_count) {
        let Ok(x) = scale.to_pixel(tick) else {
            continue;
        };
        frame.lines.push(LinePrimitive::new(
            x,
            top,
            x,
            top + AXIS_TICK_LENGTH_PX,
            AXIS_STROKE_WIDTH_PX,
            style.color,
        ));
        frame.texts.push(
            TextPrimitive::new(
                format_time_label(tick, span),
                x,
                label_baseline,
                style.font_size_px,
                style.color,
                TextHAlign::Center,
            )
            .with_font_family(style.font_family.clone()),
        );
    }
}

/// Domain line along `x = 0`, leftward ticks and right-aligned value labels.
pub(super) fn append_left_axis(
    frame: &mut RenderFrame,
    scale: &dyn AxisScale,
    tick_count: usize,
    style: &AxisStyle,
) {
    let (range_start, range_end) = scale.range();
    frame.lines.push(LinePrimitive::new(
        0.0,
        range_start,
        0.0,
        range_end,
        AXIS_STROKE_WIDTH_PX,
        style.color,
    ));

    let ticks = scale.ticks(tick_count);
    let step = tick_step_of(&ticks);
    // Labels sit a quarter em left of the tick end and a quarter em below the
    // tick so the glyphs center on it.
    let em = style.font_size_px;
    let label_x = -AXIS_TICK_LENGTH_PX - 0.25 * em;
    for tick in ticks {
        let Ok(y) = scale.to_pixel(tick) else {
            continue;
        };
        frame.lines.push(LinePrimitive::new(
            0.0,
            y,
            -AXIS_TICK_LENGTH_PX,
            y,
            AXIS_STROKE_WIDTH_PX,
            style.color,
        ));
        frame.texts.push(
            TextPrimitive::new(
                format_value_label(tick, step),
                label_x,
                y + 0.25 * em,
                style.font_size_px,
                style.color,
                TextHAlign::Right,
            )
            .with_font_family(style.font_family.clone()),
        );
    }
}

fn tick_step_of(ticks: &TickValues) -> f64 {
    match ticks.as_slice() {
        [first, second, ..] => (second - first).abs(),
        _ => 1.0,
    }
}
