use crate::core::primitives::unix_millis_to_datetime;

const MINUTE_MS: f64 = 60_000.0;
const DAY_MS: f64 = 86_400_000.0;

/// Formats an epoch-millisecond tick for a time axis spanning `visible_span_ms`.
pub(super) fn format_time_label(millis: f64, visible_span_ms: f64) -> String {
    let Some(time) = unix_millis_to_datetime(millis) else {
        return format!("{millis:.0}");
    };
    let span = visible_span_ms.abs();
    let pattern = if span <= 10.0 * MINUTE_MS {
        "%H:%M:%S"
    } else if span <= 2.0 * DAY_MS {
        "%H:%M"
    } else if span <= 365.0 * DAY_MS {
        "%b %d"
    } else {
        "%b %Y"
    };
    time.format(pattern).to_string()
}

/// Formats a value tick with as many decimals as the tick step needs.
pub(super) fn format_value_label(value: f64, tick_step: f64) -> String {
    let decimals = if tick_step.is_finite() && tick_step > 0.0 && tick_step < 1.0 {
        (-tick_step.log10() - 1e-9).ceil().clamp(0.0, 12.0) as usize
    } else {
        0
    };
    // Avoid "-0" for ticks that land on zero after rounding.
    let value = if value.abs() < 0.5 * 10f64.powi(-(decimals as i32)) {
        0.0
    } else {
        value
    };
    format!("{value:.decimals$}")
}
