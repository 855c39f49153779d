mod area_chart;
mod axis;
mod chart_config;
mod label_format;
mod time_ticks;

pub use area_chart::{AreaChart, AreaChartScales};
pub use chart_config::{
    AREA_STROKE_WIDTH_PX, AXIS_TICK_LENGTH_PX, AreaChartConfig, GRADIENT_FROM_OPACITY,
    GRADIENT_TO_OPACITY, LEFT_AXIS_TICK_COUNT, MIN_RENDER_WIDTH_PX, ResolvedChartColors,
    WIDE_AXIS_THRESHOLD_PX,
};
