//! area-drag-chart: headless area chart with drag-to-pan time windows.
//!
//! Pointer drags over the plot are mapped to a new visible time window and
//! reported to the host; windows that would leave the reference series are
//! rejected rather than clamped. Drawing goes through a backend-agnostic
//! `RenderFrame`, with optional Cairo and GTK4 adapters.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{AreaChart, AreaChartConfig, AreaChartScales};
pub use error::{ChartError, ChartResult};
