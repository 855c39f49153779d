use area_drag_chart::ChartResult;
use area_drag_chart::api::{AreaChart, AreaChartConfig, AreaChartScales};
use area_drag_chart::core::{DataPoint, DomainWindow, Margin, Series};
use area_drag_chart::platform_gtk::GtkAreaChart;
use area_drag_chart::render::{CairoRenderer, Color};
use gtk::prelude::*;
use gtk4 as gtk;
use tracing::info;

const DAY_MS: f64 = 86_400_000.0;
const START_MS: f64 = 1_704_067_200_000.0; // 2024-01-01T00:00:00Z

fn main() -> gtk::glib::ExitCode {
    let _ = area_drag_chart::telemetry::init_tracing_with_filter("area_drag_chart=debug,info");

    let app = gtk::Application::builder()
        .application_id("io.github.area_drag_chart.demo")
        .build();
    app.connect_activate(build_ui);
    app.run()
}

fn build_ui(app: &gtk::Application) {
    let margin = Margin::new(20.0, 20.0, 40.0, 60.0);
    let config = AreaChartConfig::new(720.0, 360.0, "#75daad")
        .with_margin(margin)
        .with_height(420.0);

    let chart = match build_chart(config) {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("error: {err}");
            return;
        }
    };
    let view = GtkAreaChart::new(chart, true);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("area-drag-chart")
        .default_width(800)
        .default_height(420)
        .child(view.widget())
        .build();
    window.present();
}

fn build_chart(config: AreaChartConfig) -> ChartResult<AreaChart<CairoRenderer>> {
    let full = synthetic_series(365)?;
    let visible = full.slice_window(DomainWindow::new(
        START_MS + 200.0 * DAY_MS,
        START_MS + 290.0 * DAY_MS,
    ));

    let viewport = config.viewport();
    let mut renderer = CairoRenderer::new(viewport.width as i32, viewport.height as i32)?;
    renderer.set_clear_color(Some(Color::rgb(0.13, 0.15, 0.22)))?;

    let scales = AreaChartScales::fit(&visible, config.width, config.y_max)?;
    let mut chart = AreaChart::new(renderer, config, scales)?;
    chart.set_series(visible, full);
    chart.on_domain_change(|window: DomainWindow| {
        info!(new_min = window.new_min, new_max = window.new_max, "domain change");
    });
    Ok(chart)
}

fn synthetic_series(days: usize) -> ChartResult<Series> {
    let points = (0..days)
        .map(|day| {
            let t = day as f64;
            let close = 120.0 + 0.15 * t + 12.0 * (t / 17.0).sin() + 4.0 * (t / 3.0).cos();
            DataPoint::new(START_MS + t * DAY_MS, close)
        })
        .collect();
    Series::new(points)
}
