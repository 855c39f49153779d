use std::fs::{self, File};
use std::path::PathBuf;

use area_drag_chart::api::{AreaChart, AreaChartConfig, AreaChartScales};
use area_drag_chart::core::primitives::datetime_to_unix_millis;
use area_drag_chart::core::{DataPoint, DomainWindow, Series};
use area_drag_chart::interaction::PointerEvent;
use area_drag_chart::render::{CairoRenderer, Color};
use chrono::{DateTime, Utc};

const DEFAULT_OUTPUT_PATH: &str = "area_chart.png";

#[derive(Debug)]
struct CliArgs {
    config_path: PathBuf,
    data_path: PathBuf,
    output_path: PathBuf,
    window: Option<DomainWindow>,
    drag_px: Option<f64>,
    background: Option<String>,
}

fn main() {
    let _ = area_drag_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw_config = fs::read_to_string(&args.config_path).map_err(|err| {
        format!(
            "failed to read config `{}`: {err}",
            args.config_path.display()
        )
    })?;
    let config = AreaChartConfig::from_json_str(&raw_config).map_err(|err| err.to_string())?;

    let raw_data = fs::read_to_string(&args.data_path)
        .map_err(|err| format!("failed to read data `{}`: {err}", args.data_path.display()))?;
    let full = Series::new(parse_csv(&raw_data)?).map_err(|err| err.to_string())?;
    let visible = match args.window {
        Some(window) => full.slice_window(window),
        None => full.clone(),
    };
    if visible.is_empty() {
        return Err("no data points inside the requested window".to_owned());
    }

    let scales =
        AreaChartScales::fit(&visible, config.width, config.y_max).map_err(|err| err.to_string())?;
    let viewport = config.viewport();
    let width = viewport.width.ceil() as i32;
    let height = viewport.height.ceil() as i32;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    if let Some(background) = &args.background {
        let color = Color::from_hex(background).map_err(|err| err.to_string())?;
        renderer
            .set_clear_color(Some(color))
            .map_err(|err| err.to_string())?;
    }

    let mut chart = AreaChart::new(renderer, config, scales).map_err(|err| err.to_string())?;
    chart.set_series(visible, full);

    if let Some(drag_px) = args.drag_px {
        let (origin_x, origin_y) = chart.config().group_origin();
        chart.pointer_down(PointerEvent::at(origin_x, origin_y));
        let resolution =
            chart.pointer_up(PointerEvent::with_delta(origin_x, origin_y, drag_px, 0.0));
        let json = serde_json::to_string(&resolution)
            .map_err(|err| format!("failed to serialize drag resolution: {err}"))?;
        println!("drag {drag_px}px -> {json}");
        if let Some(window) = resolution.and_then(|resolution| resolution.accepted()) {
            chart
                .apply_domain_window(window)
                .map_err(|err| err.to_string())?;
        }
    }

    chart.render().map_err(|err| err.to_string())?;
    let renderer = chart.into_renderer();

    if let Some(parent) = args.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!("failed to create output dir `{}`: {err}", parent.display())
            })?;
        }
    }
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create png `{}`: {err}",
            args.output_path.display()
        )
    })?;
    renderer.write_png(&mut file).map_err(|err| err.to_string())?;

    let stats = renderer.last_stats();
    println!(
        "wrote {} ({} area, {} lines, {} labels)",
        args.output_path.display(),
        stats.areas_drawn,
        stats.lines_drawn,
        stats.texts_drawn
    );
    Ok(())
}

/// `date,close` rows; dates are RFC 3339 or epoch milliseconds. A header row
/// and blank lines are skipped.
fn parse_csv(input: &str) -> Result<Vec<DataPoint>, String> {
    let mut points = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || (index == 0 && line.to_ascii_lowercase().starts_with("date")) {
            continue;
        }
        let (date, close) = line
            .split_once(',')
            .ok_or_else(|| format!("line {}: expected `date,close`", index + 1))?;
        let date = parse_date(date.trim()).ok_or_else(|| {
            format!("line {}: unsupported date `{}`", index + 1, date.trim())
        })?;
        let close: f64 = close
            .trim()
            .parse()
            .map_err(|err| format!("line {}: invalid close: {err}", index + 1))?;
        points.push(DataPoint::new(date, close));
    }
    Ok(points)
}

fn parse_date(value: &str) -> Option<f64> {
    if let Ok(millis) = value.parse::<f64>() {
        return Some(millis);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|time| datetime_to_unix_millis(time.with_timezone(&Utc)))
}

fn parse_window(value: &str) -> Result<DomainWindow, String> {
    let (min, max) = value
        .split_once(',')
        .ok_or_else(|| "--window expects `<min>,<max>`".to_owned())?;
    let min = parse_date(min.trim()).ok_or_else(|| format!("invalid window start `{min}`"))?;
    let max = parse_date(max.trim()).ok_or_else(|| format!("invalid window end `{max}`"))?;
    Ok(DomainWindow::new(min, max))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut data_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut window = None;
    let mut drag_px = None;
    let mut background = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--config" => config_path = Some(PathBuf::from(value("--config")?)),
            "--data" => data_path = Some(PathBuf::from(value("--data")?)),
            "--output" => output_path = PathBuf::from(value("--output")?),
            "--window" => window = Some(parse_window(&value("--window")?)?),
            "--drag-px" => {
                let raw = value("--drag-px")?;
                drag_px = Some(
                    raw.parse::<f64>()
                        .map_err(|err| format!("invalid --drag-px `{raw}`: {err}"))?,
                );
            }
            "--background" => background = Some(value("--background")?),
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        config_path: config_path
            .ok_or_else(|| format!("missing --config\n\n{}", usage_message()))?,
        data_path: data_path.ok_or_else(|| format!("missing --data\n\n{}", usage_message()))?,
        output_path,
        window,
        drag_px,
        background,
    })
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_area_chart_png -- --config <json> --data <csv> [options]\n\nOptions:\n  --output <path>        PNG output path (default: {DEFAULT_OUTPUT_PATH})\n  --window <min>,<max>   Visible window (epoch ms or RFC 3339)\n  --drag-px <px>         Simulate a horizontal drag before rendering\n  --background <#hex>    Clear color painted under the chart\n  -h, --help             Show this message"
    )
}
