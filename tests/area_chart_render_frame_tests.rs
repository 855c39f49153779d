use area_drag_chart::api::{AXIS_TICK_LENGTH_PX, GRADIENT_TO_OPACITY};
use area_drag_chart::core::{AxisScale, DataPoint, Margin, PathCommand, Series};
use area_drag_chart::render::{NullRenderer, Paint, TextHAlign};
use area_drag_chart::{AreaChart, AreaChartConfig, AreaChartScales};

fn series() -> Series {
    let points = (0..=10)
        .map(|index| DataPoint::new(index as f64 * 100.0, 10.0 + index as f64))
        .collect();
    Series::new(points).expect("valid series")
}

fn build_chart(config: AreaChartConfig) -> AreaChart<NullRenderer> {
    let visible = series();
    let scales = AreaChartScales::fit(&visible, config.width, config.y_max).expect("scales");
    let mut chart = AreaChart::new(NullRenderer::default(), config, scales).expect("chart");
    chart.set_series(visible.clone(), visible);
    chart
}

#[test]
fn frame_contains_area_and_both_axes() {
    let chart = build_chart(AreaChartConfig::new(500.0, 200.0, "#75daad"));
    let frame = chart.build_frame().expect("frame").expect("renderable");

    let bottom_ticks = chart.scales().x.ticks(5).len();
    let left_ticks = chart.scales().y.ticks(5).len();
    assert!(bottom_ticks > 1);
    assert!(left_ticks > 1);

    assert_eq!(frame.areas.len(), 1);
    assert_eq!(frame.lines.len(), (bottom_ticks + 1) + (left_ticks + 1));
    assert_eq!(frame.texts.len(), bottom_ticks + left_ticks);
    assert!(frame.validate().is_ok());
}

#[test]
fn wide_charts_ask_for_ten_bottom_ticks() {
    let narrow = build_chart(AreaChartConfig::new(520.0, 200.0, "#75daad"));
    let wide = build_chart(AreaChartConfig::new(521.0, 200.0, "#75daad"));
    assert_eq!(narrow.config().bottom_axis_tick_count(), 5);
    assert_eq!(wide.config().bottom_axis_tick_count(), 10);

    let frame = wide.build_frame().expect("frame").expect("renderable");
    let bottom_labels = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .count();
    assert_eq!(bottom_labels, wide.scales().x.ticks(10).len());
}

#[test]
fn narrow_chart_renders_nothing() {
    let mut chart = build_chart(AreaChartConfig::new(9.5, 200.0, "#75daad"));

    assert_eq!(chart.build_frame().expect("frame"), None);
    chart.render().expect("render is a no-op");
    assert_eq!(chart.renderer().frames_rendered, 0);
}

#[test]
fn hidden_axes_are_omitted() {
    let chart = build_chart(
        AreaChartConfig::new(500.0, 200.0, "#75daad").with_hidden_axes(true, false),
    );
    let frame = chart.build_frame().expect("frame").expect("renderable");
    assert!(
        frame
            .texts
            .iter()
            .all(|text| text.h_align == TextHAlign::Right)
    );

    let chart = build_chart(
        AreaChartConfig::new(500.0, 200.0, "#75daad").with_hidden_axes(true, true),
    );
    let frame = chart.build_frame().expect("frame").expect("renderable");
    assert!(frame.lines.is_empty());
    assert!(frame.texts.is_empty());
    assert_eq!(frame.areas.len(), 1);
}

#[test]
fn area_is_filled_and_stroked_with_a_fading_gradient() {
    let chart = build_chart(AreaChartConfig::new(500.0, 200.0, "#75daad"));
    let frame = chart.build_frame().expect("frame").expect("renderable");
    let area = &frame.areas[0];

    let Paint::LinearGradient(gradient) = &area.fill else {
        panic!("area fill should be a gradient");
    };
    assert_eq!(area.stroke.as_ref(), Some(&area.fill));
    assert!((area.stroke_width - 1.0).abs() <= 1e-9);

    assert_eq!(gradient.stops.len(), 2);
    assert!((gradient.stops[0].color.alpha - 1.0).abs() <= 1e-9);
    assert!((gradient.stops[1].color.alpha - GRADIENT_TO_OPACITY).abs() <= 1e-9);
    assert!(gradient.y1 < gradient.y2);
    assert!((gradient.stops[0].color.green - f64::from(0xda_u8) / 255.0).abs() <= 1e-9);
}

#[test]
fn area_path_closes_against_the_plot_bottom() {
    let chart = build_chart(AreaChartConfig::new(500.0, 200.0, "#75daad"));
    let frame = chart.build_frame().expect("frame").expect("renderable");
    let path = &frame.areas[0].path;

    assert!(matches!(path.first(), Some(PathCommand::MoveTo { x, .. }) if x.abs() <= 1e-9));
    assert_eq!(path.last(), Some(&PathCommand::Close));
    assert_eq!(
        path[path.len() - 2],
        PathCommand::LineTo { x: 0.0, y: 200.0 }
    );
    assert_eq!(
        path[path.len() - 3],
        PathCommand::LineTo { x: 500.0, y: 200.0 }
    );
}

#[test]
fn axis_geometry_follows_plot_size() {
    let chart = build_chart(
        AreaChartConfig::new(500.0, 200.0, "#75daad").with_hidden_axes(false, true),
    );
    let frame = chart.build_frame().expect("frame").expect("renderable");

    let domain_line = frame.lines[0];
    assert_eq!((domain_line.x1, domain_line.y1), (0.0, 200.0));
    assert_eq!((domain_line.x2, domain_line.y2), (500.0, 200.0));
    for tick in &frame.lines[1..] {
        assert!((tick.y2 - tick.y1 - AXIS_TICK_LENGTH_PX).abs() <= 1e-9);
        assert!((tick.x1 - tick.x2).abs() <= 1e-9);
    }
    assert!(frame.texts.iter().all(|text| text.font_family == "Arial"));
    assert!(frame.texts.iter().all(|text| text.color.alpha == 1.0));
}

#[test]
fn left_axis_labels_sit_left_of_the_ticks() {
    let chart = build_chart(
        AreaChartConfig::new(500.0, 200.0, "#75daad").with_hidden_axes(true, false),
    );
    let frame = chart.build_frame().expect("frame").expect("renderable");

    let domain_line = frame.lines[0];
    assert_eq!((domain_line.x1, domain_line.x2), (0.0, 0.0));
    for text in &frame.texts {
        assert!(text.x < -AXIS_TICK_LENGTH_PX);
        assert_eq!(text.h_align, TextHAlign::Right);
    }
    assert_eq!(frame.texts.first().map(|text| text.text.as_str()), Some("0"));
}

#[test]
fn group_origin_prefers_a_non_zero_container_offset() {
    let margin = Margin::new(12.0, 8.0, 30.0, 40.0);
    let from_margin =
        build_chart(AreaChartConfig::new(500.0, 200.0, "#75daad").with_margin(margin));
    let frame = from_margin.build_frame().expect("frame").expect("renderable");
    assert_eq!((frame.origin_x, frame.origin_y), (40.0, 12.0));
    assert_eq!(frame.viewport.width, 548.0);
    assert_eq!(frame.viewport.height, 242.0);

    let from_offset = build_chart(
        AreaChartConfig::new(500.0, 200.0, "#75daad")
            .with_margin(margin)
            .with_offset(64.0, 0.0),
    );
    let frame = from_offset.build_frame().expect("frame").expect("renderable");
    assert_eq!((frame.origin_x, frame.origin_y), (64.0, 12.0));
}

#[test]
fn render_hands_the_frame_to_the_renderer() {
    let mut chart = build_chart(AreaChartConfig::new(500.0, 200.0, "#75daad"));
    chart.render().expect("render");
    chart.render().expect("render");
    let expected = chart.build_frame().expect("frame").expect("renderable");
    assert_eq!(chart.renderer().last_frame(), Some(&expected));

    let mut renderer = chart.into_renderer();
    assert!(renderer.take_last_frame().is_some());
    assert!(renderer.last_frame().is_none());
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_area_count, 1);
    assert!(renderer.last_line_count > 0);
    assert!(renderer.last_text_count > 0);
}

#[test]
fn empty_visible_series_still_draws_axes() {
    let mut chart = build_chart(AreaChartConfig::new(500.0, 200.0, "#75daad"));
    chart.set_series(Series::empty(), series());

    let frame = chart.build_frame().expect("frame").expect("renderable");
    assert!(frame.areas.is_empty());
    assert!(!frame.lines.is_empty());
}

#[test]
fn year_long_bottom_axis_labels_month_starts() {
    // 2024-01-01T00:00:00Z
    const START_MS: f64 = 1_704_067_200_000.0;
    const DAY_MS: f64 = 86_400_000.0;
    let points = (0..366)
        .map(|day| DataPoint::new(START_MS + f64::from(day) * DAY_MS, 50.0))
        .collect();
    let visible = Series::new(points).expect("valid series");

    let config = AreaChartConfig::new(600.0, 200.0, "#75daad").with_hidden_axes(false, true);
    let scales = AreaChartScales::fit(&visible, config.width, config.y_max).expect("scales");
    let mut chart = AreaChart::new(NullRenderer::default(), config, scales).expect("chart");
    chart.set_series(visible.clone(), visible);

    let frame = chart.build_frame().expect("frame").expect("renderable");
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels.len(), 12);
    assert_eq!(labels.first().copied(), Some("Jan 01"));
    assert_eq!(labels.last().copied(), Some("Dec 01"));
    assert!(labels.iter().all(|label| label.ends_with(" 01")));
}
