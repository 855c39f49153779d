use approx::assert_abs_diff_eq;
use area_drag_chart::core::{
    AxisScale, Curve, DataPoint, LinearScale, PathCommand, Vertex, project_area_geometry,
};

fn points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(10.0, 50.0),
        DataPoint::new(20.0, 50.0),
        DataPoint::new(30.0, 100.0),
    ]
}

fn scales() -> (LinearScale, LinearScale) {
    (
        LinearScale::horizontal(0.0, 30.0, 300.0).expect("x scale"),
        LinearScale::vertical(0.0, 100.0, 200.0).expect("y scale"),
    )
}

#[test]
fn linear_area_maps_points_and_closes_on_the_baseline() {
    let (x, y) = scales();
    let geometry = project_area_geometry(&points(), &x, &y, Curve::Linear).expect("geometry");

    assert_eq!(
        geometry.vertices,
        vec![
            Vertex::new(0.0, 200.0),
            Vertex::new(100.0, 100.0),
            Vertex::new(200.0, 100.0),
            Vertex::new(300.0, 0.0),
        ]
    );
    assert_eq!(geometry.baseline_y, 200.0);
    assert_eq!(
        geometry.line,
        vec![
            PathCommand::MoveTo { x: 0.0, y: 200.0 },
            PathCommand::LineTo { x: 100.0, y: 100.0 },
            PathCommand::LineTo { x: 200.0, y: 100.0 },
            PathCommand::LineTo { x: 300.0, y: 0.0 },
        ]
    );
    assert_eq!(
        &geometry.fill[geometry.line.len()..],
        &[
            PathCommand::LineTo { x: 300.0, y: 200.0 },
            PathCommand::LineTo { x: 0.0, y: 200.0 },
            PathCommand::Close,
        ]
    );
}

#[test]
fn monotone_area_passes_through_every_vertex() {
    let (x, y) = scales();
    let geometry = project_area_geometry(&points(), &x, &y, Curve::MonotoneX).expect("geometry");

    assert_eq!(geometry.line.len(), points().len());
    let mut ends = geometry.line.iter().filter_map(|command| match *command {
        PathCommand::MoveTo { x, y } | PathCommand::CubicTo { x, y, .. } => Some((x, y)),
        _ => None,
    });
    for vertex in &geometry.vertices {
        let (x, y) = ends.next().expect("one command per vertex");
        assert_abs_diff_eq!(x, vertex.x, epsilon = 1e-9);
        assert_abs_diff_eq!(y, vertex.y, epsilon = 1e-9);
    }
}

#[test]
fn monotone_area_keeps_the_plateau_flat() {
    let (x, y) = scales();
    let geometry = project_area_geometry(&points(), &x, &y, Curve::MonotoneX).expect("geometry");

    // Segment 10..20 is flat in data; both control points must stay on it.
    let PathCommand::CubicTo { c1y, c2y, y, .. } = geometry.line[2] else {
        panic!("expected a cubic segment, got {:?}", geometry.line[2]);
    };
    assert_abs_diff_eq!(c1y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c2y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 100.0, epsilon = 1e-9);
}

#[test]
fn empty_points_produce_empty_geometry() {
    let (x, y) = scales();
    let geometry = project_area_geometry(&[], &x, &y, Curve::MonotoneX).expect("geometry");
    assert!(geometry.is_empty());
    assert!(geometry.fill.is_empty());
    assert_eq!(geometry.baseline_y, y.range().0);
}

#[test]
fn non_finite_points_are_rejected() {
    let (x, y) = scales();
    let points = [DataPoint::new(0.0, f64::NAN)];
    assert!(project_area_geometry(&points, &x, &y, Curve::Linear).is_err());
}
