use serde::{Deserialize, Serialize};

use crate::core::curve::append_curve;
use crate::core::{AxisScale, Curve, DataPoint, PathCommand, Vertex};
use crate::error::ChartResult;

#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_MIN_POINTS: usize = 4_096;

/// Deterministic geometry for a closed area series.
///
/// `line` follows the mapped data points through the curve.
/// `fill` closes the same curve against `baseline_y`; it is both filled and
/// stroked when drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub vertices: Vec<Vertex>,
    pub line: Vec<PathCommand>,
    pub fill: Vec<PathCommand>,
    pub baseline_y: f64,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty(baseline_y: f64) -> Self {
        Self {
            vertices: Vec::new(),
            line: Vec::new(),
            fill: Vec::new(),
            baseline_y,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Projects points into closed-area geometry.
///
/// The baseline sits at the start of the y scale's range, which is the plot
/// bottom for a [`crate::core::LinearScale::vertical`] scale.
pub fn project_area_geometry(
    points: &[DataPoint],
    x_scale: &dyn AxisScale,
    y_scale: &dyn AxisScale,
    curve: Curve,
) -> ChartResult<AreaGeometry> {
    let baseline_y = y_scale.range().0;
    if points.is_empty() {
        return Ok(AreaGeometry::empty(baseline_y));
    }

    let vertices = project_vertices(points, x_scale, y_scale)?;

    let mut line = Vec::with_capacity(vertices.len());
    append_curve(&mut line, &vertices, curve);

    let first_x = vertices[0].x;
    let last_x = vertices[vertices.len() - 1].x;
    let mut fill = Vec::with_capacity(line.len() + 3);
    fill.extend(line.iter().copied());
    fill.push(PathCommand::LineTo {
        x: last_x,
        y: baseline_y,
    });
    fill.push(PathCommand::LineTo {
        x: first_x,
        y: baseline_y,
    });
    fill.push(PathCommand::Close);

    Ok(AreaGeometry {
        vertices,
        line,
        fill,
        baseline_y,
    })
}

fn project_vertex(
    point: &DataPoint,
    x_scale: &dyn AxisScale,
    y_scale: &dyn AxisScale,
) -> ChartResult<Vertex> {
    Ok(Vertex::new(
        x_scale.to_pixel(point.date)?,
        y_scale.to_pixel(point.close)?,
    ))
}

#[cfg(not(feature = "parallel-projection"))]
fn project_vertices(
    points: &[DataPoint],
    x_scale: &dyn AxisScale,
    y_scale: &dyn AxisScale,
) -> ChartResult<Vec<Vertex>> {
    points
        .iter()
        .map(|point| project_vertex(point, x_scale, y_scale))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_vertices(
    points: &[DataPoint],
    x_scale: &dyn AxisScale,
    y_scale: &dyn AxisScale,
) -> ChartResult<Vec<Vertex>> {
    use rayon::prelude::*;

    if points.len() < PARALLEL_PROJECTION_MIN_POINTS {
        return points
            .iter()
            .map(|point| project_vertex(point, x_scale, y_scale))
            .collect();
    }

    points
        .par_iter()
        .map(|point| project_vertex(point, x_scale, y_scale))
        .collect()
}
