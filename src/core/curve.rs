use serde::{Deserialize, Serialize};

/// Pixel-space vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Backend-neutral path command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => [c1x, c1y, c2x, c2y, x, y].iter().all(|v| v.is_finite()),
            Self::Close => true,
        }
    }
}

/// Interpolation used between consecutive vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    Linear,
    /// Monotone cubic interpolation in x: preserves monotonicity of the data
    /// and never overshoots between samples.
    #[default]
    MonotoneX,
}

/// Appends the path through `vertices`, starting with a `MoveTo`.
pub fn append_curve(commands: &mut Vec<PathCommand>, vertices: &[Vertex], curve: Curve) {
    let Some(first) = vertices.first() else {
        return;
    };
    commands.push(PathCommand::MoveTo {
        x: first.x,
        y: first.y,
    });

    if vertices.len() < 3 || curve == Curve::Linear {
        for vertex in &vertices[1..] {
            commands.push(PathCommand::LineTo {
                x: vertex.x,
                y: vertex.y,
            });
        }
        return;
    }

    let tangents = monotone_tangents(vertices);
    for index in 1..vertices.len() {
        let from = vertices[index - 1];
        let to = vertices[index];
        let dx = (to.x - from.x) / 3.0;
        commands.push(PathCommand::CubicTo {
            c1x: from.x + dx,
            c1y: from.y + dx * tangents[index - 1],
            c2x: to.x - dx,
            c2y: to.y - dx * tangents[index],
            x: to.x,
            y: to.y,
        });
    }
}

/// Tangent per vertex; requires at least three vertices.
fn monotone_tangents(vertices: &[Vertex]) -> Vec<f64> {
    let last = vertices.len() - 1;
    let mut tangents = vec![0.0; vertices.len()];
    for index in 1..last {
        tangents[index] =
            interior_tangent(vertices[index - 1], vertices[index], vertices[index + 1]);
    }
    tangents[0] = endpoint_tangent(vertices[0], vertices[1], tangents[1]);
    tangents[last] = endpoint_tangent(vertices[last - 1], vertices[last], tangents[last - 1]);
    tangents
}

fn interior_tangent(prev: Vertex, current: Vertex, next: Vertex) -> f64 {
    let h0 = current.x - prev.x;
    let h1 = next.x - current.x;
    if h0 == 0.0 || h1 == 0.0 || h0 + h1 == 0.0 {
        return 0.0;
    }
    let s0 = (current.y - prev.y) / h0;
    let s1 = (next.y - current.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

fn endpoint_tangent(from: Vertex, to: Vertex, neighbor_tangent: f64) -> f64 {
    let h = to.x - from.x;
    if h == 0.0 {
        return neighbor_tangent;
    }
    (3.0 * (to.y - from.y) / h - neighbor_tangent) / 2.0
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
