pub mod area;
pub mod curve;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;

pub use area::{AreaGeometry, project_area_geometry};
pub use curve::{Curve, PathCommand, Vertex, append_curve};
pub use scale::{AxisScale, LinearScale, TickValues};
pub use series::Series;
pub use types::{DataPoint, DomainWindow, DragPoint, Margin, Timestamp, Viewport};
