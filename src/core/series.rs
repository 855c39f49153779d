use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, DomainWindow, Timestamp};
use crate::error::{ChartError, ChartResult};

/// Chronological sequence of observations.
///
/// The first and last points define the time extent. An empty series is a
/// valid value; consumers treat it as "nothing to draw / nothing to map".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    /// Builds a series, rejecting non-finite values and out-of-order dates.
    pub fn new(points: Vec<DataPoint>) -> ChartResult<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series point {index} must have finite date and close"
                )));
            }
            if index > 0 && point.date < points[index - 1].date {
                return Err(ChartError::InvalidData(format!(
                    "series point {index} is older than its predecessor"
                )));
            }
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first_timestamp(&self) -> Option<Timestamp> {
        self.points.first().map(|point| point.date)
    }

    #[must_use]
    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.points.last().map(|point| point.date)
    }

    /// `(first, last)` timestamps.
    #[must_use]
    pub fn extent(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.first_timestamp()?, self.last_timestamp()?))
    }

    /// `(min, max)` of the close values.
    #[must_use]
    pub fn close_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let mut min = first.close;
        let mut max = first.close;
        for point in &self.points[1..] {
            min = min.min(point.close);
            max = max.max(point.close);
        }
        Some((min, max))
    }

    /// Points whose date falls inside `window`, bounds included.
    #[must_use]
    pub fn slice_window(&self, window: DomainWindow) -> Series {
        let start = self.points.partition_point(|point| point.date < window.new_min);
        let end = self.points.partition_point(|point| point.date <= window.new_max);
        let points = if start < end {
            self.points[start..end].to_vec()
        } else {
            Vec::new()
        };
        debug!(
            min = window.new_min,
            max = window.new_max,
            count = points.len(),
            "slice series window"
        );
        Series { points }
    }
}

impl TryFrom<Vec<DataPoint>> for Series {
    type Error = ChartError;

    fn try_from(points: Vec<DataPoint>) -> ChartResult<Self> {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::Series;
    use crate::core::{DataPoint, DomainWindow};

    fn sample() -> Series {
        Series::new(vec![
            DataPoint::new(0.0, 3.0),
            DataPoint::new(10.0, 1.0),
            DataPoint::new(20.0, 7.0),
            DataPoint::new(30.0, 4.0),
        ])
        .expect("series")
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let err = Series::new(vec![DataPoint::new(10.0, 1.0), DataPoint::new(5.0, 1.0)])
            .expect_err("unordered");
        assert!(format!("{err}").contains("older than its predecessor"));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(Series::new(vec![DataPoint::new(f64::NAN, 1.0)]).is_err());
        assert!(Series::new(vec![DataPoint::new(1.0, f64::INFINITY)]).is_err());
    }

    #[test]
    fn extents_follow_first_last_and_close_range() {
        let series = sample();
        assert_eq!(series.extent(), Some((0.0, 30.0)));
        assert_eq!(series.close_extent(), Some((1.0, 7.0)));
        assert_eq!(Series::empty().extent(), None);
    }

    #[test]
    fn slice_window_is_inclusive() {
        let sliced = sample().slice_window(DomainWindow::new(10.0, 20.0));
        assert_eq!(sliced.len(), 2);
        assert_eq!(sliced.extent(), Some((10.0, 20.0)));

        let none = sample().slice_window(DomainWindow::new(11.0, 19.0));
        assert!(none.is_empty());
    }
}
