use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Inline buffer for axis tick values; axes rarely ask for more than a dozen.
pub type TickValues = SmallVec<[f64; 16]>;

/// Bijection between a data domain and pixel coordinates.
///
/// Implemented by [`LinearScale`]; hosts may supply their own mapping
/// (log, band, etc.) as long as it is monotonic over the domain.
pub trait AxisScale: Send + Sync {
    fn domain(&self) -> (f64, f64);

    fn range(&self) -> (f64, f64);

    fn to_pixel(&self, value: f64) -> ChartResult<f64>;

    fn to_domain(&self, pixel: f64) -> ChartResult<f64>;

    /// Human-friendly tick values inside the domain; `count` is a hint.
    fn ticks(&self, count: usize) -> TickValues;
}

/// Continuous linear scale from `domain` to `range`.
///
/// A degenerate domain maps every value to the middle of the range and a
/// degenerate range maps every pixel back to the domain start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Left-to-right scale over `[0, width_px]`.
    pub fn horizontal(domain_start: f64, domain_end: f64, width_px: f64) -> ChartResult<Self> {
        Self::new(domain_start, domain_end, 0.0, width_px)
    }

    /// Bottom-to-top scale over `[height_px, 0]`, so larger values sit higher.
    pub fn vertical(domain_start: f64, domain_end: f64, height_px: f64) -> ChartResult<Self> {
        Self::new(domain_start, domain_end, height_px, 0.0)
    }

    /// Extends the domain outward to multiples of the tick step for `count` ticks.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        let Some(step) = tick_step(lo, hi, count) else {
            return self;
        };
        let nice_lo = (lo / step).floor() * step;
        let nice_hi = (hi / step).ceil() * step;
        let (domain_start, domain_end) = if self.domain_start <= self.domain_end {
            (nice_lo, nice_hi)
        } else {
            (nice_hi, nice_lo)
        };
        Self {
            domain_start,
            domain_end,
            ..self
        }
    }
}

impl AxisScale for LinearScale {
    fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    fn to_pixel(&self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    fn to_domain(&self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    fn ticks(&self, count: usize) -> TickValues {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        let mut ticks = nice_ticks(lo, hi, count);
        if self.domain_start > self.domain_end {
            ticks.reverse();
        }
        ticks
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// 1-2-5 step covering `[lo, hi]` in roughly `count` intervals.
pub(crate) fn tick_step(lo: f64, hi: f64, count: usize) -> Option<f64> {
    if count == 0 || !lo.is_finite() || !hi.is_finite() || hi <= lo {
        return None;
    }

    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw / magnitude;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let step = factor * magnitude;
    step.is_finite().then_some(step)
}

pub(crate) fn nice_ticks(lo: f64, hi: f64, count: usize) -> TickValues {
    let mut ticks = TickValues::new();
    if count == 0 || !lo.is_finite() || !hi.is_finite() {
        return ticks;
    }
    if lo == hi {
        ticks.push(lo);
        return ticks;
    }
    let Some(step) = tick_step(lo, hi, count) else {
        return ticks;
    };

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    // Dividing by the inverse step keeps fractional ticks free of
    // accumulated float noise (0.30000000000000004 and friends).
    let inverse = if step < 1.0 { Some((1.0 / step).round()) } else { None };
    for index in first..=last {
        let value = match inverse {
            Some(inverse) => index as f64 / inverse,
            None => index as f64 * step,
        };
        ticks.push(value);
    }
    ticks
}
