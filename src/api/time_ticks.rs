use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
use crate::core::scale::tick_step;
use crate::core::{AxisScale, TickValues};

const DAY_MS: f64 = 86_400_000.0;
const AVERAGE_MONTH_DAYS: f64 = 30.44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalendarStep {
    Days(u32),
    Months(u32),
}

impl CalendarStep {
    fn approx_days(self) -> f64 {
        match self {
            Self::Days(days) => f64::from(days),
            Self::Months(months) => f64::from(months) * AVERAGE_MONTH_DAYS,
        }
    }
}

const CALENDAR_STEPS: [CalendarStep; 7] = [
    CalendarStep::Days(1),
    CalendarStep::Days(2),
    CalendarStep::Days(7),
    CalendarStep::Days(14),
    CalendarStep::Months(1),
    CalendarStep::Months(3),
    CalendarStep::Months(6),
];

/// Bottom-axis ticks for an epoch-millisecond scale.
///
/// Spans longer than a day snap to UTC midnights, month starts or January
/// firsts; shorter spans keep the scale's own 1-2-5 ticks.
pub(super) fn time_ticks(scale: &dyn AxisScale, count: usize) -> TickValues {
    let (start, end) = scale.domain();
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let calendar = count > 0 && hi - lo > DAY_MS && hi.is_finite() && lo.is_finite();
    if !calendar {
        return scale.ticks(count);
    }

    match calendar_ticks(lo, hi, count) {
        Some(mut ticks) if !ticks.is_empty() => {
            if start > end {
                ticks.reverse();
            }
            ticks
        }
        _ => scale.ticks(count),
    }
}

fn calendar_ticks(lo: f64, hi: f64, count: usize) -> Option<TickValues> {
    let target_days = (hi - lo) / DAY_MS / count as f64;
    // Past the geometric midpoint between half a year and a year, whole years win.
    if target_days >= (182.0_f64 * 365.0).sqrt() {
        return year_ticks(lo, hi, count);
    }

    let distance = |step: CalendarStep| (step.approx_days() / target_days).ln().abs();
    let step = CALENDAR_STEPS
        .into_iter()
        .min_by(|a, b| distance(*a).total_cmp(&distance(*b)))?;
    match step {
        CalendarStep::Days(days) => Some(day_ticks(lo, hi, days)),
        CalendarStep::Months(months) => month_ticks(lo, hi, months),
    }
}

fn day_ticks(lo: f64, hi: f64, days: u32) -> TickValues {
    let step = f64::from(days) * DAY_MS;
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|index| index as f64 * step).collect()
}

fn year_ticks(lo: f64, hi: f64, count: usize) -> Option<TickValues> {
    let lo_year = unix_millis_to_datetime(lo)?.year();
    let hi_year = unix_millis_to_datetime(hi)?.year();
    let years = tick_step(f64::from(lo_year), f64::from(hi_year), count)
        .map_or(1.0, |step| step.round().max(1.0));
    month_ticks(lo, hi, (years as u32).checked_mul(12)?)
}

/// Month starts whose index from year zero is a multiple of `months`.
fn month_ticks(lo: f64, hi: f64, months: u32) -> Option<TickValues> {
    let step = i32::try_from(months).ok().filter(|step| *step > 0)?;
    let start = unix_millis_to_datetime(lo)?;
    let mut index = month_index(start).div_euclid(step) * step;

    let mut ticks = TickValues::new();
    loop {
        let millis = month_start_millis(index)?;
        if millis > hi {
            break;
        }
        if millis >= lo {
            ticks.push(millis);
        }
        index = index.checked_add(step)?;
    }
    Some(ticks)
}

fn month_index(time: DateTime<Utc>) -> i32 {
    time.year() * 12 + time.month0() as i32
}

fn month_start_millis(index: i32) -> Option<f64> {
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let start = NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .and_utc();
    Some(datetime_to_unix_millis(start))
}
