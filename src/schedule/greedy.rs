use log::debug;
use super::types::{Schedule, SelectedInterval, Selection};

/// Picks the largest set of non-overlapping intervals from two parallel lists.
///
/// `starts` and `ends` must have the same length; the form and CSV layers
/// reject mismatched input before calling this. The result is in acceptance
/// order, i.e. ascending end time, not input order.
pub fn select(starts: &[i64], ends: &[i64]) -> Vec<(i64, i64)> {
    select_schedule(&Schedule::zip(starts, ends)).pairs()
}

/// Earliest-finish-time greedy over a schedule.
///
/// Intervals are visited in ascending end order (stable, so equal ends keep
/// their input order). An interval is accepted when it starts at or after the
/// end of the last accepted one; the watermark starts at 0. Rejected intervals
/// are never revisited.
pub fn select_schedule(schedule: &Schedule) -> Selection {
    let mut order: Vec<usize> = (0..schedule.len()).collect();
    order.sort_by_key(|&i| schedule.intervals[i].end);

    let mut picks = Vec::new();
    let mut last_end = 0i64;

    for index in order {
        let interval = schedule.intervals[index];
        if interval.start >= last_end {
            picks.push(SelectedInterval { index, interval });
            last_end = interval.end;
        }
    }

    debug!("selected {} of {} intervals", picks.len(), schedule.len());
    Selection { picks }
}
