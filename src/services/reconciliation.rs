use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};

use crate::models::{DayReconciliation, PunchError, PunchPair, ScheduleDay};
use crate::timeunit::{floor_to_threshold, minute_delta, minute_delta_or_zero};

/// Minute noise floors below which a category is not reported.
///
/// All zero by default, which reports every minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thresholds {
    pub behind: i64,
    pub early: i64,
    pub overtime: i64,
}

/// Validates one day's punches against the effective schedule and computes
/// the behind/early/overtime minute figures.
///
/// `today` is an explicit input so results are deterministic under test.
/// Validation failures come back as the record's `error` value; the
/// function itself never fails.
pub fn reconcile(
    day: &ScheduleDay,
    punches: &PunchPair,
    today: NaiveDate,
    limits: &Thresholds,
) -> DayReconciliation {
    let mut result = DayReconciliation {
        is_past: day.date < today,
        is_future: today < day.date,
        has_activity: punches.begin.is_some() || punches.end.is_some(),
        behind_minutes: 0,
        early_minutes: 0,
        overtime_minutes: 0,
        error: None,
    };

    let (begin_record, end_record) = match day.date.cmp(&today) {
        Ordering::Greater => {
            // Nothing may be punched on a day that has not arrived.
            if result.has_activity {
                result.error = Some(PunchError::FuturePunch);
            }
            return result;
        }
        Ordering::Equal => match (punches.begin, punches.end) {
            (Some(begin), Some(end)) => (begin, end),
            // Still clocked in, or not yet in: settled once the day is past.
            _ => return result,
        },
        Ordering::Less => match (punches.begin, punches.end) {
            (None, None) => {
                if day.business_day {
                    result.error = Some(PunchError::MissingBoth);
                }
                return result;
            }
            (Some(_), None) => {
                result.error = Some(PunchError::MissingEnd);
                return result;
            }
            (None, Some(_)) => {
                result.error = Some(PunchError::MissingBegin);
                return result;
            }
            (Some(begin), Some(end)) => (begin, end),
        },
    };

    if end_record < begin_record {
        result.error = Some(PunchError::OrderInvalid);
        return result;
    }

    // A worked non-business day is entirely extra time.
    if !day.business_day {
        result.overtime_minutes =
            floor_to_threshold(limits.overtime, minute_delta(begin_record, end_record));
        return result;
    }

    // Scheduled minutes not covered by the punch span, per section. Schedule
    // rows are validated at assembly time; a business day with bare times
    // degrades to zero-length sections here.
    let shortfall = |start: Option<NaiveTime>, end: Option<NaiveTime>| {
        let total = minute_delta_or_zero(start, end);
        let covered = minute_delta_or_zero(
            start.map(|section_start| section_start.max(begin_record)),
            end.map(|section_end| section_end.min(end_record)),
        )
        .max(0);
        total - covered
    };

    let behind = match (day.break_start, day.break_end) {
        (Some(break_start), Some(break_end)) => {
            shortfall(day.begin, Some(break_start)) + shortfall(Some(break_end), day.end)
        }
        _ => shortfall(day.begin, day.end),
    };
    result.behind_minutes = floor_to_threshold(limits.behind, behind);

    // Time worked before the scheduled start, capped so it never counts
    // time past it.
    result.early_minutes = floor_to_threshold(
        limits.early,
        minute_delta_or_zero(
            Some(begin_record),
            day.begin.map(|scheduled_begin| scheduled_begin.min(end_record)),
        )
        .max(0),
    );

    // Time worked after the scheduled end; a begin punch already past the
    // scheduled end moves the baseline so the span is not counted twice.
    result.overtime_minutes = floor_to_threshold(
        limits.overtime,
        minute_delta_or_zero(
            day.end.map(|scheduled_end| scheduled_end.max(begin_record)),
            Some(end_record),
        )
        .max(0),
    );

    result
}
