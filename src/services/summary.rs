use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{MonthlyRecord, PeriodSummary, TimeOffRequest, TimeOffStatus};
use crate::timeunit::{Rounding, minutes_to_hours};

/// Folds a period of assembled records into one summary.
///
/// Error days carry zeroed minute fields, so the fold reads every record
/// uniformly and never fails.
pub fn summarize(records: &[MonthlyRecord], hour_precision: i64) -> PeriodSummary {
    let mut summary = PeriodSummary::default();

    for record in records {
        summary.days += 1;
        if record.business_day {
            summary.business_days += 1;
        }
        if record.outcome.has_activity {
            summary.activity_days += 1;
        }
        if record.outcome.error.is_some() {
            summary.error_count += 1;
        }
        if record.outcome.behind_minutes > 0 {
            summary.behind_minutes += record.outcome.behind_minutes;
            summary.behind_count += 1;
        }
        if record.outcome.early_minutes > 0 {
            summary.early_minutes += record.outcome.early_minutes;
            summary.early_count += 1;
        }
        if record.outcome.overtime_minutes > 0 {
            summary.overtime_minutes += record.outcome.overtime_minutes;
            summary.overtime_count += 1;
        }
        if let Some(time_off) = &record.time_off {
            summary.time_off_count += 1;
            if !time_off.accepted {
                summary.time_off_pending_count += 1;
            }
        }
    }

    // Shortfall rounds down, excess rounds up: the reported figure never
    // understates either.
    summary.behind_hours =
        minutes_to_hours(summary.behind_minutes, hour_precision, Rounding::Floor);
    summary.early_hours =
        minutes_to_hours(summary.early_minutes, hour_precision, Rounding::Ceiling);
    summary.overtime_hours =
        minutes_to_hours(summary.overtime_minutes, hour_precision, Rounding::Ceiling);

    summary
}

/// Counts non-cancelled time-off requests per label inside `[begin, end)`.
///
/// Feeds the per-label usage column of the annual report.
pub fn count_time_off_by_label(
    requests: &[TimeOffRequest],
    range: (NaiveDate, NaiveDate),
) -> BTreeMap<String, i64> {
    let (begin, end) = range;
    let mut counts = BTreeMap::new();
    for request in requests {
        if request.status == TimeOffStatus::Cancelled {
            continue;
        }
        if begin <= request.date && request.date < end {
            *counts.entry(request.label.clone()).or_insert(0) += 1;
        }
    }
    counts
}
