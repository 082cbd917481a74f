use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::reconciliation::DayReconciliation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffLink {
    pub id: i64,
    pub accepted: bool,
}

/// One assembled row of the monthly report: the effective schedule for the
/// date, the punch aggregation, the time-off linkage, and the computed
/// reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub date: NaiveDate,
    /// Display label for the day. Carries the time-off label and pending
    /// marker; never consulted by the minute computation.
    pub holiday: Option<String>,
    pub business_day: bool,
    pub begin: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub begin_record: Option<NaiveTime>,
    pub end_record: Option<NaiveTime>,
    pub time_off: Option<TimeOffLink>,
    pub outcome: DayReconciliation,
}
