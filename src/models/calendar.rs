use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The official work schedule applicable to one calendar date.
///
/// Rows are produced at calendar-generation time and are immutable once the
/// date has passed; an accepted time-off request may supersede the fields at
/// assembly time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub business_day: bool,
    pub holiday: Option<String>,
    pub begin: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
}

impl ScheduleDay {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.business_day {
            if self.holiday.as_deref().is_some_and(|label| !label.is_empty()) {
                return Err(CoreError::invalid_schedule(format!(
                    "{}: a business day must not carry a holiday label",
                    self.date
                )));
            }
            let (Some(begin), Some(end)) = (self.begin, self.end) else {
                return Err(CoreError::invalid_schedule(format!(
                    "{}: a business day requires begin and end times",
                    self.date
                )));
            };
            if end < begin {
                return Err(CoreError::invalid_schedule(format!(
                    "{}: scheduled end is before scheduled begin",
                    self.date
                )));
            }
            match (self.break_start, self.break_end) {
                (None, None) => {}
                (Some(break_start), Some(break_end)) => {
                    if break_end < break_start {
                        return Err(CoreError::invalid_schedule(format!(
                            "{}: break end is before break start",
                            self.date
                        )));
                    }
                    if break_start < begin || end < break_end {
                        return Err(CoreError::invalid_schedule(format!(
                            "{}: break window falls outside the scheduled span",
                            self.date
                        )));
                    }
                }
                _ => {
                    return Err(CoreError::invalid_schedule(format!(
                        "{}: break start and break end must be set together",
                        self.date
                    )));
                }
            }
        } else {
            if !self.holiday.as_deref().is_some_and(|label| !label.is_empty()) {
                return Err(CoreError::invalid_schedule(format!(
                    "{}: a non-business day requires a holiday label",
                    self.date
                )));
            }
            if self.begin.is_some()
                || self.end.is_some()
                || self.break_start.is_some()
                || self.break_end.is_some()
            {
                return Err(CoreError::invalid_schedule(format!(
                    "{}: a non-business day must not carry schedule times",
                    self.date
                )));
            }
        }
        Ok(())
    }
}
