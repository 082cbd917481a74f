use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOffStatus {
    Pending,
    Accepted,
    Cancelled,
}

impl std::fmt::Display for TimeOffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOffStatus::Pending => write!(f, "pending"),
            TimeOffStatus::Accepted => write!(f, "accepted"),
            TimeOffStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for TimeOffStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TimeOffStatus::Pending),
            "accepted" => Ok(TimeOffStatus::Accepted),
            "cancelled" => Ok(TimeOffStatus::Cancelled),
            _ => Err(format!("Invalid time off status: {}", s)),
        }
    }
}

impl Default for TimeOffStatus {
    fn default() -> Self {
        TimeOffStatus::Pending
    }
}

/// A leave request carrying the alternate schedule that replaces the
/// calendar day once the request is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequest {
    pub id: i64,
    pub date: NaiveDate,
    pub username: String,
    pub label: String,
    /// Whether the employee still attends work on this day (a half-day
    /// leave keeps attendance with shortened hours; a full-day leave does
    /// not).
    pub attendance: bool,
    pub begin: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub status: TimeOffStatus,
}

impl TimeOffRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.label.is_empty() {
            return Err(CoreError::invalid_time_off(format!(
                "{}: a label is required",
                self.date
            )));
        }
        if self.attendance {
            let (Some(begin), Some(end)) = (self.begin, self.end) else {
                return Err(CoreError::invalid_time_off(format!(
                    "{}: an attendance day requires begin and end times",
                    self.date
                )));
            };
            if end < begin {
                return Err(CoreError::invalid_time_off(format!(
                    "{}: end is before begin",
                    self.date
                )));
            }
            if self.break_start.is_some() != self.break_end.is_some() {
                return Err(CoreError::invalid_time_off(format!(
                    "{}: break start and break end must be set together",
                    self.date
                )));
            }
        } else if self.begin.is_some()
            || self.end.is_some()
            || self.break_start.is_some()
            || self.break_end.is_some()
        {
            return Err(CoreError::invalid_time_off(format!(
                "{}: a non-attendance day must not carry schedule times",
                self.date
            )));
        }
        Ok(())
    }

    pub fn is_accepted(&self) -> bool {
        self.status == TimeOffStatus::Accepted
    }

    /// Approves a pending request.
    pub fn accept(&mut self) -> Result<(), CoreError> {
        match self.status {
            TimeOffStatus::Pending => {
                self.status = TimeOffStatus::Accepted;
                Ok(())
            }
            status => Err(CoreError::InvalidTransition(format!(
                "cannot accept a {} request",
                status
            ))),
        }
    }

    /// Withdraws a request. Only permitted while the request is pending.
    pub fn cancel(&mut self) -> Result<(), CoreError> {
        match self.status {
            TimeOffStatus::Pending => {
                self.status = TimeOffStatus::Cancelled;
                Ok(())
            }
            status => Err(CoreError::InvalidTransition(format!(
                "cannot cancel a {} request",
                status
            ))),
        }
    }
}
