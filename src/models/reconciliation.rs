use serde::{Deserialize, Serialize};

/// The closed set of per-day validation failures.
///
/// These are data values surfaced on the day's record, never propagated as
/// `Err`. The wire strings are part of the reporting contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchError {
    #[serde(rename = "missing punches")]
    MissingBoth,
    #[serde(rename = "missing end punch")]
    MissingEnd,
    #[serde(rename = "missing begin punch")]
    MissingBegin,
    #[serde(rename = "punch order invalid")]
    OrderInvalid,
    #[serde(rename = "future punch")]
    FuturePunch,
}

impl std::fmt::Display for PunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PunchError::MissingBoth => write!(f, "missing punches"),
            PunchError::MissingEnd => write!(f, "missing end punch"),
            PunchError::MissingBegin => write!(f, "missing begin punch"),
            PunchError::OrderInvalid => write!(f, "punch order invalid"),
            PunchError::FuturePunch => write!(f, "future punch"),
        }
    }
}

/// Outcome of reconciling one user's day against the effective schedule.
///
/// When `error` is set, every minute field is zero; the only non-error
/// source of minutes on a non-business day is the overtime figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReconciliation {
    pub is_past: bool,
    pub is_future: bool,
    pub has_activity: bool,
    pub behind_minutes: i64,
    pub early_minutes: i64,
    pub overtime_minutes: i64,
    pub error: Option<PunchError>,
}

impl DayReconciliation {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}
