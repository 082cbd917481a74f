use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Aggregate over an ordered run of reconciled days for one user and
/// period.
///
/// Hour figures use the asymmetric rounding policy: the shortfall is
/// floored, early and overtime are ceiled, so the reported deficiency or
/// excess is never understated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub days: i64,
    pub business_days: i64,
    pub activity_days: i64,
    pub behind_minutes: i64,
    pub behind_count: i64,
    pub early_minutes: i64,
    pub early_count: i64,
    pub overtime_minutes: i64,
    pub overtime_count: i64,
    pub time_off_count: i64,
    pub time_off_pending_count: i64,
    pub error_count: i64,
    pub behind_hours: BigDecimal,
    pub early_hours: BigDecimal,
    pub overtime_hours: BigDecimal,
}
