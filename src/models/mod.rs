pub mod calendar;
pub mod punch;
pub mod reconciliation;
pub mod record;
pub mod summary;
pub mod time_off;

pub use calendar::ScheduleDay;
pub use punch::{PunchAction, PunchEvent, PunchPair};
pub use reconciliation::{DayReconciliation, PunchError};
pub use record::{MonthlyRecord, TimeOffLink};
pub use summary::PeriodSummary;
pub use time_off::{TimeOffRequest, TimeOffStatus};
