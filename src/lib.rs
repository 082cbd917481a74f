pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod timeunit;
pub mod utils;

pub use config::Config;
pub use error::CoreError;
pub use models::{
    DayReconciliation, MonthlyRecord, PeriodSummary, PunchAction, PunchError, PunchEvent,
    PunchPair, ScheduleDay, TimeOffLink, TimeOffRequest, TimeOffStatus,
};
pub use services::{Thresholds, assemble_month, count_time_off_by_label, reconcile, summarize};
