use chrono::{NaiveDate, NaiveTime};

use attendance_core::{PunchAction, PunchEvent, ScheduleDay, TimeOffRequest, TimeOffStatus};

/// Initializes test logging once per binary.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

#[allow(dead_code)]
pub fn workday(day: NaiveDate) -> ScheduleDay {
    ScheduleDay {
        date: day,
        business_day: true,
        holiday: None,
        begin: Some(time(9, 0)),
        end: Some(time(17, 0)),
        break_start: Some(time(12, 0)),
        break_end: Some(time(13, 0)),
    }
}

#[allow(dead_code)]
pub fn holiday(day: NaiveDate, label: &str) -> ScheduleDay {
    ScheduleDay {
        date: day,
        business_day: false,
        holiday: Some(label.to_string()),
        begin: None,
        end: None,
        break_start: None,
        break_end: None,
    }
}

#[allow(dead_code)]
pub fn punch(
    id: i64,
    day: NaiveDate,
    hour: u32,
    min: u32,
    username: &str,
    action: PunchAction,
) -> PunchEvent {
    PunchEvent {
        id,
        date: day,
        time: time(hour, min),
        username: username.to_string(),
        action,
        latitude: None,
        longitude: None,
        accuracy: None,
    }
}

#[allow(dead_code)]
pub fn full_day_off(id: i64, day: NaiveDate, username: &str, label: &str) -> TimeOffRequest {
    TimeOffRequest {
        id,
        date: day,
        username: username.to_string(),
        label: label.to_string(),
        attendance: false,
        begin: None,
        end: None,
        break_start: None,
        break_end: None,
        status: TimeOffStatus::Pending,
    }
}

#[allow(dead_code)]
pub fn half_day_off(id: i64, day: NaiveDate, username: &str, label: &str) -> TimeOffRequest {
    TimeOffRequest {
        id,
        date: day,
        username: username.to_string(),
        label: label.to_string(),
        attendance: true,
        begin: Some(time(13, 0)),
        end: Some(time(17, 0)),
        break_start: None,
        break_end: None,
        status: TimeOffStatus::Pending,
    }
}
