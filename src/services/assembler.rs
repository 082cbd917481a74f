use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{
    MonthlyRecord, PunchEvent, PunchPair, ScheduleDay, TimeOffLink, TimeOffRequest, TimeOffStatus,
};
use crate::services::reconciliation::{Thresholds, reconcile};

/// Joins one user's schedule rows, raw punch events, and time-off requests
/// into reconciled report records, ordered by date.
///
/// An accepted request replaces the day's schedule fields entirely before
/// reconciliation; a pending request leaves the numbers alone. Either way
/// the day's display label reflects the request.
pub fn assemble_month(
    schedule: &[ScheduleDay],
    punches: &[PunchEvent],
    time_off: &[TimeOffRequest],
    username: &str,
    today: NaiveDate,
    limits: &Thresholds,
) -> Vec<MonthlyRecord> {
    let requests: HashMap<NaiveDate, &TimeOffRequest> = time_off
        .iter()
        .filter(|request| {
            request.username == username && request.status != TimeOffStatus::Cancelled
        })
        .map(|request| (request.date, request))
        .collect();

    let mut days: Vec<&ScheduleDay> = schedule.iter().collect();
    days.sort_by_key(|day| day.date);

    let mut records = Vec::with_capacity(days.len());
    for day in days {
        if let Err(error) = day.validate() {
            log::warn!("schedule row {} failed validation: {}", day.date, error);
        }

        let mut effective = day.clone();
        let link = requests.get(&day.date).map(|request| {
            if let Err(error) = request.validate() {
                log::warn!(
                    "time off request {} for {} failed validation: {}",
                    request.id,
                    request.date,
                    error
                );
            }
            let accepted = request.is_accepted();
            effective.holiday = Some(if accepted {
                format!("time off ({})", request.label)
            } else {
                format!("time off ({}) (pending approval)", request.label)
            });
            if accepted {
                effective.business_day = request.attendance;
                effective.begin = request.begin;
                effective.end = request.end;
                effective.break_start = request.break_start;
                effective.break_end = request.break_end;
            }
            TimeOffLink {
                id: request.id,
                accepted,
            }
        });

        let pair = PunchPair::from_events(day.date, username, punches);
        let outcome = reconcile(&effective, &pair, today, limits);

        records.push(MonthlyRecord {
            date: effective.date,
            holiday: effective.holiday,
            business_day: effective.business_day,
            begin: effective.begin,
            end: effective.end,
            break_start: effective.break_start,
            break_end: effective.break_end,
            begin_record: pair.begin,
            end_record: pair.end,
            time_off: link,
            outcome,
        });
    }
    records
}
