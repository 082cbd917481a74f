use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// Half-open date range covering one calendar month.
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::InvalidPeriod(format!("{}-{} is not a month", year, month)))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| CoreError::InvalidPeriod(format!("{}-{} has no next month", year, month)))?;
    Ok((first, next))
}

/// First day of the fiscal year containing `day`, for a fiscal year
/// starting at `first_month`.
pub fn first_day_of_fiscal_year(day: NaiveDate, first_month: u32) -> Result<NaiveDate, CoreError> {
    let year = if first_month <= day.month() {
        day.year()
    } else {
        day.year() - 1
    };
    NaiveDate::from_ymd_opt(year, first_month, 1)
        .ok_or_else(|| CoreError::InvalidPeriod(format!("{} is not a month", first_month)))
}

/// Half-open date range covering one fiscal year.
pub fn fiscal_year_range(year: i32, first_month: u32) -> Result<(NaiveDate, NaiveDate), CoreError> {
    let begin = NaiveDate::from_ymd_opt(year, first_month, 1)
        .ok_or_else(|| CoreError::InvalidPeriod(format!("{} is not a month", first_month)))?;
    let end = NaiveDate::from_ymd_opt(year + 1, first_month, 1)
        .ok_or_else(|| CoreError::InvalidPeriod(format!("{} is not a month", first_month)))?;
    Ok((begin, end))
}
