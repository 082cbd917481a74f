use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Difference between two times of day in whole minutes.
///
/// Seconds are ignored; the result is negative when `b` is earlier than `a`.
pub fn minute_delta(a: NaiveTime, b: NaiveTime) -> i64 {
    let a = a.hour() as i64 * 60 + a.minute() as i64;
    let b = b.hour() as i64 * 60 + b.minute() as i64;
    b - a
}

/// Like [`minute_delta`], but treats a missing operand as a zero-length span.
pub fn minute_delta_or_zero(a: Option<NaiveTime>, b: Option<NaiveTime>) -> i64 {
    match (a, b) {
        (Some(a), Some(b)) => minute_delta(a, b),
        _ => 0,
    }
}

/// Suppresses minute counts below the configured noise floor.
pub fn floor_to_threshold(threshold: i64, value: i64) -> i64 {
    if value < threshold { 0 } else { value }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    Floor,
    Ceiling,
}

/// Converts integer minutes to a decimal hour figure quantized to
/// `precision` decimal places.
///
/// Exact-decimal arithmetic: report boundaries must not depend on binary
/// floating point rounding.
pub fn minutes_to_hours(minutes: i64, precision: i64, rounding: Rounding) -> BigDecimal {
    let mode = match rounding {
        Rounding::Floor => RoundingMode::Floor,
        Rounding::Ceiling => RoundingMode::Ceiling,
    };
    (BigDecimal::from(minutes) / BigDecimal::from(60)).with_scale_round(precision, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn t(hour: u32, min: u32, sec: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, sec).unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_minute_delta() {
        assert_eq!(minute_delta(t(9, 0, 0), t(17, 0, 0)), 480);
        assert_eq!(minute_delta(t(17, 0, 0), t(9, 0, 0)), -480);
        assert_eq!(minute_delta(t(9, 30, 0), t(9, 30, 0)), 0);
    }

    #[test]
    fn test_minute_delta_is_antisymmetric() {
        let a = t(8, 45, 0);
        let b = t(18, 10, 0);
        assert_eq!(minute_delta(a, b), -minute_delta(b, a));
    }

    #[test]
    fn test_minute_delta_ignores_seconds() {
        assert_eq!(minute_delta(t(9, 0, 59), t(9, 1, 0)), 1);
    }

    #[test]
    fn test_minute_delta_or_zero() {
        assert_eq!(minute_delta_or_zero(Some(t(9, 0, 0)), Some(t(10, 0, 0))), 60);
        assert_eq!(minute_delta_or_zero(None, Some(t(10, 0, 0))), 0);
        assert_eq!(minute_delta_or_zero(Some(t(9, 0, 0)), None), 0);
        assert_eq!(minute_delta_or_zero(None, None), 0);
    }

    #[test]
    fn test_floor_to_threshold() {
        assert_eq!(floor_to_threshold(5, 3), 0);
        assert_eq!(floor_to_threshold(5, 5), 5);
        assert_eq!(floor_to_threshold(5, 17), 17);
        assert_eq!(floor_to_threshold(0, 3), 3);
    }

    #[test]
    fn test_minutes_to_hours_exact_values() {
        assert_eq!(minutes_to_hours(0, 1, Rounding::Ceiling), dec("0.0"));
        assert_eq!(minutes_to_hours(30, 1, Rounding::Ceiling), dec("0.5"));
        assert_eq!(minutes_to_hours(60, 1, Rounding::Ceiling), dec("1.0"));
    }

    #[test]
    fn test_minutes_to_hours_rounding_direction() {
        // 50 minutes is 0.8333... hours
        assert_eq!(minutes_to_hours(50, 1, Rounding::Floor), dec("0.8"));
        assert_eq!(minutes_to_hours(50, 1, Rounding::Ceiling), dec("0.9"));
    }

    #[test]
    fn test_minutes_to_hours_is_monotonic() {
        let mut previous = minutes_to_hours(0, 1, Rounding::Ceiling);
        for minutes in 1..=240 {
            let current = minutes_to_hours(minutes, 1, Rounding::Ceiling);
            assert!(previous <= current, "not monotonic at {} minutes", minutes);
            previous = current;
        }
    }
}
