use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchAction {
    Begin,
    End,
}

impl std::fmt::Display for PunchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PunchAction::Begin => write!(f, "begin"),
            PunchAction::End => write!(f, "end"),
        }
    }
}

impl std::str::FromStr for PunchAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "begin" => Ok(PunchAction::Begin),
            "end" => Ok(PunchAction::End),
            _ => Err(format!("Invalid punch action: {}", s)),
        }
    }
}

/// A raw clock-in/clock-out event logged by a user.
///
/// Append-only fact; reconciliation only ever sees the per-day min/max
/// aggregation ([`PunchPair`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchEvent {
    pub id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub username: String,
    pub action: PunchAction,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy: Option<f64>,
}

impl PunchEvent {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(latitude) = self.latitude
            && !(-90.0..=90.0).contains(&latitude)
        {
            return Err(CoreError::InvalidPunch(format!(
                "latitude {} is out of range",
                latitude
            )));
        }
        if let Some(longitude) = self.longitude
            && !(-180.0..=180.0).contains(&longitude)
        {
            return Err(CoreError::InvalidPunch(format!(
                "longitude {} is out of range",
                longitude
            )));
        }
        Ok(())
    }
}

/// The earliest begin punch and latest end punch for a user on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchPair {
    pub date: NaiveDate,
    pub username: String,
    pub begin: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl PunchPair {
    /// Aggregates raw events into the per-day pair: min over begin punches,
    /// max over end punches. Events for other users or dates are ignored.
    pub fn from_events(date: NaiveDate, username: &str, events: &[PunchEvent]) -> Self {
        let for_day = |action: PunchAction| {
            events
                .iter()
                .filter(move |event| {
                    event.date == date && event.username == username && event.action == action
                })
                .map(|event| event.time)
        };
        PunchPair {
            date,
            username: username.to_string(),
            begin: for_day(PunchAction::Begin).min(),
            end: for_day(PunchAction::End).max(),
        }
    }

    pub fn empty(date: NaiveDate, username: &str) -> Self {
        PunchPair {
            date,
            username: username.to_string(),
            begin: None,
            end: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(id: i64, day: u32, hour: u32, min: u32, username: &str, action: PunchAction) -> PunchEvent {
        PunchEvent {
            id,
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            time: NaiveTime::from_hms_opt(hour, min, 0).unwrap(),
            username: username.to_string(),
            action,
            latitude: None,
            longitude: None,
            accuracy: None,
        }
    }

    #[test]
    fn test_pair_takes_min_begin_and_max_end() {
        let events = vec![
            event(1, 3, 9, 5, "sato", PunchAction::Begin),
            event(2, 3, 8, 58, "sato", PunchAction::Begin),
            event(3, 3, 17, 2, "sato", PunchAction::End),
            event(4, 3, 18, 30, "sato", PunchAction::End),
        ];
        let pair = PunchPair::from_events(
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            "sato",
            &events,
        );
        assert_eq!(pair.begin, NaiveTime::from_hms_opt(8, 58, 0));
        assert_eq!(pair.end, NaiveTime::from_hms_opt(18, 30, 0));
    }

    #[test]
    fn test_pair_ignores_other_users_and_dates() {
        let events = vec![
            event(1, 3, 7, 0, "suzuki", PunchAction::Begin),
            event(2, 4, 6, 0, "sato", PunchAction::Begin),
            event(3, 3, 9, 0, "sato", PunchAction::Begin),
        ];
        let pair = PunchPair::from_events(
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            "sato",
            &events,
        );
        assert_eq!(pair.begin, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(pair.end, None);
    }

    #[test]
    fn test_event_coordinate_validation() {
        let mut punch = event(1, 3, 9, 0, "sato", PunchAction::Begin);
        punch.latitude = Some(35.68);
        punch.longitude = Some(139.76);
        assert!(punch.validate().is_ok());

        punch.latitude = Some(95.0);
        assert!(punch.validate().is_err());

        punch.latitude = Some(35.68);
        punch.longitude = Some(-200.0);
        assert!(punch.validate().is_err());
    }

    #[test]
    fn test_action_round_trip() {
        assert_eq!(PunchAction::Begin.to_string(), "begin");
        assert_eq!("end".parse::<PunchAction>(), Ok(PunchAction::End));
        assert!("clock-in".parse::<PunchAction>().is_err());
    }
}
