//! Time types for event listings.
//!
//! This module provides [`TimeWindow`], the filter dimension classifying
//! events as upcoming or past relative to the current date, and helpers for
//! reading the calendar dates stored in the data source.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format used by the data source.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned when a time window name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time window {0:?} (expected upcoming, past or all)")]
pub struct ParseTimeWindowError(String);

/// Which part of the calendar an event listing covers.
///
/// Windows compare calendar dates only: an event dated today is upcoming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    /// Events dated today or later.
    #[default]
    Upcoming,
    /// Events dated before today.
    Past,
    /// Every event regardless of date.
    All,
}

impl TimeWindow {
    /// Returns the name used on the command line and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Past => "past",
            Self::All => "all",
        }
    }

    /// Checks if an event date falls within this window.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Upcoming => date >= today,
            Self::Past => date < today,
            Self::All => true,
        }
    }

    /// Returns true if listings in this window are ordered soonest first.
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Upcoming)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = ParseTimeWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "past" => Ok(Self::Past),
            "all" => Ok(Self::All),
            _ => Err(ParseTimeWindowError(s.to_string())),
        }
    }
}

/// Returns today's date on the local clock (local midnight).
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `YYYY-MM-DD` date as stored in the data source.
pub fn parse_event_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod time_window {
        use super::*;

        #[test]
        fn upcoming_includes_today() {
            let today = date(2024, 6, 15);
            assert!(TimeWindow::Upcoming.contains(date(2024, 6, 15), today));
            assert!(!TimeWindow::Upcoming.contains(date(2024, 6, 14), today));
        }

        #[test]
        fn past_excludes_today() {
            let today = date(2024, 6, 15);
            assert!(TimeWindow::Past.contains(date(2024, 6, 14), today));
            assert!(!TimeWindow::Past.contains(date(2024, 6, 15), today));
        }

        #[test]
        fn all_contains_everything() {
            let today = date(2024, 6, 15);
            assert!(TimeWindow::All.contains(date(1999, 1, 1), today));
            assert!(TimeWindow::All.contains(date(2099, 1, 1), today));
        }

        #[test]
        fn direction() {
            assert!(TimeWindow::Upcoming.is_ascending());
            assert!(!TimeWindow::Past.is_ascending());
            assert!(!TimeWindow::All.is_ascending());
        }

        #[test]
        fn from_str() {
            assert_eq!("upcoming".parse(), Ok(TimeWindow::Upcoming));
            assert_eq!(" Past ".parse(), Ok(TimeWindow::Past));
            assert_eq!("ALL".parse(), Ok(TimeWindow::All));
            assert!("tomorrow".parse::<TimeWindow>().is_err());
        }

        #[test]
        fn default_is_upcoming() {
            assert_eq!(TimeWindow::default(), TimeWindow::Upcoming);
        }

        #[test]
        fn serde_roundtrip() {
            let json = serde_json::to_string(&TimeWindow::Past).unwrap();
            assert_eq!(json, "\"past\"");
            let parsed: TimeWindow = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, TimeWindow::Past);
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn parses_iso_dates() {
            assert_eq!(parse_event_date("2024-06-15"), Some(date(2024, 6, 15)));
            assert_eq!(parse_event_date(" 2024-12-01 "), Some(date(2024, 12, 1)));
        }

        #[test]
        fn rejects_malformed_dates() {
            assert_eq!(parse_event_date(""), None);
            assert_eq!(parse_event_date("15/06/2024"), None);
            assert_eq!(parse_event_date("2024-02-30"), None);
            assert_eq!(parse_event_date("TBD"), None);
        }
    }
}
