//! "Add to calendar" deep links.
//!
//! This module turns an [`Event`] into a Google Calendar template URL that
//! pre-fills a new calendar entry. The event's free-text `time` field is read
//! leniently:
//!
//! - the text is split on `-`; the first segment is the start, the second
//!   (if any) the end, and any further segments are ignored
//! - each part is searched for an `H:MM AM|PM` clock time
//! - an unreadable start becomes 09:00
//! - a missing or unreadable end becomes start + 2 hours
//!
//! Unreadable time strings never produce an error, they fall through to the
//! defaults above.
//!
//! An explicit end earlier than the start (`10:00 PM - 1:00 AM`) is placed on
//! the following day. The association's website keeps both tokens on the
//! event's date, which yields an end before the start.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use cvoca_core::Event;
//! use cvoca_core::calendar::calendar_url;
//!
//! let event = Event::new(1, "Tax Seminar", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .with_time("9:00 AM - 5:00 PM");
//! let url = calendar_url(&event);
//! assert!(url.contains("dates=20240615T090000/20240615T170000"));
//! ```

use std::sync::LazyLock;

use chrono::{Duration, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::event::Event;

/// Google Calendar template endpoint.
pub const GOOGLE_CALENDAR_URL: &str = "https://www.google.com/calendar/render";

/// Timezone the association's events are scheduled in.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Format of the `dates` tokens: local time, no offset suffix.
const DATETIME_TOKEN_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Hour used when the start time cannot be read.
const DEFAULT_START_HOUR: u32 = 9;

/// Length assumed when no end time can be read.
const DEFAULT_DURATION_HOURS: i64 = 2;

/// Regex for a 12-hour clock time such as `9:00 AM` or `12:30pm`.
static CLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)").expect("Invalid clock regex")
});

/// Parses the first 12-hour clock time found in `text`.
///
/// `12 AM` is midnight, `12 PM` is noon, other PM hours add twelve. Returns
/// `None` when no clock time is present or when it does not name a valid
/// time of day.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    let caps = CLOCK_REGEX.captures(text.trim())?;
    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let is_pm = caps[3].eq_ignore_ascii_case("PM");

    if is_pm && hour < 12 {
        hour += 12;
    } else if !is_pm && hour == 12 {
        hour = 0;
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// The start and end of an event as local date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSlot {
    /// Local start date-time.
    pub start: NaiveDateTime,
    /// Local end date-time.
    pub end: NaiveDateTime,
}

impl CalendarSlot {
    /// Derives the slot from the event's date and free-text time range.
    pub fn from_event(event: &Event) -> Self {
        let mut parts = event.time.split('-');
        let start_text = parts.next().unwrap_or_default();
        let end_text = parts.next();

        let start_time = parse_clock(start_text).unwrap_or_else(default_start_time);
        let start = event.date.and_time(start_time);

        let end = match end_text.and_then(parse_clock) {
            Some(end_time) => {
                let end = event.date.and_time(end_time);
                // Ranges such as "10:00 PM - 1:00 AM" end on the next day.
                if end < start {
                    end + Duration::days(1)
                } else {
                    end
                }
            }
            None => start + Duration::hours(DEFAULT_DURATION_HOURS),
        };

        Self { start, end }
    }

    /// Returns the `dates` parameter value: `START/END` tokens.
    pub fn dates_param(&self) -> String {
        format!(
            "{}/{}",
            self.start.format(DATETIME_TOKEN_FORMAT),
            self.end.format(DATETIME_TOKEN_FORMAT)
        )
    }
}

fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_START_HOUR, 0, 0).expect("valid time")
}

/// Builds calendar deep links for events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLinkBuilder {
    base_url: String,
    timezone: String,
}

impl Default for CalendarLinkBuilder {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_CALENDAR_URL.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl CalendarLinkBuilder {
    /// Creates a builder targeting Google Calendar in the default timezone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the calendar service endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder method to set the timezone the service is told about.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Returns the timezone passed to the calendar service.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Builds the deep link for one event.
    pub fn build(&self, event: &Event) -> String {
        let slot = CalendarSlot::from_event(event);
        format!(
            "{}?action=TEMPLATE&text={}&dates={}&details={}&location={}&ctz={}",
            self.base_url,
            urlencoding::encode(&event.title),
            slot.dates_param(),
            urlencoding::encode(&event.description),
            urlencoding::encode(&event.location),
            self.timezone,
        )
    }
}

/// Convenience function building a Google Calendar link in the default timezone.
///
/// See [`CalendarLinkBuilder::build`] for details.
pub fn calendar_url(event: &Event) -> String {
    CalendarLinkBuilder::new().build(event)
}
