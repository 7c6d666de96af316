//! Event filtering.
//!
//! A [`FilterState`] captures every filter dimension of the events listing as
//! an explicit value. [`filter_events`] keeps the events satisfying all active
//! predicates (logical AND across dimensions):
//!
//! - free-text search over title and description (case-insensitive)
//! - organizing committee ([`Selection`])
//! - tag ([`Selection`])
//! - [`TimeWindow`] relative to a given "today"

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::time::TimeWindow;

/// A single-valued filter dimension: either everything or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// No filtering on this dimension.
    #[default]
    All,
    /// Only values exactly equal to this one.
    Only(String),
}

impl Selection {
    /// Builds a selection from user input, where `"all"` or an empty value
    /// selects everything. Surrounding whitespace is stripped.
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("all") => Self::All,
            Some(v) => Self::Only(v.to_string()),
        }
    }

    /// Returns true if this selection filters nothing.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Checks a single value against the selection.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// The filter state of an events listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Free-text query; empty matches everything.
    pub query: String,
    /// Organizing committee selection.
    pub organizer: Selection,
    /// Tag selection.
    pub tag: Selection,
    /// Time window; listings open on upcoming events.
    pub window: TimeWindow,
}

impl FilterState {
    /// Creates the initial state of the listing (upcoming events, no other filter).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a state with every dimension disabled, including the time window.
    pub fn cleared() -> Self {
        Self {
            window: TimeWindow::All,
            ..Self::default()
        }
    }

    /// Builder method to set the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder method to select one organizer.
    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = Selection::Only(organizer.into());
        self
    }

    /// Builder method to select one tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Selection::Only(tag.into());
        self
    }

    /// Builder method to set the time window.
    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    /// Returns true if any dimension narrows the listing.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty()
            || !self.organizer.is_all()
            || !self.tag.is_all()
            || self.window != TimeWindow::All
    }

    /// Checks one event against every active predicate.
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        matches_query(event, &self.query)
            && self.organizer.matches(&event.committee)
            && matches_tag(event, &self.tag)
            && self.window.contains(event.date, today)
    }
}

/// Case-insensitive substring match against title or description.
pub fn matches_query(event: &Event, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    event.title.to_lowercase().contains(&needle)
        || event.description.to_lowercase().contains(&needle)
}

/// Exact tag membership, or everything for [`Selection::All`].
pub fn matches_tag(event: &Event, tag: &Selection) -> bool {
    match tag {
        Selection::All => true,
        Selection::Only(wanted) => event.has_tag(wanted),
    }
}

/// Returns the events satisfying every active predicate of `state`, in input order.
pub fn filter_events(events: &[Event], state: &FilterState, today: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|e| state.matches(e, today))
        .cloned()
        .collect()
}

/// Returns every tag used by the events, in first-seen order.
pub fn distinct_tags(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .flat_map(|e| e.tags.iter())
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// Returns every organizing committee used by the events, in first-seen order.
pub fn distinct_organizers(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .map(|e| e.committee.as_str())
        .filter(|c| !c.is_empty() && seen.insert(*c))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_events() -> Vec<Event> {
        vec![
            Event::new(1, "GST Annual Update", date(2024, 5, 20))
                .with_committee("Indirect Tax")
                .with_tag("GST")
                .with_tag("Seminar")
                .with_description("Recent amendments and case law"),
            Event::new(2, "Yoga Morning", date(2024, 6, 15))
                .with_committee("Sports & Wellness")
                .with_tag("Wellness")
                .with_description("Start the day with members"),
            Event::new(3, "Income Tax Return Clinic", date(2024, 7, 1))
                .with_committee("Direct Tax")
                .with_tag("ITR")
                .with_tag("Seminar")
                .with_description("Hands-on filing session for GST-registered firms"),
            Event::new(4, "Charity Drive", date(2024, 6, 14))
                .with_committee("Social Welfare")
                .with_tag("Outreach"),
        ]
    }

    fn ids(events: &[Event]) -> Vec<u64> {
        events.iter().map(|e| e.id).collect()
    }

    mod selection {
        use super::*;

        #[test]
        fn from_input() {
            assert_eq!(Selection::from_input(None), Selection::All);
            assert_eq!(Selection::from_input(Some("all")), Selection::All);
            assert_eq!(Selection::from_input(Some("  ")), Selection::All);
            assert_eq!(
                Selection::from_input(Some("GST")),
                Selection::Only("GST".to_string())
            );
        }

        #[test]
        fn input_is_trimmed_before_exact_match() {
            let sel = Selection::from_input(Some(" Direct Tax "));
            assert_eq!(sel, Selection::Only("Direct Tax".to_string()));
            assert!(sel.matches("Direct Tax"));
            assert!(!sel.matches(" Direct Tax "));
        }

        #[test]
        fn exact_match_only() {
            let sel = Selection::Only("Direct Tax".to_string());
            assert!(sel.matches("Direct Tax"));
            assert!(!sel.matches("direct tax"));
            assert!(!sel.matches("Direct"));
            assert!(Selection::All.matches("anything"));
        }
    }

    mod predicates {
        use super::*;

        #[test]
        fn query_is_case_insensitive_over_title_and_description() {
            let events = sample_events();
            assert!(matches_query(&events[0], "gst"));
            assert!(matches_query(&events[2], "GST")); // description only
            assert!(!matches_query(&events[1], "gst"));
            assert!(matches_query(&events[1], ""));
        }

        #[test]
        fn tag_membership() {
            let events = sample_events();
            let seminar = Selection::Only("Seminar".to_string());
            assert!(matches_tag(&events[0], &seminar));
            assert!(!matches_tag(&events[1], &seminar));
            assert!(matches_tag(&events[1], &Selection::All));
        }
    }

    mod listing {
        use super::*;

        #[test]
        fn upcoming_boundary() {
            let today = date(2024, 6, 15);
            let events = sample_events();

            let upcoming = filter_events(&events, &FilterState::new(), today);
            assert_eq!(ids(&upcoming), vec![2, 3]);

            let past = filter_events(
                &events,
                &FilterState::new().with_window(TimeWindow::Past),
                today,
            );
            assert_eq!(ids(&past), vec![1, 4]);
        }

        #[test]
        fn and_composition() {
            let today = date(2024, 6, 15);
            let events = sample_events();
            let state = FilterState::cleared()
                .with_query("gst")
                .with_tag("Seminar")
                .with_window(TimeWindow::All);

            let result = filter_events(&events, &state, today);
            assert_eq!(ids(&result), vec![1, 3]);

            for event in &events {
                let independently = matches_query(event, &state.query)
                    && state.organizer.matches(&event.committee)
                    && matches_tag(event, &state.tag)
                    && state.window.contains(event.date, today);
                assert_eq!(result.contains(event), independently);
            }

            let narrowed = filter_events(&events, &state.with_organizer("Direct Tax"), today);
            assert_eq!(ids(&narrowed), vec![3]);
        }

        #[test]
        fn cleared_state_returns_everything() {
            let events = sample_events();
            let result = filter_events(&events, &FilterState::cleared(), date(2024, 6, 15));
            assert_eq!(result, events);
        }

        #[test]
        fn idempotent() {
            let events = sample_events();
            let state = FilterState::new().with_query("tax");
            let today = date(2024, 6, 1);
            let once = filter_events(&events, &state, today);
            let twice = filter_events(&events, &state, today);
            assert_eq!(once, twice);
            assert_eq!(filter_events(&once, &state, today), once);
        }

        #[test]
        fn no_match_is_empty() {
            let events = sample_events();
            let state = FilterState::cleared().with_organizer("Nonexistent");
            assert!(filter_events(&events, &state, date(2024, 6, 15)).is_empty());
        }
    }

    mod state {
        use super::*;

        #[test]
        fn active_filters() {
            assert!(FilterState::new().has_active_filters()); // upcoming window
            assert!(!FilterState::cleared().has_active_filters());
            assert!(FilterState::cleared().with_query("x").has_active_filters());
            assert!(FilterState::cleared().with_tag("GST").has_active_filters());
        }
    }

    mod distinct {
        use super::*;

        #[test]
        fn tags_in_first_seen_order() {
            assert_eq!(
                distinct_tags(&sample_events()),
                vec!["GST", "Seminar", "Wellness", "ITR", "Outreach"]
            );
        }

        #[test]
        fn organizers_skip_empty() {
            let mut events = sample_events();
            events.push(Event::new(5, "Untitled", date(2024, 1, 1)));
            events.push(Event::new(6, "Second GST", date(2024, 1, 2)).with_committee("Indirect Tax"));
            assert_eq!(
                distinct_organizers(&events),
                vec!["Indirect Tax", "Sports & Wellness", "Direct Tax", "Social Welfare"]
            );
        }
    }
}
