//! Event ordering.
//!
//! The sort direction is coupled to the active [`TimeWindow`]: upcoming
//! listings are soonest first, past and mixed listings are most recent (or
//! furthest future) first. Sorting is stable, so events sharing a date keep
//! their source order.

use chrono::NaiveDate;

use crate::event::Event;
use crate::filter::{FilterState, filter_events};
use crate::time::TimeWindow;

/// Number of upcoming events highlighted on the home page.
pub const DEFAULT_HIGHLIGHTS: usize = 3;

/// Sorts events in place by date, in the direction implied by `window`.
pub fn sort_events(events: &mut [Event], window: TimeWindow) {
    if window.is_ascending() {
        events.sort_by(|a, b| a.date.cmp(&b.date));
    } else {
        events.sort_by(|a, b| b.date.cmp(&a.date));
    }
}

/// Returns a sorted copy of the events.
pub fn sorted_events(events: &[Event], window: TimeWindow) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sort_events(&mut sorted, window);
    sorted
}

/// Filters then sorts: the listing shown for a given filter state.
pub fn query_events(events: &[Event], state: &FilterState, today: NaiveDate) -> Vec<Event> {
    let mut result = filter_events(events, state, today);
    sort_events(&mut result, state.window);
    result
}

/// Returns the next `limit` upcoming events, soonest first.
pub fn upcoming_highlights(events: &[Event], today: NaiveDate, limit: usize) -> Vec<Event> {
    let mut upcoming = query_events(events, &FilterState::new(), today);
    upcoming.truncate(limit);
    upcoming
}
