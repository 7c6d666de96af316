//! RawEvent to Event conversion.
//!
//! Normalization is where the data contract is enforced:
//! 1. The `date` text must parse as `YYYY-MM-DD`, otherwise the record is dropped
//! 2. The cost text is classified as free or an amount
//! 3. Duplicate identifiers are reported but kept

use std::collections::HashSet;

use cvoca_core::{Cost, Event, parse_event_date};
use tracing::{debug, warn};

use crate::raw_event::RawEvent;

/// Converts a [`RawEvent`] to an [`Event`], or `None` when its date is unreadable.
pub fn normalize_event(raw: RawEvent) -> Option<Event> {
    let date = parse_event_date(&raw.date)?;

    Some(Event {
        id: raw.id,
        title: raw.title,
        date,
        time: raw.time,
        location: raw.location,
        committee: raw.committee,
        tags: raw.tags,
        cost: raw.cost.as_deref().map(Cost::parse).unwrap_or(Cost::Free),
        full_pricing: raw.full_pricing,
        description: raw.description,
        registration_link: raw.registration_link,
        image_url: raw.image_url,
    })
}

/// Normalizes a whole resource, dropping records with unreadable dates.
///
/// Every dropped record and every repeated identifier is logged at `warn`
/// level. Order of the surviving records is preserved.
pub fn normalize_events(raw: Vec<RawEvent>) -> Vec<Event> {
    let total = raw.len();
    let mut seen_ids = HashSet::new();
    let mut events = Vec::with_capacity(total);

    for record in raw {
        let (id, date) = (record.id, record.date.clone());
        let Some(event) = normalize_event(record) else {
            warn!(id, date = %date, "Dropping event with unreadable date");
            continue;
        };
        if !seen_ids.insert(event.id) {
            warn!(id = event.id, "Duplicate event id");
        }
        events.push(event);
    }

    debug!(total, kept = events.len(), "Normalized events");
    events
}
