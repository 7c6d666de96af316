//! Output rendering for event listings.
//!
//! Listings are rendered either as aligned text for the terminal or as JSON
//! for scripts. JSON entries carry the event fields plus the derived values a
//! page needs (calendar link, optimized card image).

use std::borrow::Cow;

use cvoca_core::{CalendarLinkBuilder, Committee, Event, ImageSize, optimized_image_url_for};
use serde::Serialize;

/// Text shown when a listing is empty.
pub const NO_EVENTS_TEXT: &str = "No events found.";

/// Options for text rendering.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Maximum title length (truncated with ellipsis).
    pub max_title_length: Option<usize>,
    /// Print the calendar link under each event.
    pub show_calendar_links: bool,
}

/// JSON rendering of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    pub count: usize,
    pub events: Vec<JsonEvent>,
}

/// JSON rendering of one event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonEvent {
    #[serde(flatten)]
    pub event: Event,
    pub is_virtual: bool,
    pub calendar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_image_url: Option<String>,
}

/// Renders events using a calendar link builder.
#[derive(Debug, Clone)]
pub struct EventFormatter {
    links: CalendarLinkBuilder,
    options: FormatOptions,
}

impl EventFormatter {
    /// Creates a formatter.
    pub fn new(links: CalendarLinkBuilder, options: FormatOptions) -> Self {
        Self { links, options }
    }

    /// Returns the calendar link for an event.
    pub fn calendar_url(&self, event: &Event) -> String {
        self.links.build(event)
    }

    /// Formats one event as a single line.
    ///
    /// `2024-06-15  6:00 AM - 7:30 AM  Yoga Morning [Sports] (Free) #Wellness`
    pub fn format_line(&self, event: &Event) -> String {
        let title = match self.options.max_title_length {
            Some(max) => ellipsis(&event.title, max),
            None => Cow::Borrowed(event.title.as_str()),
        };

        let mut line = event.date.to_string();
        if !event.time.is_empty() {
            line.push_str("  ");
            line.push_str(&event.time);
        }
        line.push_str("  ");
        line.push_str(&title);
        if !event.committee.is_empty() {
            line.push_str(&format!(" [{}]", event.committee));
        }
        line.push_str(&format!(" ({})", event.cost));
        for tag in &event.tags {
            line.push_str(&format!(" #{}", tag));
        }
        line
    }

    /// Formats a listing as text, one event per line.
    pub fn format_text(&self, events: &[Event]) -> String {
        if events.is_empty() {
            return NO_EVENTS_TEXT.to_string();
        }

        let mut lines = Vec::with_capacity(events.len());
        for event in events {
            lines.push(self.format_line(event));
            if self.options.show_calendar_links {
                lines.push(format!("    {}", self.calendar_url(event)));
            }
        }
        lines.join("\n")
    }

    /// Formats a listing as JSON.
    pub fn format_json(&self, events: &[Event]) -> JsonOutput {
        JsonOutput {
            count: events.len(),
            events: events
                .iter()
                .map(|event| JsonEvent {
                    event: event.clone(),
                    is_virtual: event.is_virtual(),
                    calendar_url: self.calendar_url(event),
                    card_image_url: event
                        .image_url
                        .as_deref()
                        .map(|url| optimized_image_url_for(url, ImageSize::EventCard)),
                })
                .collect(),
        }
    }
}

/// Formats a committee as a heading followed by its roster.
pub fn format_committee(committee: &Committee) -> String {
    let mut lines = vec![committee.name.clone()];
    for member in committee.members() {
        if member.native_place.is_empty() {
            lines.push(format!("  {}", member.name));
        } else {
            lines.push(format!("  {} ({})", member.name, member.native_place));
        }
    }
    lines.join("\n")
}

/// Truncates a string to `max_len` characters, ending with `...` when cut.
pub fn ellipsis(s: &str, max_len: usize) -> Cow<'_, str> {
    if max_len == 0 {
        return Cow::Borrowed("");
    }
    if s.chars().count() <= max_len {
        return Cow::Borrowed(s);
    }
    let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
    Cow::Owned(format!("{}...", truncated))
}
