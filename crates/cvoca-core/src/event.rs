//! Event types for the association calendar.
//!
//! This module provides the core types for representing scheduled activities:
//! - [`Event`]: A validated event, ready for filtering, sorting and display
//! - [`Cost`]: The admission cost of an event (free or a currency amount)

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Location keywords that mark an event as held online.
const VIRTUAL_MARKERS: [&str; 3] = ["online", "virtual", "zoom"];

/// The admission cost of an event.
///
/// The data source stores either the literal text `"Free"` or a currency
/// amount such as `"₹500"`. The amount text is kept untouched for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cost {
    /// No admission fee.
    Free,
    /// A currency amount, as written in the source.
    Amount(String),
}

impl Cost {
    /// Parses the cost text used by the data source.
    ///
    /// `"Free"` and `"free"` map to [`Cost::Free`]; anything else is kept as an amount.
    pub fn parse(text: &str) -> Self {
        match text {
            "Free" | "free" => Self::Free,
            other => Self::Amount(other.to_string()),
        }
    }

    /// Returns true if the event has no admission fee.
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Returns the digits of the amount, or `"0"` when free or when the
    /// amount carries no digits at all.
    pub fn digits(&self) -> String {
        match self {
            Self::Free => "0".to_string(),
            Self::Amount(text) => {
                let digits: String = text.chars().filter(char::is_ascii_digit).collect();
                if digits.is_empty() {
                    "0".to_string()
                } else {
                    digits
                }
            }
        }
    }
}

impl From<String> for Cost {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Cost> for String {
    fn from(cost: Cost) -> Self {
        cost.to_string()
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("Free"),
            Self::Amount(text) => f.write_str(text),
        }
    }
}

/// A scheduled association activity.
///
/// Events are built once at load time and never mutated afterwards; filtering
/// and sorting always produce new views over cloned events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Identifier, expected to be unique within a list.
    pub id: u64,
    /// The event title.
    pub title: String,
    /// The calendar date the event takes place on.
    pub date: NaiveDate,
    /// Free-text time range, e.g. `"9:00 AM - 5:00 PM"`.
    pub time: String,
    /// Venue, possibly a virtual one.
    pub location: String,
    /// The organizing committee.
    pub committee: String,
    /// Short labels, in display order.
    pub tags: Vec<String>,
    /// Admission cost.
    pub cost: Cost,
    /// Detailed pricing text, if the source provides one.
    pub full_pricing: Option<String>,
    /// Long-form description.
    pub description: String,
    /// Registration URL.
    pub registration_link: Option<String>,
    /// Cover image URL.
    pub image_url: Option<String>,
}

impl Event {
    /// Creates a new event with the required fields and empty details.
    pub fn new(id: u64, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            time: String::new(),
            location: String::new(),
            committee: String::new(),
            tags: Vec::new(),
            cost: Cost::Free,
            full_pricing: None,
            description: String::new(),
            registration_link: None,
            image_url: None,
        }
    }

    /// Returns true if the event has no admission fee.
    pub fn is_free(&self) -> bool {
        self.cost.is_free()
    }

    /// Returns true if the location points at an online venue.
    pub fn is_virtual(&self) -> bool {
        let location = self.location.to_lowercase();
        VIRTUAL_MARKERS.iter().any(|m| location.contains(m))
    }

    /// Returns the numeric price used in structured data.
    pub fn price_digits(&self) -> String {
        self.cost.digits()
    }

    /// Returns true if the event carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Builder method to set the time range text.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builder method to set the organizing committee.
    pub fn with_committee(mut self, committee: impl Into<String>) -> Self {
        self.committee = committee.into();
        self
    }

    /// Builder method to add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Builder method to set the cost.
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the registration link.
    pub fn with_registration_link(mut self, link: impl Into<String>) -> Self {
        self.registration_link = Some(link.into());
        self
    }

    /// Builder method to set the image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
