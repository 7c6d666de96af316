//! The event store.
//!
//! [`EventStore`] loads the events (and committee) resources once per page
//! visit. Loading never retries: on any failure the error is logged and the
//! page renders as if there were no data.
//!
//! ```text
//!   DataSource ──fetch──▶ JSON text ──decode──▶ Vec<RawEvent> ──normalize──▶ Vec<Event>
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use cvoca_core::{
    Committee, Event, FilterState, committee_names, distinct_tags, query_events,
    upcoming_highlights,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::error::{StoreError, StoreResult};
use crate::normalize::normalize_events;
use crate::raw_event::RawEvent;
use crate::source::DataSource;

/// Default name of the events resource.
pub const EVENTS_RESOURCE: &str = "events.json";

/// Default name of the committees resource.
pub const COMMITTEES_RESOURCE: &str = "committees.json";

/// Data backing the events page: the listing and its organizer choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsPage {
    pub events: Vec<Event>,
    pub committees: Vec<Committee>,
}

impl EventsPage {
    /// Returns the listing for a filter state, filtered then sorted.
    pub fn query(&self, state: &FilterState, today: NaiveDate) -> Vec<Event> {
        query_events(&self.events, state, today)
    }

    /// Returns the organizer choices, taken from the committee roster.
    pub fn organizers(&self) -> Vec<String> {
        committee_names(&self.committees)
    }

    /// Returns the tag choices, in first-seen order.
    pub fn tags(&self) -> Vec<String> {
        distinct_tags(&self.events)
    }

    /// Returns true if nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.committees.is_empty()
    }
}

/// Loads events and committees from a [`DataSource`].
#[derive(Clone)]
pub struct EventStore {
    source: Arc<dyn DataSource>,
    events_resource: String,
    committees_resource: String,
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("source", &self.source.describe())
            .field("events_resource", &self.events_resource)
            .field("committees_resource", &self.committees_resource)
            .finish()
    }
}

impl EventStore {
    /// Creates a store reading the default resource names from `source`.
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            events_resource: EVENTS_RESOURCE.to_string(),
            committees_resource: COMMITTEES_RESOURCE.to_string(),
        }
    }

    /// Builder method to rename the events resource.
    pub fn with_events_resource(mut self, resource: impl Into<String>) -> Self {
        self.events_resource = resource.into();
        self
    }

    /// Builder method to rename the committees resource.
    pub fn with_committees_resource(mut self, resource: impl Into<String>) -> Self {
        self.committees_resource = resource.into();
        self
    }

    /// Fetches and normalizes the events resource.
    ///
    /// # Errors
    ///
    /// Returns the fetch or decode failure unchanged.
    pub async fn try_load(&self) -> StoreResult<Vec<Event>> {
        let raw: Vec<RawEvent> = self.fetch_json(&self.events_resource).await?;
        Ok(normalize_events(raw))
    }

    /// Loads the events, or an empty list if anything goes wrong.
    pub async fn load(&self) -> Vec<Event> {
        match self.try_load().await {
            Ok(events) => events,
            Err(e) => {
                error!(error = %e, source = %self.source.describe(), "Failed to load events");
                Vec::new()
            }
        }
    }

    /// Fetches the committee roster.
    ///
    /// # Errors
    ///
    /// Returns the fetch or decode failure unchanged.
    pub async fn try_load_committees(&self) -> StoreResult<Vec<Committee>> {
        self.fetch_json(&self.committees_resource).await
    }

    /// Loads the committee roster, or an empty list if anything goes wrong.
    pub async fn load_committees(&self) -> Vec<Committee> {
        match self.try_load_committees().await {
            Ok(committees) => committees,
            Err(e) => {
                error!(error = %e, source = %self.source.describe(), "Failed to load committees");
                Vec::new()
            }
        }
    }

    /// Loads events and committees concurrently.
    ///
    /// Both requests are issued without waiting on each other. If either
    /// fails, the whole page is empty.
    pub async fn load_events_page(&self) -> EventsPage {
        match tokio::try_join!(self.try_load(), self.try_load_committees()) {
            Ok((events, committees)) => {
                info!(
                    events = events.len(),
                    committees = committees.len(),
                    "Loaded events page"
                );
                EventsPage { events, committees }
            }
            Err(e) => {
                error!(error = %e, source = %self.source.describe(), "Failed to fetch events data");
                EventsPage::default()
            }
        }
    }

    /// Loads the next `limit` upcoming events for the home page.
    pub async fn load_home_page(&self, today: NaiveDate, limit: usize) -> Vec<Event> {
        let events = self.load().await;
        upcoming_highlights(&events, today, limit)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: &str) -> StoreResult<T> {
        let body = self.source.fetch(resource).await?;
        let value = serde_json::from_str(&body).map_err(|e| {
            StoreError::invalid_response(format!("malformed JSON: {}", e))
                .with_resource(resource)
                .with_source(e)
        })?;
        debug!(resource, "Decoded resource");
        Ok(value)
    }
}
