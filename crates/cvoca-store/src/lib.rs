//! Event store: static JSON sources, joint page loading, normalization.
//!
//! - [`DataSource`] - Where the JSON resources come from
//! - [`RawEvent`] - One record of `events.json` before validation
//! - [`normalize_events`] - Validates records into [`cvoca_core::Event`]s
//! - [`EventStore`] - Loads the events and home pages
//! - [`StoreError`] - Error types for store operations
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │  /data/ (HTTP)  │    │  data directory │
//! └────────┬────────┘    └────────┬────────┘
//!          ▼                      ▼
//! ┌─────────────────┐    ┌─────────────────┐
//! │   HttpSource    │    │   FileSource    │
//! └────────┬────────┘    └────────┬────────┘
//!          │      DataSource      │
//!          └──────────┬───────────┘
//!                     ▼
//!              ┌─────────────┐
//!              │ EventStore  │──▶ EventsPage { events, committees }
//!              └─────────────┘
//! ```

pub mod error;
pub mod normalize;
pub mod raw_event;
pub mod source;
pub mod store;

pub use error::{StoreError, StoreErrorCode, StoreResult};
pub use normalize::{normalize_event, normalize_events};
pub use raw_event::RawEvent;
pub use source::{BoxFuture, DataSource, FileSource, HttpSource};
pub use store::{COMMITTEES_RESOURCE, EVENTS_RESOURCE, EventStore, EventsPage};
