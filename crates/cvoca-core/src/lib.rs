//! Core types: events, filters, sorting, calendar links, structured data

pub mod calendar;
pub mod committee;
pub mod event;
pub mod filter;
pub mod image;
pub mod schema;
pub mod sort;
pub mod time;
pub mod tracing;

pub use calendar::{CalendarLinkBuilder, CalendarSlot, calendar_url, parse_clock};
pub use committee::{Committee, CoreMember, committee_names, search_committees};
pub use event::{Cost, Event};
pub use filter::{FilterState, Selection, distinct_organizers, distinct_tags, filter_events};
pub use image::{ImageSize, optimized_image_url, optimized_image_url_for};
pub use schema::{Breadcrumb, SiteInfo, breadcrumb_schema, event_schema, organization_schema};
pub use sort::{DEFAULT_HIGHLIGHTS, query_events, sort_events, sorted_events, upcoming_highlights};
pub use time::{TimeWindow, parse_event_date, today_local};
pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
