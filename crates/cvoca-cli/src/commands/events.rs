//! Event commands.
//!
//! Each command returns its output as a string; `main` prints it.

use chrono::NaiveDate;
use cvoca_core::{
    Breadcrumb, Event, FilterState, Selection, breadcrumb_schema, committee_names, distinct_tags,
    event_schema, organization_schema,
};
use cvoca_store::EventStore;
use serde_json::Value;
use tracing::debug;

use crate::cli::ListArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::render::{EventFormatter, FormatOptions};

/// Builds the filter state selected by the `list` flags.
pub fn filter_state(args: &ListArgs, config: &CliConfig) -> FilterState {
    FilterState {
        query: args.search.clone().unwrap_or_default(),
        organizer: Selection::from_input(args.organizer.as_deref()),
        tag: Selection::from_input(args.tag.as_deref()),
        window: args.when.unwrap_or(config.display.default_window),
    }
}

fn formatter(config: &CliConfig, show_calendar_links: bool) -> EventFormatter {
    EventFormatter::new(
        config.calendar_links(),
        FormatOptions {
            max_title_length: config.display.max_title_length,
            show_calendar_links,
        },
    )
}

fn render(events: &[Event], config: &CliConfig, json: bool, links: bool) -> CliResult<String> {
    let formatter = formatter(config, links);
    if json {
        Ok(serde_json::to_string_pretty(&formatter.format_json(events))?)
    } else {
        Ok(formatter.format_text(events))
    }
}

fn find_event(events: &[Event], id: u64) -> CliResult<&Event> {
    events
        .iter()
        .find(|e| e.id == id)
        .ok_or(CliError::EventNotFound(id))
}

/// Lists the events page for the given filters.
pub async fn list(
    store: &EventStore,
    config: &CliConfig,
    args: &ListArgs,
    today: NaiveDate,
) -> CliResult<String> {
    let page = store.load_events_page().await;
    let state = filter_state(args, config);
    let mut events = page.query(&state, today);
    debug!(
        matched = events.len(),
        active_filters = state.has_active_filters(),
        "Filtered events"
    );

    if let Some(limit) = args.limit {
        events.truncate(limit);
    }
    render(&events, config, args.json, args.links)
}

/// Shows the home page highlights.
pub async fn upcoming(
    store: &EventStore,
    config: &CliConfig,
    limit: Option<usize>,
    json: bool,
    today: NaiveDate,
) -> CliResult<String> {
    let limit = limit.unwrap_or(config.display.highlights);
    let events = store.load_home_page(today, limit).await;
    render(&events, config, json, false)
}

/// Prints the calendar link of one event.
pub async fn calendar_url(store: &EventStore, config: &CliConfig, id: u64) -> CliResult<String> {
    let events = store.try_load().await?;
    let event = find_event(&events, id)?;
    Ok(config.calendar_links().build(event))
}

/// Lists the tag choices, one per line.
pub async fn tags(store: &EventStore) -> CliResult<String> {
    Ok(distinct_tags(&store.load().await).join("\n"))
}

/// Lists the organizer choices, one per line.
pub async fn organizers(store: &EventStore) -> CliResult<String> {
    Ok(committee_names(&store.load_committees().await).join("\n"))
}

/// Prints structured data: the event and its breadcrumb trail, or the
/// organization document when no event is named.
pub async fn schema(store: &EventStore, config: &CliConfig, id: Option<u64>) -> CliResult<String> {
    let site = &config.site;
    let value = match id {
        None => organization_schema(site),
        Some(id) => {
            let events = store.try_load().await?;
            let event = find_event(&events, id)?;
            let trail = [
                Breadcrumb::new("Home", site.url_for("/")),
                Breadcrumb::new("Events", site.url_for("/events")),
            ];
            Value::Array(vec![event_schema(event, site), breadcrumb_schema(&trail)])
        }
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvoca_core::TimeWindow;
    use cvoca_store::FileSource;

    const EVENTS: &str = r#"[
        {"id": 1, "title": "GST Annual Return Workshop", "date": "2024-05-20", "time": "10:00 AM - 1:00 PM",
         "committee": "Indirect Tax", "tags": ["GST", "Workshop"], "cost": "₹300", "location": "CVOCA Hall"},
        {"id": 2, "title": "Yoga Morning", "date": "2024-06-15", "time": "6:00 AM - 7:30 AM",
         "committee": "Sports", "tags": ["Wellness"], "cost": "Free", "location": "Shivaji Park"},
        {"id": 3, "title": "ITR Filing Clinic", "date": "2024-07-01", "time": "6:00 PM - 8:00 PM",
         "committee": "Direct Tax", "tags": ["ITR", "GST"], "location": "Online (Zoom)",
         "registrationLink": "https://forms.example.org/itr"},
        {"id": 4, "title": "Study Circle: Faceless Assessments", "date": "2024-08-05",
         "committee": "Direct Tax", "tags": ["Study Circle"]}
    ]"#;

    const COMMITTEES: &str = r#"[
        {"name": "Direct Tax", "chairperson": {"name": "A. Shah", "nativePlace": "Vadnagar"}},
        {"name": "Indirect Tax"},
        {"name": "Sports"}
    ]"#;

    fn fixture(files: &[(&str, &str)]) -> (tempfile::TempDir, EventStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            std::fs::write(dir.path().join(name), body).unwrap();
        }
        let store = EventStore::new(FileSource::new(dir.path()));
        (dir, store)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    mod listing {
        use super::*;

        #[tokio::test]
        async fn defaults_to_upcoming_soonest_first() {
            let (_dir, store) = fixture(&[("events.json", EVENTS), ("committees.json", COMMITTEES)]);
            let out = list(&store, &CliConfig::default(), &ListArgs::default(), today())
                .await
                .unwrap();
            let titles: Vec<&str> = out.lines().collect();
            assert_eq!(titles.len(), 3);
            assert!(titles[0].contains("Yoga Morning"));
            assert!(titles[1].contains("ITR Filing Clinic"));
            assert!(titles[2].contains("Study Circle"));
        }

        #[tokio::test]
        async fn combines_filters() {
            let (_dir, store) = fixture(&[("events.json", EVENTS), ("committees.json", COMMITTEES)]);
            let args = ListArgs {
                tag: Some("GST".to_string()),
                when: Some(TimeWindow::All),
                json: true,
                ..Default::default()
            };
            let out = list(&store, &CliConfig::default(), &args, today()).await.unwrap();
            let value: Value = serde_json::from_str(&out).unwrap();
            let ids: Vec<u64> = value["events"]
                .as_array()
                .unwrap()
                .iter()
                .map(|e| e["id"].as_u64().unwrap())
                .collect();
            assert_eq!(ids, vec![3, 1]);
            assert_eq!(value["events"][0]["isVirtual"], true);
        }

        #[tokio::test]
        async fn organizer_and_limit() {
            let (_dir, store) = fixture(&[("events.json", EVENTS), ("committees.json", COMMITTEES)]);
            let args = ListArgs {
                organizer: Some("Direct Tax".to_string()),
                when: Some(TimeWindow::All),
                limit: Some(1),
                ..Default::default()
            };
            let out = list(&store, &CliConfig::default(), &args, today()).await.unwrap();
            assert_eq!(out.lines().count(), 1);
            assert!(out.contains("Study Circle"));
        }

        #[tokio::test]
        async fn missing_committees_empties_listing() {
            let (_dir, store) = fixture(&[("events.json", EVENTS)]);
            let out = list(&store, &CliConfig::default(), &ListArgs::default(), today())
                .await
                .unwrap();
            assert_eq!(out, crate::render::NO_EVENTS_TEXT);
        }

        #[test]
        fn all_means_no_filter() {
            let args = ListArgs {
                organizer: Some("all".to_string()),
                tag: Some(String::new()),
                ..Default::default()
            };
            let state = filter_state(&args, &CliConfig::default());
            assert_eq!(state, FilterState::new());
        }

        #[test]
        fn window_falls_back_to_config() {
            let mut config = CliConfig::default();
            config.display.default_window = TimeWindow::Past;
            let state = filter_state(&ListArgs::default(), &config);
            assert_eq!(state.window, TimeWindow::Past);
        }
    }

    #[tokio::test]
    async fn upcoming_uses_configured_count() {
        let (_dir, store) = fixture(&[("events.json", EVENTS)]);
        let mut config = CliConfig::default();
        config.display.highlights = 2;
        let out = upcoming(&store, &config, None, false, today()).await.unwrap();
        assert_eq!(out.lines().count(), 2);

        let out = upcoming(&store, &config, Some(5), false, today()).await.unwrap();
        assert_eq!(out.lines().count(), 3);
    }

    #[tokio::test]
    async fn calendar_url_for_event() {
        let (_dir, store) = fixture(&[("events.json", EVENTS)]);
        let url = calendar_url(&store, &CliConfig::default(), 2).await.unwrap();
        insta::assert_snapshot!(url, @"https://www.google.com/calendar/render?action=TEMPLATE&text=Yoga%20Morning&dates=20240615T060000/20240615T073000&details=&location=Shivaji%20Park&ctz=Asia/Kolkata");

        let err = calendar_url(&store, &CliConfig::default(), 99).await.unwrap_err();
        assert!(matches!(err, CliError::EventNotFound(99)));
    }

    #[tokio::test]
    async fn calendar_url_surfaces_load_failures() {
        let (_dir, store) = fixture(&[]);
        let err = calendar_url(&store, &CliConfig::default(), 2).await.unwrap_err();
        assert!(matches!(err, CliError::Store(_)));
    }

    #[tokio::test]
    async fn tags_and_organizers() {
        let (_dir, store) = fixture(&[("events.json", EVENTS), ("committees.json", COMMITTEES)]);
        assert_eq!(
            tags(&store).await.unwrap(),
            "GST\nWorkshop\nWellness\nITR\nStudy Circle"
        );
        assert_eq!(
            organizers(&store).await.unwrap(),
            "Direct Tax\nIndirect Tax\nSports"
        );
    }

    mod structured_data {
        use super::*;

        #[tokio::test]
        async fn event_and_breadcrumbs() {
            let (_dir, store) = fixture(&[("events.json", EVENTS)]);
            let out = schema(&store, &CliConfig::default(), Some(3)).await.unwrap();
            let value: Value = serde_json::from_str(&out).unwrap();

            assert_eq!(value[0]["@type"], "Event");
            assert_eq!(value[0]["location"]["@type"], "VirtualLocation");
            assert_eq!(value[0]["location"]["url"], "https://forms.example.org/itr");
            assert_eq!(value[1]["@type"], "BreadcrumbList");
            assert_eq!(value[1]["itemListElement"][1]["item"], "https://cvoca.org/events");
        }

        #[tokio::test]
        async fn organization_without_id() {
            let (_dir, store) = fixture(&[]);
            let out = schema(&store, &CliConfig::default(), None).await.unwrap();
            let value: Value = serde_json::from_str(&out).unwrap();
            assert_eq!(value["alternateName"], "CVOCA");
        }
    }
}
