//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/cvoca/config.toml` by default. Every section is optional:
//!
//! ```toml
//! debug = false
//!
//! [source]
//! base_url = "https://cvoca.org/data/"   # or data_dir = "./public/data"
//!
//! [calendar]
//! timezone = "Asia/Kolkata"
//!
//! [display]
//! default_window = "upcoming"
//! highlights = 3
//!
//! [site]
//! base_url = "https://cvoca.org"
//! ```

use std::path::{Path, PathBuf};

use cvoca_core::calendar::{DEFAULT_TIMEZONE, GOOGLE_CALENDAR_URL};
use cvoca_core::{CalendarLinkBuilder, DEFAULT_HIGHLIGHTS, SiteInfo, TimeWindow};
use cvoca_store::{COMMITTEES_RESOURCE, EVENTS_RESOURCE, EventStore, FileSource, HttpSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Where the published site serves its static data.
pub const DEFAULT_DATA_URL: &str = "https://cvoca.org/data/";

// ---------------------------------------------------------------------------
// CliConfig (config.toml)
// ---------------------------------------------------------------------------

/// Configuration for the `cvoca-events` CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Debug mode.
    pub debug: bool,

    /// Where events and committees are read from.
    pub source: SourceSettings,

    /// Calendar link settings.
    pub calendar: CalendarSettings,

    /// Listing defaults.
    pub display: DisplaySettings,

    /// Site facts used for structured data.
    pub site: SiteInfo,
}

/// Data source settings. `data_dir` takes precedence over `base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Base URL of the static data path.
    pub base_url: Option<String>,

    /// Local directory holding the JSON resources.
    pub data_dir: Option<PathBuf>,

    /// Name of the events resource.
    pub events_resource: String,

    /// Name of the committees resource.
    pub committees_resource: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            data_dir: None,
            events_resource: EVENTS_RESOURCE.to_string(),
            committees_resource: COMMITTEES_RESOURCE.to_string(),
        }
    }
}

/// Calendar link settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// Calendar service endpoint.
    pub base_url: String,

    /// Timezone passed to the calendar service.
    pub timezone: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_CALENDAR_URL.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Listing defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Window used by `list` when `--when` is not given.
    pub default_window: TimeWindow,

    /// Number of events shown by `upcoming`.
    pub highlights: usize,

    /// Maximum title length in text output (truncated with ellipsis).
    pub max_title_length: Option<usize>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_window: TimeWindow::Upcoming,
            highlights: DEFAULT_HIGHLIGHTS,
            max_title_length: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the default path, or defaults if it does not exist.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cvoca")
    }

    /// Applies command-line source overrides. The last source named wins.
    pub fn with_source_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        base_url: Option<String>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.source.data_dir = Some(dir);
            self.source.base_url = None;
        } else if let Some(url) = base_url {
            self.source.base_url = Some(url);
            self.source.data_dir = None;
        }
        self
    }

    /// Builds the event store described by the `[source]` section.
    pub fn event_store(&self) -> CliResult<EventStore> {
        let store = match (&self.source.data_dir, &self.source.base_url) {
            (Some(dir), _) => EventStore::new(FileSource::new(dir)),
            (None, Some(url)) => EventStore::new(HttpSource::new(url)?),
            (None, None) => EventStore::new(HttpSource::new(DEFAULT_DATA_URL)?),
        };
        Ok(store
            .with_events_resource(&self.source.events_resource)
            .with_committees_resource(&self.source.committees_resource))
    }

    /// Builds the calendar link builder described by the `[calendar]` section.
    pub fn calendar_links(&self) -> CalendarLinkBuilder {
        CalendarLinkBuilder::new()
            .with_base_url(&self.calendar.base_url)
            .with_timezone(&self.calendar.timezone)
    }
}
