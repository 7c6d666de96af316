//! Data sources for the static JSON resources.
//!
//! A [`DataSource`] returns the raw text of a named resource such as
//! `events.json`. Two implementations are provided:
//!
//! - [`HttpSource`]: unauthenticated GET against the site's static data path
//! - [`FileSource`]: reads from a local data directory

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use reqwest::Client;
use tracing::{debug, trace};
use url::Url;

use crate::error::{StoreError, StoreResult};

/// A boxed future, keeping [`DataSource`] object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A place the static JSON resources can be read from.
pub trait DataSource: Send + Sync {
    /// Short description used in logs (URL or directory).
    fn describe(&self) -> String;

    /// Fetches the full text of one resource.
    fn fetch<'a>(&'a self, resource: &'a str) -> BoxFuture<'a, StoreResult<String>>;
}

/// Reads resources over HTTP from a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// Creates a source rooted at `base_url` (e.g. `https://cvoca.org/data/`).
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(base_url: impl AsRef<str>) -> StoreResult<Self> {
        let mut text = base_url.as_ref().trim().to_string();
        if !text.ends_with('/') {
            text.push('/');
        }
        let base_url = Url::parse(&text).map_err(|e| {
            StoreError::configuration(format!("invalid base URL {:?}", text)).with_source(e)
        })?;

        let client = Client::builder()
            .user_agent(format!("cvoca-events/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                StoreError::configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, base_url })
    }

    /// Returns the base URL resources are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves the URL of one resource.
    pub fn resource_url(&self, resource: &str) -> StoreResult<Url> {
        self.base_url.join(resource).map_err(|e| {
            StoreError::configuration(format!("invalid resource path {:?}", resource))
                .with_resource(resource)
                .with_source(e)
        })
    }

    async fn get(&self, resource: &str) -> StoreResult<String> {
        let url = self.resource_url(resource)?;
        trace!(url = %url, "Sending request");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            StoreError::network(format!("request to {} failed", url))
                .with_resource(resource)
                .with_source(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::from_status(
                status.as_u16(),
                format!("{} returned {}", url, status),
            )
            .with_resource(resource));
        }

        let body = response.text().await.map_err(|e| {
            StoreError::network(format!("failed to read body from {}", url))
                .with_resource(resource)
                .with_source(e)
        })?;
        debug!(url = %url, bytes = body.len(), "Fetched resource");
        Ok(body)
    }
}

impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.base_url.to_string()
    }

    fn fetch<'a>(&'a self, resource: &'a str) -> BoxFuture<'a, StoreResult<String>> {
        Box::pin(self.get(resource))
    }
}

/// Reads resources from a local directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read(&self, resource: &str) -> StoreResult<String> {
        let path = self.dir.join(resource);
        trace!(path = %path.display(), "Reading resource");

        match tokio::fs::read_to_string(&path).await {
            Ok(body) => {
                debug!(path = %path.display(), bytes = body.len(), "Read resource");
                Ok(body)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StoreError::not_found(
                format!("{} does not exist", path.display()),
            )
            .with_resource(resource)
            .with_source(e)),
            Err(e) => Err(StoreError::io(format!("failed to read {}", path.display()))
                .with_resource(resource)
                .with_source(e)),
        }
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn fetch<'a>(&'a self, resource: &'a str) -> BoxFuture<'a, StoreResult<String>> {
        Box::pin(self.read(resource))
    }
}
