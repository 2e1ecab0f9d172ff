//! # Catalog Store
//!
//! Holds the in-memory list of downloadable entries and swaps it wholesale on
//! refresh. Nothing here touches the filesystem.
//!
//! ```text
//! refresh(url) ──► HttpSource::get ──► parse_catalog ──► swap Arc
//!                        │                   │
//!                        └─── error ─────────┴──► store untouched
//! ```
//!
//! Snapshots are `Arc` handles: a reader holding one keeps seeing the catalog
//! it was given even if a refresh lands afterwards.

use std::sync::Arc;

use log::{info, warn};
use serde::Deserialize;

use crate::core::error::{AppError, CatalogFailure};
use crate::transport::{HttpSource, read_to_end};

/// A single downloadable item from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub url: String,
}

impl CatalogEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Shared, immutable view of the catalog.
pub type Catalog = Arc<[CatalogEntry]>;

/// Feed record as published. Missing or null fields collapse to empty strings.
#[derive(Deserialize)]
struct FeedRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Parses a catalog payload: a JSON array of `{title, url}` objects.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<CatalogEntry>, CatalogFailure> {
    let records: Vec<FeedRecord> =
        serde_json::from_slice(body).map_err(|e| CatalogFailure::Parse(e.to_string()))?;
    Ok(records
        .into_iter()
        .map(|r| CatalogEntry {
            title: r.title.unwrap_or_default(),
            url: r.url.unwrap_or_default(),
        })
        .collect())
}

pub struct CatalogStore {
    entries: Catalog,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
        }
    }

    /// Current catalog. Cheap; never blocks.
    pub fn snapshot(&self) -> Catalog {
        Arc::clone(&self.entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First entry whose title matches exactly.
    pub fn find(&self, title: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.title == title)
    }

    /// Replace the catalog. Only used after a successful fetch and in tests.
    pub fn replace(&mut self, entries: Vec<CatalogEntry>) {
        self.entries = Arc::from(entries);
    }

    /// Fetch and parse `source_url`, swapping the catalog in on success.
    ///
    /// On any failure the previous catalog is kept as-is.
    pub async fn refresh(
        &mut self,
        source: &dyn HttpSource,
        source_url: &str,
    ) -> Result<usize, AppError> {
        if source_url.trim().is_empty() {
            return Err(AppError::Config("Catalog source URL is not set.".to_string()));
        }

        info!("Refreshing catalog from {} via {}", source_url, source.name());

        let body = match source.get(source_url).await {
            Ok(mut stream) => read_to_end(stream.as_mut()).await,
            Err(e) => Err(e),
        }
        .map_err(|e| {
            warn!("Catalog fetch failed: {}", e);
            AppError::Catalog(CatalogFailure::Transport(e))
        })?;

        let entries = parse_catalog(&body).map_err(|e| {
            warn!("Catalog parse failed: {}", e);
            AppError::Catalog(e)
        })?;

        let count = entries.len();
        self.replace(entries);
        info!("Catalog refreshed: {} entries", count);
        Ok(count)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
