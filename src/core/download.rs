//! # Download Controller
//!
//! Resolves a title to its URL and streams it into the target directory.
//!
//! ```text
//! download(title)
//!   ├─ target directory set?          no → AppError::Config
//!   ├─ catalog populated? (refresh once if not)
//!   │                                 no → AppError::Catalog
//!   ├─ title resolves to a URL?       no → AppError::Resolution
//!   ├─ title is a plain file name?    no → AppError::Resolution
//!   └─ RetryPolicy::run(attempt)      both attempts fail → AppError::Transfer
//! ```
//!
//! Each attempt truncates the destination and rewrites it from the first
//! byte. A failed transfer can leave a partial file behind.

use std::future::Future;
use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};
use tokio::io::AsyncWriteExt;

use crate::core::catalog::CatalogStore;
use crate::core::error::{AppError, CatalogFailure, TransferFailure};
use crate::core::state::Settings;
use crate::transport::HttpSource;

/// Bytes handed to each file write.
pub const CHUNK_SIZE: usize = 1024;

/// How many times a failed operation is repeated. No backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
}

impl RetryPolicy {
    /// One extra identical attempt.
    pub const SINGLE_RETRY: RetryPolicy = RetryPolicy { retries: 1 };

    /// Run `op` until it succeeds or the retries are used up. The last error wins.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt = 0;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retries => {
                    warn!("Attempt {} failed, retrying: {}", attempt + 1, e);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::SINGLE_RETRY
    }
}

/// Everything one transfer attempt needs. Built fresh per download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub title: String,
    pub url: String,
    pub destination: PathBuf,
}

pub struct DownloadController<'a> {
    source: &'a dyn HttpSource,
    policy: RetryPolicy,
}

impl<'a> DownloadController<'a> {
    pub fn new(source: &'a dyn HttpSource) -> Self {
        Self {
            source,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Download `title` into `settings.target_directory`, returning the byte count.
    pub async fn download(
        &self,
        catalog: &mut CatalogStore,
        settings: &Settings,
        title: &str,
    ) -> Result<u64, AppError> {
        let request = self.prepare(catalog, settings, title).await?;
        info!(
            "Downloading '{}' from {} to {}",
            request.title,
            request.url,
            request.destination.display()
        );

        let req = &request;
        let written = self
            .policy
            .run(move |_| self.attempt(req))
            .await
            .map_err(|e| {
                warn!("Download of '{}' failed: {}", req.title, e);
                AppError::Transfer(e)
            })?;

        info!("Saved {} ({} bytes)", request.destination.display(), written);
        Ok(written)
    }

    /// Checks preconditions in order and builds the request.
    async fn prepare(
        &self,
        catalog: &mut CatalogStore,
        settings: &Settings,
        title: &str,
    ) -> Result<DownloadRequest, AppError> {
        if settings.target_directory.is_empty() {
            return Err(AppError::Config("Target directory not set.".to_string()));
        }

        if catalog.is_empty() {
            debug!("Catalog empty at download time, refreshing once");
            catalog.refresh(self.source, &settings.source_url).await?;
            if catalog.is_empty() {
                return Err(AppError::Catalog(CatalogFailure::Empty));
            }
        }

        let url = catalog
            .find(title)
            .map(|entry| entry.url.clone())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                AppError::Resolution(format!("URL not found for '{title}'."))
            })?;

        Ok(DownloadRequest {
            title: title.to_string(),
            url,
            destination: destination_in(&settings.target_directory, title)?,
        })
    }

    /// One full transfer: GET, truncate the destination, write chunk by chunk.
    async fn attempt(&self, request: &DownloadRequest) -> Result<u64, TransferFailure> {
        let mut body = self.source.get(&request.url).await?;
        let mut file = tokio::fs::File::create(&request.destination).await?;

        let mut written = 0u64;
        while let Some(chunk) = body.next_chunk().await? {
            for piece in chunk.chunks(CHUNK_SIZE) {
                file.write_all(piece).await?;
                written += piece.len() as u64;
            }
        }
        file.flush().await?;
        debug!("Attempt wrote {} bytes", written);
        Ok(written)
    }
}

/// `<directory>/<title>`, provided the title names a single file.
///
/// Titles come from the remote feed; separators, `.`/`..` and absolute
/// paths would place the file somewhere else.
fn destination_in(directory: &str, title: &str) -> Result<PathBuf, AppError> {
    let mut components = Path::new(title).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if !title.contains(['/', '\\']) => {
            Ok(Path::new(directory).join(name))
        }
        _ => {
            warn!("Refusing to save '{}' outside {}", title, directory);
            Err(AppError::Resolution(format!(
                "'{title}' is not a valid file name."
            )))
        }
    }
}
