//! # Errors
//!
//! Every failure the core can produce ends up as an `AppError`. The
//! navigation state machine turns them into a Message screen, so `Display`
//! output is what the user reads.

use std::fmt;

use crate::transport::TransportError;

/// Why a catalog refresh did not produce a usable catalog.
#[derive(Debug)]
pub enum CatalogFailure {
    Transport(TransportError),
    Parse(String),
    /// The refresh succeeded but the feed contained no entries.
    Empty,
}

/// Why a transfer failed after the retry.
#[derive(Debug)]
pub enum TransferFailure {
    Transport(TransportError),
    Io(std::io::Error),
}

#[derive(Debug)]
pub enum AppError {
    /// Target directory or catalog URL missing.
    Config(String),
    Catalog(CatalogFailure),
    /// Chosen title is absent from the catalog, or has no URL.
    Resolution(String),
    Transfer(TransferFailure),
}

impl fmt::Display for CatalogFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogFailure::Transport(e) => write!(f, "{e}"),
            CatalogFailure::Parse(msg) => write!(f, "malformed catalog: {msg}"),
            CatalogFailure::Empty => write!(f, "catalog is empty"),
        }
    }
}

impl fmt::Display for TransferFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferFailure::Transport(e) => write!(f, "{e}"),
            TransferFailure::Io(e) => write!(f, "file error: {e}"),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "{msg}"),
            AppError::Catalog(e) => write!(f, "Failed to refresh catalog: {e}"),
            AppError::Resolution(msg) => write!(f, "{msg}"),
            AppError::Transfer(e) => write!(f, "Download failed: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<TransferFailure> for AppError {
    fn from(e: TransferFailure) -> Self {
        AppError::Transfer(e)
    }
}

impl From<std::io::Error> for TransferFailure {
    fn from(e: std::io::Error) -> Self {
        TransferFailure::Io(e)
    }
}

impl From<TransportError> for TransferFailure {
    fn from(e: TransportError) -> Self {
        TransferFailure::Transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_mentions_cause() {
        let err = AppError::Catalog(CatalogFailure::Transport(TransportError::Status {
            status: 404,
        }));
        assert_eq!(
            err.to_string(),
            "Failed to refresh catalog: server responded with HTTP 404"
        );
    }

    #[test]
    fn test_transfer_error_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = TransferFailure::from(io).into();
        assert!(err.to_string().starts_with("Download failed: file error"));
    }
}
