use std::fmt;

use async_trait::async_trait;

/// Errors raised by the HTTP seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection-level failure (DNS, refused, reset mid-body).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16 },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "network error: {msg}"),
            TransportError::Status { status } => write!(f, "server responded with HTTP {status}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// A response body delivered as a sequence of byte chunks.
#[async_trait]
pub trait BodyStream: Send {
    /// Returns the next chunk, or `None` once the body is exhausted.
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError>;
}

/// Anything that can perform an HTTP GET and hand back a streamed body.
///
/// The catalog store and the download controller only ever talk to this
/// trait, so tests can swap in a scripted source.
#[async_trait]
pub trait HttpSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// Issues a GET for `url`. Non-success statuses are errors.
    async fn get(&self, url: &str) -> Result<Box<dyn BodyStream>, TransportError>;
}

/// Drains a body into memory.
pub async fn read_to_end(body: &mut dyn BodyStream) -> Result<Vec<u8>, TransportError> {
    let mut out = Vec::new();
    while let Some(chunk) = body.next_chunk().await? {
        out.extend_from_slice(&chunk);
    }
    Ok(out)
}
