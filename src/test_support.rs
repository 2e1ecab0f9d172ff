//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::state::{App, Settings};
use crate::transport::{BodyStream, HttpSource, TransportError};

pub const FEED_URL: &str = "http://feed/catalog.json";

/// Canned response for one GET.
#[derive(Clone, Debug)]
pub enum Reply {
    Body(Vec<u8>),
    Fail(TransportError),
    /// Some chunks arrive, then the connection drops.
    Partial {
        chunks: Vec<Vec<u8>>,
        error: TransportError,
    },
}

/// An `HttpSource` that answers from a script.
///
/// Replies registered for a URL are served in order; the last one repeats.
/// Unscripted URLs answer 404.
#[derive(Default)]
pub struct ScriptedSource {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, url: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests_for(&self, url: &str) -> usize {
        self.requests.lock().unwrap().iter().filter(|u| *u == url).count()
    }

    fn next_reply(&self, url: &str) -> Reply {
        let mut replies = self.replies.lock().unwrap();
        match replies.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Reply::Fail(TransportError::Status { status: 404 }),
        }
    }
}

struct ScriptedBody {
    chunks: VecDeque<Result<Vec<u8>, TransportError>>,
}

#[async_trait]
impl BodyStream for ScriptedBody {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        self.chunks.pop_front().transpose()
    }
}

#[async_trait]
impl HttpSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn get(&self, url: &str) -> Result<Box<dyn BodyStream>, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        let chunks = match self.next_reply(url) {
            Reply::Fail(e) => return Err(e),
            Reply::Body(body) => body.chunks(700).map(|c| Ok(c.to_vec())).collect(),
            Reply::Partial { chunks, error } => chunks
                .into_iter()
                .map(Ok)
                .chain(std::iter::once(Err(error)))
                .collect(),
        };
        Ok(Box::new(ScriptedBody { chunks }))
    }
}

/// Creates a test App pointed at `FEED_URL` with no target directory.
pub fn test_app() -> App {
    App::new(Settings {
        target_directory: String::new(),
        source_url: FEED_URL.to_string(),
    })
}

/// Fresh scratch directory, removed on drop.
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}
