//! Boundary contract for asking a page for its tracks.
//!
//! The page side owns its document; callers only see the URL it reports and
//! one request/response exchange. A page that never answers is handled by
//! the caller's deadline, not here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::extract;
use crate::track::TrackRecord;

/// Requests understood by the page side of the channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum PageRequest {
    /// Run extraction against the current document.
    Extract,
}

/// Successful answer to [`PageRequest::Extract`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub items: Vec<TrackRecord>,
}

/// One page the session can be pointed at.
#[async_trait]
pub trait PageChannel: Send + Sync {
    /// URL the page reports for itself.
    fn page_url(&self) -> &str;

    /// Send one request and wait for the page's answer.
    async fn request(&self, request: PageRequest) -> anyhow::Result<ExtractResponse>;
}

/// Channel over a saved page snapshot; extraction runs locally against the
/// stored document.
#[derive(Debug, Clone)]
pub struct SnapshotChannel {
    url: String,
    html: String,
}

impl SnapshotChannel {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

#[async_trait]
impl PageChannel for SnapshotChannel {
    fn page_url(&self) -> &str {
        &self.url
    }

    async fn request(&self, request: PageRequest) -> anyhow::Result<ExtractResponse> {
        match request {
            PageRequest::Extract => Ok(ExtractResponse {
                items: extract::extract_tracks(&self.html, &self.url),
            }),
        }
    }
}
