//! Session over one named list: import, edit, persist, export.
//!
//! Every mutating operation persists before reporting success, so the
//! stored list always reflects what the caller last saw. When persistence
//! itself fails the in-memory list keeps its new state; the caller decides
//! whether to retry or bail.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::consolidate::TrackList;
use crate::export::ExportPayload;
use crate::protocol::{PageChannel, PageRequest};
use crate::store::ListStore;
use crate::track::TrackRecord;

/// What one import merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Records that were new to the list.
    pub added: usize,
    /// List length after the merge.
    pub total: usize,
}

/// Failures a session surfaces. None of them corrupt the list: the merge is
/// abandoned before any state changes, or the in-memory list stays intact
/// while persistence complains.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not communicate with page: {0}")]
    Transport(String),
    #[error("page did not respond within {0:?}")]
    Timeout(Duration),
    #[error("list store failure: {0}")]
    Store(String),
    #[error("export serialization failed: {0}")]
    Export(String),
}

pub struct ListSession<S> {
    store: S,
    key: String,
    list: TrackList,
}

impl<S: ListStore> ListSession<S> {
    /// Load the list under `key`, starting empty when nothing was stored.
    pub async fn open(store: S, key: impl Into<String>) -> Result<Self, SessionError> {
        let key = key.into();
        let list = store
            .get(&key)
            .await
            .map_err(|e| SessionError::Store(format!("{e:#}")))?
            .unwrap_or_default();
        debug!("opened list '{}' with {} tracks", key, list.len());
        Ok(Self { store, key, list })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn list(&self) -> &TrackList {
        &self.list
    }

    /// Ask the page for its tracks and merge the batch in.
    ///
    /// The merge happens only after a successful response; a failed or
    /// timed-out exchange leaves list and store exactly as they were.
    pub async fn import_from(
        &mut self,
        channel: &dyn PageChannel,
        timeout: Duration,
    ) -> Result<MergeOutcome, SessionError> {
        let request = channel.request(PageRequest::Extract);
        let response = match tokio::time::timeout(timeout, request).await {
            Err(_) => {
                warn!("page at {} did not respond within {:?}", channel.page_url(), timeout);
                return Err(SessionError::Timeout(timeout));
            }
            Ok(Err(e)) => {
                warn!("extraction request to {} failed: {:#}", channel.page_url(), e);
                return Err(SessionError::Transport(format!("{e:#}")));
            }
            Ok(Ok(response)) => response,
        };

        let added = self.list.merge_batch(response.items);
        self.persist().await?;
        info!("merged {} new tracks into '{}' ({} total)", added, self.key, self.list.len());
        Ok(MergeOutcome {
            added,
            total: self.list.len(),
        })
    }

    /// Move the entry at `index` one step toward the front. `Ok(false)`
    /// means there was nothing to do.
    pub async fn swap_up(&mut self, index: usize) -> Result<bool, SessionError> {
        if !self.list.swap_with_previous(index) {
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// Move the entry at `index` one step toward the back.
    pub async fn swap_down(&mut self, index: usize) -> Result<bool, SessionError> {
        if !self.list.swap_with_previous(index + 1) {
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// Remove the entry at `index`, returning it for caller feedback.
    pub async fn remove(&mut self, index: usize) -> Result<Option<TrackRecord>, SessionError> {
        let removed = self.list.remove_at(index);
        if removed.is_some() {
            self.persist().await?;
        }
        Ok(removed)
    }

    pub async fn clear(&mut self) -> Result<(), SessionError> {
        self.list.clear();
        self.persist().await?;
        info!("cleared list '{}'", self.key);
        Ok(())
    }

    pub fn export(&self) -> ExportPayload {
        ExportPayload::new(&self.list)
    }

    pub fn export_json(&self) -> Result<String, SessionError> {
        self.export()
            .to_json()
            .map_err(|e| SessionError::Export(format!("{e:#}")))
    }

    async fn persist(&self) -> Result<(), SessionError> {
        self.store
            .set(&self.key, &self.list)
            .await
            .map_err(|e| SessionError::Store(format!("{e:#}")))
    }
}
