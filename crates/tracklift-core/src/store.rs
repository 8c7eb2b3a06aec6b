//! Named persistent storage for consolidated lists.
//!
//! A store holds independent lists under string keys and never interprets
//! them; ordering and deduplication stay with the callers. Two keys are
//! conventional: the import queue and the user's saved list.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::consolidate::TrackList;

/// Key of the list fed by imports.
pub const QUEUE_KEY: &str = "queue";
/// Key of the user's long-lived saved list.
pub const SAVED_KEY: &str = "saved";

#[async_trait]
pub trait ListStore: Send + Sync {
    /// The list under `key`, or `None` when nothing was stored yet.
    async fn get(&self, key: &str) -> anyhow::Result<Option<TrackList>>;

    /// Replace the list under `key`.
    async fn set(&self, key: &str, list: &TrackList) -> anyhow::Result<()>;
}

/// All lists in one JSON file, an object keyed by list name.
///
/// A missing file reads as an empty store. Writes go through a full
/// read-modify-write so keys never clobber each other.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> anyhow::Result<BTreeMap<String, TrackList>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("malformed list store {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read list store {}", self.path.display()))
            }
        }
    }
}

#[async_trait]
impl ListStore for JsonFileStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<TrackList>> {
        let mut map = self.read_map().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, list: &TrackList) -> anyhow::Result<()> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), list.clone());
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&map)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("failed to write list store {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory store. Clones share the same lists, which is what tests and
/// short-lived tools want.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lists: Arc<RwLock<HashMap<String, TrackList>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<TrackList>> {
        Ok(self.lists.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, list: &TrackList) -> anyhow::Result<()> {
        self.lists.write().await.insert(key.to_string(), list.clone());
        Ok(())
    }
}
