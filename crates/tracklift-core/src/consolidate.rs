//! The consolidated track list and its editing operations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::track::TrackRecord;

/// A persisted, user-ordered, identifier-deduplicated sequence of tracks.
///
/// Serializes as a bare array so the stored shape is just the records
/// themselves. All edits are plain in-memory transforms; persistence is the
/// session's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackList(Vec<TrackRecord>);

impl TrackList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tracks(&self) -> &[TrackRecord] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&TrackRecord> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackRecord> {
        self.0.iter()
    }

    /// Append the batch records whose identifiers are not already present,
    /// in batch order, and report how many made it in. The existing entry
    /// always wins over a later arrival, so re-merging the same batch adds
    /// nothing and user ordering survives re-imports.
    pub fn merge_batch(&mut self, batch: Vec<TrackRecord>) -> usize {
        let mut present: HashSet<String> =
            self.0.iter().map(|track| track.identifier.clone()).collect();
        let mut added = 0;
        for rec in batch {
            if present.insert(rec.identifier.clone()) {
                self.0.push(rec);
                added += 1;
            }
        }
        added
    }

    /// Swap the entry at `index` with the one before it. The first entry
    /// stays put; out-of-range indices change nothing. Returns whether the
    /// list changed.
    pub fn swap_with_previous(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.0.len() {
            return false;
        }
        self.0.swap(index - 1, index);
        true
    }

    /// Remove and return the entry at `index`; later entries close the gap.
    pub fn remove_at(&mut self, index: usize) -> Option<TrackRecord> {
        if index >= self.0.len() {
            return None;
        }
        Some(self.0.remove(index))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<TrackRecord>> for TrackList {
    fn from(tracks: Vec<TrackRecord>) -> Self {
        Self(tracks)
    }
}
