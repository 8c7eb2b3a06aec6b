//! Versioned JSON export of a consolidated list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consolidate::TrackList;
use crate::track::TrackRecord;

/// Export envelope version. Bumped on breaking shape changes so consumers
/// can refuse payloads they do not understand.
pub const SCHEMA_VERSION: u32 = 1;

/// Fixed provenance tag identifying where the tracks came from.
pub const SOURCE_TAG: &str = "ytmusic";

/// The self-describing envelope handed to external consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub schema_version: u32,
    pub source: String,
    pub items: Vec<TrackRecord>,
    pub exported_at: DateTime<Utc>,
}

impl ExportPayload {
    /// Snapshot `list` stamped with the current time.
    pub fn new(list: &TrackList) -> Self {
        Self::at(list, Utc::now())
    }

    /// Snapshot `list` stamped with a caller-chosen time.
    pub fn at(list: &TrackList, exported_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            source: SOURCE_TAG.to_string(),
            items: list.tracks().to_vec(),
            exported_at,
        }
    }

    /// Pretty-printed JSON, the shape consumers actually receive.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
