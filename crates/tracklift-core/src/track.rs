//! The track record every other layer trades in.

use serde::{Deserialize, Serialize};

/// One extracted track.
///
/// `identifier` is the platform's stable video id and `title` is the display
/// name; both are mandatory. Artist and thumbnail are best-effort and often
/// missing from sparse page layouts. Field names serialize in camelCase so
/// the stored and exported shapes match what downstream consumers parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub identifier: String,
    pub title: String,
    pub artist: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl TrackRecord {
    /// Assemble a record from whatever the page yielded.
    ///
    /// This is the single gate deciding whether a candidate becomes a
    /// record: no identifier or no title means no record. Empty strings
    /// count as absent, for the optional fields too.
    pub fn from_parts(
        identifier: Option<String>,
        title: Option<String>,
        artist: Option<String>,
        thumbnail_url: Option<String>,
    ) -> Option<Self> {
        let identifier = identifier.filter(|s| !s.is_empty())?;
        let title = title.filter(|s| !s.is_empty())?;
        Some(Self {
            identifier,
            title,
            artist: artist.filter(|s| !s.is_empty()),
            thumbnail_url: thumbnail_url.filter(|s| !s.is_empty()),
        })
    }
}
