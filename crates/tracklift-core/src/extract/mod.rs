//! Track extraction from page snapshots.
//!
//! One entry point, [`extract_tracks`], fans out to a per-view strategy:
//! listing pages walk the visible rows, watch pages read the player bar and
//! the up-next queue. Strategies push whatever candidates survive the record
//! gate; a final pass dedups by identifier so one snapshot never yields the
//! same track twice.

mod listing;
mod player;

use std::collections::HashSet;

use scraper::Html;
use tracing::debug;

use crate::page::{self, PageView};
use crate::track::TrackRecord;

/// Placeholder artist for layouts that carry no artist information at all.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Separator the platform uses between subtitle segments
/// ("Artist • Album • Year").
pub(crate) const BULLET: char = '•';

/// Extract every track the snapshot shows for its view.
///
/// Unrecognized URLs produce an empty batch; that is a normal outcome, not
/// an error.
pub fn extract_tracks(html: &str, url: &str) -> Vec<TrackRecord> {
    let view = page::classify(url);
    let doc = Html::parse_document(html);
    let root = doc.root_element();
    let batch = match view {
        PageView::PlaylistOrAlbum => listing::extract(root),
        PageView::WatchPlayer => player::extract(root, url),
        PageView::Unrecognized => Vec::new(),
    };
    let batch = dedup_by_identifier(batch);
    debug!("extracted {} tracks from {} view", batch.len(), view.label());
    batch
}

/// Text before the first bullet separator, trimmed. Text without a bullet
/// comes back whole.
pub(crate) fn before_bullet(text: &str) -> String {
    text.split(BULLET).next().unwrap_or("").trim().to_string()
}

/// Keep the first record for each identifier, preserving order.
fn dedup_by_identifier(batch: Vec<TrackRecord>) -> Vec<TrackRecord> {
    let mut seen = HashSet::new();
    batch
        .into_iter()
        .filter(|track| seen.insert(track.identifier.clone()))
        .collect()
}

#[cfg(test)]
mod tests;
