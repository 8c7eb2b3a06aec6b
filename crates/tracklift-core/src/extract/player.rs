//! Strategy for watch pages: the playing track plus the up-next queue.

use scraper::ElementRef;

use super::{before_bullet, UNKNOWN_ARTIST};
use crate::dom;
use crate::page;
use crate::track::TrackRecord;

pub(crate) fn extract(root: ElementRef<'_>, url: &str) -> Vec<TrackRecord> {
    let mut out = Vec::new();
    if let Some(rec) = current_track(root, url) {
        out.push(rec);
    }
    queue_tracks(root, &mut out);
    out
}

/// The track in the player bar.
///
/// Its identifier comes from the page URL rather than the DOM: the bar has
/// no stable id node, while the watch URL always names what is playing.
fn current_track(root: ElementRef<'_>, url: &str) -> Option<TrackRecord> {
    let bar = dom::select_first(root, "ytmusic-player-bar")?;
    let info = dom::select_first(bar, ".content-info-wrapper")?;
    let title = dom::first_text(info, "yt-formatted-string.title")
        .or_else(|| dom::first_text(info, ".title"));
    let artist = dom::select_first(info, ".subtitle")
        .and_then(|subtitle| {
            dom::first_text(subtitle, "a").or_else(|| {
                dom::text_of(subtitle)
                    .map(|text| before_bullet(&text))
                    .filter(|artist| !artist.is_empty())
            })
        })
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
    let identifier = page::query_param(url, "v");
    let thumbnail = dom::first_attr(bar, ".image", "src");
    TrackRecord::from_parts(identifier, title, Some(artist), thumbnail)
}

/// The up-next queue items.
///
/// The playing track usually appears in its own queue; identifiers already
/// placed are skipped so the first copy wins. A candidate that fails the
/// record gate is not placed, leaving the identifier free for a later,
/// complete copy.
fn queue_tracks(root: ElementRef<'_>, out: &mut Vec<TrackRecord>) {
    for item in dom::select_all(root, "ytmusic-player-queue-item") {
        let identifier = dom::first_attr(item, r#"a[href*="watch?v="]"#, "href")
            .and_then(|href| page::query_param(&href, "v"))
            .or_else(|| dom::attr_of(item, "data-video-id"));
        let Some(identifier) = identifier else {
            continue;
        };
        if out.iter().any(|track| track.identifier == identifier) {
            continue;
        }
        let title = dom::first_text(item, ".song-title");
        let artist = dom::first_text(item, ".byline");
        let thumbnail = dom::first_attr(item, "img", "src");
        if let Some(rec) = TrackRecord::from_parts(Some(identifier), title, artist, thumbnail) {
            out.push(rec);
        }
    }
}
