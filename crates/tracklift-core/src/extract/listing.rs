//! Strategy for playlist and album listing pages.
//!
//! The page shows one row per track under a header describing the whole
//! collection. Rows on album pages often omit the artist, so the header
//! artist is resolved once up front and used as the per-row fallback.

use scraper::ElementRef;

use super::{before_bullet, BULLET, UNKNOWN_ARTIST};
use crate::dom;
use crate::page;
use crate::track::TrackRecord;

pub(crate) fn extract(root: ElementRef<'_>) -> Vec<TrackRecord> {
    let header_artist = header_artist(root);
    let mut out = Vec::new();
    for row in dom::select_all(root, "#contents > ytmusic-responsive-list-item-renderer") {
        let title = dom::first_text(row, "div.title-column yt-formatted-string a")
            .or_else(|| dom::first_text(row, "div.title-column yt-formatted-string"));
        let identifier = dom::first_attr(row, r#"a[href*="watch?v="]"#, "href")
            .and_then(|href| page::query_param(&href, "v"));
        let artist = row_artist(row, &header_artist);
        let thumbnail = dom::first_attr(row, "img", "src");
        if let Some(rec) = TrackRecord::from_parts(identifier, title, Some(artist), thumbnail) {
            out.push(rec);
        }
    }
    out
}

/// Collection-level artist from the page header.
///
/// Playlist headers link the artist directly. Album headers describe the
/// release in a strapline like "Album • Jane Doe • 2020", where the artist
/// is the second segment; a strapline without bullets is the artist alone.
fn header_artist(root: ElementRef<'_>) -> String {
    if let Some(artist) = dom::first_text(
        root,
        "#contents > ytmusic-responsive-header-renderer .strapline yt-formatted-string a",
    ) {
        return artist;
    }
    if let Some(text) = dom::first_text(root, "ytmusic-responsive-header-renderer .strapline") {
        let segments: Vec<&str> = text.split(BULLET).collect();
        if segments.len() >= 2 {
            return segments[1].trim().to_string();
        }
        return text;
    }
    UNKNOWN_ARTIST.to_string()
}

/// Per-row artist column, cut at the first bullet. A row whose column is
/// missing, empty, or the generic placeholder inherits the header artist.
fn row_artist(row: ElementRef<'_>, header_artist: &str) -> String {
    dom::first_text(row, ".secondary-flex-columns yt-formatted-string")
        .map(|text| before_bullet(&text))
        .filter(|artist| !artist.is_empty() && artist.as_str() != UNKNOWN_ARTIST)
        .unwrap_or_else(|| header_artist.to_string())
}
