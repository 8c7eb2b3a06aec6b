//! Page-view classification and URL field readers.
//!
//! Classification looks only at the URL, never the document: the markers are
//! stable across page redesigns while the DOM is not.

use regex::Regex;

/// Which known layout a page URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    /// Playlist listing or album browse page.
    PlaylistOrAlbum,
    /// Now-playing watch page with its up-next queue.
    WatchPlayer,
    /// Anything else; extraction yields an empty batch.
    Unrecognized,
}

impl PageView {
    pub fn label(&self) -> &'static str {
        match self {
            PageView::PlaylistOrAlbum => "playlist/album",
            PageView::WatchPlayer => "watch/player",
            PageView::Unrecognized => "unrecognized",
        }
    }
}

/// Classify a URL by its shape.
///
/// A playlist URL that also carries the watch marker counts as watch: the
/// user is playing the playlist, not browsing it.
pub fn classify(url: &str) -> PageView {
    let watch = url.contains("watch?v=");
    if (url.contains("playlist?list=") || url.contains("/browse/")) && !watch {
        PageView::PlaylistOrAlbum
    } else if watch {
        PageView::WatchPlayer
    } else {
        PageView::Unrecognized
    }
}

/// First value of `name` in the URL's query string, or `None` when the
/// parameter is missing or empty. Works on full URLs and on relative hrefs
/// like `watch?v=...` alike.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let query = url.split('?').nth(1)?;
    let query = query.split('#').next().unwrap_or(query);
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some(name) {
            return parts.next().filter(|v| !v.is_empty()).map(str::to_string);
        }
    }
    None
}

/// Video id carried by a watch URL: the `v` query parameter, else the
/// `watch/<id>` path form some shared links use.
pub fn video_id_from_url(url: &str) -> Option<String> {
    query_param(url, "v").or_else(|| path_video_id(url))
}

/// Playlist id carried by a playlist or watch URL.
pub fn playlist_id_from_url(url: &str) -> Option<String> {
    query_param(url, "list")
}

/// Whether the URL's hostname contains `host`. URLs without a scheme have
/// no readable hostname and never match.
pub fn host_matches(url: &str, host: &str) -> bool {
    host_of(url).map(|h| h.contains(host)).unwrap_or(false)
}

fn path_video_id(url: &str) -> Option<String> {
    // Video ids are exactly 11 word-or-dash characters.
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let re = Regex::new(r"watch/([\w-]{11})").ok()?;
    re.captures(path).map(|caps| caps[1].to_string())
}

fn host_of(url: &str) -> Option<&str> {
    let rest = url.split("://").nth(1)?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    rest[..end].split(':').next().filter(|h| !h.is_empty())
}
