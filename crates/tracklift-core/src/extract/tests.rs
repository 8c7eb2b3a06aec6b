use super::*;

const PLAYLIST_URL: &str = "https://music.youtube.com/playlist?list=PLtest0001";
const ALBUM_URL: &str = "https://music.youtube.com/browse/MPREb_testalbum";
const WATCH_URL: &str = "https://music.youtube.com/watch?v=abc12345678";

#[test]
fn test_before_bullet() {
    assert_eq!(before_bullet("Jane Doe • Album X • 2020"), "Jane Doe");
    assert_eq!(before_bullet("No Bullet Here"), "No Bullet Here");
    assert_eq!(before_bullet("• Leading"), "");
}

#[test]
fn test_playlist_rows_with_header_link() {
    let html = r#"
    <html><body>
      <div id="contents">
        <ytmusic-responsive-header-renderer>
          <div class="strapline">
            <yt-formatted-string><a href="/channel/UCabc">Playlist Curator</a></yt-formatted-string>
          </div>
        </ytmusic-responsive-header-renderer>
        <ytmusic-responsive-list-item-renderer>
          <div class="left-items"><img src="https://img.example/t1.jpg"></div>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string><a href="https://music.youtube.com/watch?v=vid00000001&amp;list=PLtest0001">Track One</a></yt-formatted-string>
            </div>
            <div class="secondary-flex-columns">
              <yt-formatted-string><a href="/channel/UC1">Artist One</a></yt-formatted-string>
              <yt-formatted-string><a href="/browse/album1">Album One</a></yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
        <ytmusic-responsive-list-item-renderer>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string><a href="https://music.youtube.com/watch?v=vid00000002">Track Two</a></yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
      </div>
    </body></html>
    "#;

    let batch = extract_tracks(html, PLAYLIST_URL);
    assert_eq!(batch.len(), 2);

    assert_eq!(batch[0].identifier, "vid00000001");
    assert_eq!(batch[0].title, "Track One");
    assert_eq!(batch[0].artist.as_deref(), Some("Artist One"));
    assert_eq!(batch[0].thumbnail_url.as_deref(), Some("https://img.example/t1.jpg"));

    // No artist column: the header artist fills in.
    assert_eq!(batch[1].identifier, "vid00000002");
    assert_eq!(batch[1].artist.as_deref(), Some("Playlist Curator"));
    assert_eq!(batch[1].thumbnail_url, None);
}

#[test]
fn test_album_strapline_artist_and_idless_row_dropped() {
    let html = r#"
    <html><body>
      <div id="contents">
        <ytmusic-responsive-header-renderer>
          <div class="strapline">
            <yt-formatted-string>Album • Jane Doe • 2020</yt-formatted-string>
          </div>
        </ytmusic-responsive-header-renderer>
        <ytmusic-responsive-list-item-renderer>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string><a href="https://music.youtube.com/watch?v=vid00000001">Track One</a></yt-formatted-string>
            </div>
            <div class="secondary-flex-columns">
              <yt-formatted-string>Other Artist • Single</yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
        <ytmusic-responsive-list-item-renderer>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string>Ghost Track</yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
      </div>
    </body></html>
    "#;

    let batch = extract_tracks(html, ALBUM_URL);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].title, "Track One");
    // Present row artist wins over the strapline's "Jane Doe".
    assert_eq!(batch[0].artist.as_deref(), Some("Other Artist"));
}

#[test]
fn test_album_rows_inherit_strapline_artist() {
    let html = r#"
    <html><body>
      <div id="contents">
        <ytmusic-responsive-header-renderer>
          <div class="strapline">
            <yt-formatted-string>EP • Jane Doe • 2021</yt-formatted-string>
          </div>
        </ytmusic-responsive-header-renderer>
        <ytmusic-responsive-list-item-renderer>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string><a href="https://music.youtube.com/watch?v=vid00000001">Track One</a></yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
      </div>
    </body></html>
    "#;

    let batch = extract_tracks(html, ALBUM_URL);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].artist.as_deref(), Some("Jane Doe"));
}

#[test]
fn test_strapline_without_bullets_is_the_artist() {
    let html = r#"
    <html><body>
      <div id="contents">
        <ytmusic-responsive-header-renderer>
          <div class="strapline"><yt-formatted-string>Lone Artist</yt-formatted-string></div>
        </ytmusic-responsive-header-renderer>
        <ytmusic-responsive-list-item-renderer>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string><a href="https://music.youtube.com/watch?v=vid00000001">Track One</a></yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
      </div>
    </body></html>
    "#;

    let batch = extract_tracks(html, ALBUM_URL);
    assert_eq!(batch[0].artist.as_deref(), Some("Lone Artist"));
}

#[test]
fn test_generic_row_artist_inherits_header() {
    let html = r#"
    <html><body>
      <div id="contents">
        <ytmusic-responsive-header-renderer>
          <div class="strapline">
            <yt-formatted-string><a href="/channel/UC1">Real Artist</a></yt-formatted-string>
          </div>
        </ytmusic-responsive-header-renderer>
        <ytmusic-responsive-list-item-renderer>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string><a href="https://music.youtube.com/watch?v=vid00000001">Track One</a></yt-formatted-string>
            </div>
            <div class="secondary-flex-columns">
              <yt-formatted-string>Unknown Artist</yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
      </div>
    </body></html>
    "#;

    let batch = extract_tracks(html, PLAYLIST_URL);
    assert_eq!(batch[0].artist.as_deref(), Some("Real Artist"));
}

#[test]
fn test_listing_without_header_keeps_placeholder_artist() {
    let html = r#"
    <html><body>
      <div id="contents">
        <ytmusic-responsive-list-item-renderer>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string><a href="https://music.youtube.com/watch?v=vid00000001">Track One</a></yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
      </div>
    </body></html>
    "#;

    let batch = extract_tracks(html, PLAYLIST_URL);
    assert_eq!(batch[0].artist.as_deref(), Some(UNKNOWN_ARTIST));
}

#[test]
fn test_duplicate_rows_collapse_to_first() {
    let html = r#"
    <html><body>
      <div id="contents">
        <ytmusic-responsive-list-item-renderer>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string><a href="https://music.youtube.com/watch?v=vid00000001">First Copy</a></yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
        <ytmusic-responsive-list-item-renderer>
          <div class="flex-columns">
            <div class="title-column">
              <yt-formatted-string><a href="https://music.youtube.com/watch?v=vid00000001">Second Copy</a></yt-formatted-string>
            </div>
          </div>
        </ytmusic-responsive-list-item-renderer>
      </div>
    </body></html>
    "#;

    let batch = extract_tracks(html, PLAYLIST_URL);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].title, "First Copy");
}

#[test]
fn test_watch_page_current_track_and_queue() {
    let html = r#"
    <html><body>
      <ytmusic-player-bar>
        <div class="middle-controls">
          <div class="content-info-wrapper">
            <yt-formatted-string class="title">Song A</yt-formatted-string>
            <span class="subtitle">
              <yt-formatted-string>Jane Doe • Album X • 2020</yt-formatted-string>
            </span>
          </div>
        </div>
        <img class="image" src="https://img.example/current.jpg">
      </ytmusic-player-bar>
      <div id="side-panel">
        <ytmusic-player-queue-item>
          <img src="https://img.example/q1.jpg">
          <yt-formatted-string class="song-title">Song A</yt-formatted-string>
          <yt-formatted-string class="byline">Jane Doe</yt-formatted-string>
          <a href="watch?v=abc12345678&amp;list=RDAMVMabc12345678"></a>
        </ytmusic-player-queue-item>
        <ytmusic-player-queue-item>
          <img src="https://img.example/q2.jpg">
          <yt-formatted-string class="song-title">Song B</yt-formatted-string>
          <yt-formatted-string class="byline">John Roe</yt-formatted-string>
          <a href="watch?v=def00000001"></a>
        </ytmusic-player-queue-item>
        <ytmusic-player-queue-item data-video-id="ghi00000002">
          <yt-formatted-string class="song-title">Song C</yt-formatted-string>
        </ytmusic-player-queue-item>
        <ytmusic-player-queue-item>
          <yt-formatted-string class="song-title">No Id Here</yt-formatted-string>
        </ytmusic-player-queue-item>
        <ytmusic-player-queue-item data-video-id="jkl00000003">
          <yt-formatted-string class="byline">Titleless</yt-formatted-string>
        </ytmusic-player-queue-item>
      </div>
    </body></html>
    "#;

    let batch = extract_tracks(html, WATCH_URL);
    assert_eq!(batch.len(), 3);

    // Current track: id from the URL, artist from the subtitle text cut at
    // the first bullet.
    assert_eq!(batch[0].identifier, "abc12345678");
    assert_eq!(batch[0].title, "Song A");
    assert_eq!(batch[0].artist.as_deref(), Some("Jane Doe"));
    assert_eq!(batch[0].thumbnail_url.as_deref(), Some("https://img.example/current.jpg"));

    // Its queue copy was suppressed; the next distinct track follows.
    assert_eq!(batch[1].identifier, "def00000001");
    assert_eq!(batch[1].title, "Song B");
    assert_eq!(batch[1].artist.as_deref(), Some("John Roe"));

    // Identifier recovered from the data attribute; no byline, no artist.
    assert_eq!(batch[2].identifier, "ghi00000002");
    assert_eq!(batch[2].title, "Song C");
    assert_eq!(batch[2].artist, None);
    assert_eq!(batch[2].thumbnail_url, None);
}

#[test]
fn test_subtitle_link_wins_over_subtitle_text() {
    let html = r#"
    <html><body>
      <ytmusic-player-bar>
        <div class="content-info-wrapper">
          <yt-formatted-string class="title">Song A</yt-formatted-string>
          <span class="subtitle">
            <a href="/channel/UC1">Linked Artist</a> • Album X
          </span>
        </div>
      </ytmusic-player-bar>
    </body></html>
    "#;

    let batch = extract_tracks(html, WATCH_URL);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].artist.as_deref(), Some("Linked Artist"));
}

#[test]
fn test_watch_without_subtitle_gets_placeholder_artist() {
    let html = r#"
    <html><body>
      <ytmusic-player-bar>
        <div class="content-info-wrapper">
          <yt-formatted-string class="title">Song A</yt-formatted-string>
        </div>
      </ytmusic-player-bar>
    </body></html>
    "#;

    let batch = extract_tracks(html, WATCH_URL);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].artist.as_deref(), Some(UNKNOWN_ARTIST));
}

#[test]
fn test_titleless_queue_candidate_does_not_block_later_copy() {
    let html = r#"
    <html><body>
      <ytmusic-player-queue-item data-video-id="dup00000001">
        <yt-formatted-string class="byline">Early But Broken</yt-formatted-string>
      </ytmusic-player-queue-item>
      <ytmusic-player-queue-item data-video-id="dup00000001">
        <yt-formatted-string class="song-title">Recovered</yt-formatted-string>
      </ytmusic-player-queue-item>
    </body></html>
    "#;

    let batch = extract_tracks(html, "https://music.youtube.com/watch?v=xyz00000000");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].identifier, "dup00000001");
    assert_eq!(batch[0].title, "Recovered");
}

#[test]
fn test_watch_without_player_bar_still_reads_queue() {
    let html = r#"
    <html><body>
      <ytmusic-player-queue-item>
        <yt-formatted-string class="song-title">Song B</yt-formatted-string>
        <a href="watch?v=def00000001"></a>
      </ytmusic-player-queue-item>
    </body></html>
    "#;

    let batch = extract_tracks(html, WATCH_URL);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].identifier, "def00000001");
}

#[test]
fn test_watch_url_without_video_id_skips_current_track() {
    let html = r#"
    <html><body>
      <ytmusic-player-bar>
        <div class="content-info-wrapper">
          <yt-formatted-string class="title">Song A</yt-formatted-string>
        </div>
      </ytmusic-player-bar>
      <ytmusic-player-queue-item>
        <yt-formatted-string class="song-title">Song B</yt-formatted-string>
        <a href="watch?v=def00000001"></a>
      </ytmusic-player-queue-item>
    </body></html>
    "#;

    let batch = extract_tracks(html, "https://music.youtube.com/watch?v=&list=RDAMVM");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].identifier, "def00000001");
}

#[test]
fn test_unrecognized_url_yields_empty_batch() {
    let html = r#"
    <html><body>
      <ytmusic-responsive-list-item-renderer>
        <div class="title-column">
          <yt-formatted-string><a href="watch?v=vid00000001">Track One</a></yt-formatted-string>
        </div>
      </ytmusic-responsive-list-item-renderer>
    </body></html>
    "#;

    assert!(extract_tracks(html, "https://music.youtube.com/library").is_empty());
    assert!(extract_tracks("", PLAYLIST_URL).is_empty());
}
