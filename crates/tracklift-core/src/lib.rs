//! Track metadata extraction and list consolidation for music-streaming
//! pages.
//!
//! The extraction side classifies a page by URL shape, walks a parsed
//! snapshot of its document with layered fallback rules, and emits a
//! deduplicated batch of [`TrackRecord`]s. The consolidation side merges
//! batches into named, persisted, user-orderable lists and exports them as
//! versioned JSON.

pub mod config;
pub mod consolidate;
pub mod dom;
pub mod export;
pub mod extract;
pub mod page;
pub mod protocol;
pub mod session;
pub mod store;
pub mod track;

pub use consolidate::TrackList;
pub use extract::extract_tracks;
pub use page::{classify, PageView};
pub use track::TrackRecord;
