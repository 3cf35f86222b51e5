//! Shared test utilities for the webgallery test suite.
//!
//! Provides sessions without touching a credential file, media fixture
//! files on disk, and small string helpers for inspecting generated HTML.

use std::path::Path;

use crate::auth::Session;

// =========================================================================
// Fixture setup
// =========================================================================

/// A logged-in session for `username`, skipping the credential store.
pub fn test_session(username: &str) -> Session {
    Session::new(username)
}

/// Create placeholder files under `dir`. Names may contain subdirectories.
///
/// The contents are not valid media; the probe treats them as unreadable.
pub fn write_media_files(dir: &Path, names: &[&str]) {
    for name in names {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, b"placeholder").unwrap();
    }
}

// =========================================================================
// HTML inspection
// =========================================================================

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// The markup of each gallery item, in document order.
///
/// Each slice runs from just after one `<div class="item">` to the start of
/// the next (the last one runs to the end of the document).
pub fn item_blocks(html: &str) -> Vec<&str> {
    html.split(r#"<div class="item">"#).skip(1).collect()
}
