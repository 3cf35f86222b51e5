//! Gallery page generation.
//!
//! Takes a [`GalleryRequest`] (media paths plus the selected fields and
//! actions) and renders one self-contained HTML document: inline CSS, one
//! `div.item` per media file, and an inline script with the player handlers.
//!
//! ## Item Layout
//!
//! ```text
//! <div class="item">
//!   <h3>song.mp3</h3>
//!   <p>Duration: 12.3 sec</p>        (field: duration, only when probed)
//!   <p>Path: music/song.mp3</p>      (field: path)
//!   <audio controls src="...">       (always; <video> for .mp4/.webm)
//!   <button>▶ Play</button> ...      (actions, fixed order)
//! </div>
//! ```
//!
//! ## Escaping
//!
//! Every interpolated value goes through maud's escaping. Player sources and
//! handler arguments are media URLs: the path is percent-encoded (absolute
//! paths as `file://` URLs) so `#`, `%` or `?` in a filename cannot turn into
//! URL syntax. Handler arguments are then encoded as JS string literals (via
//! `serde_json`) and attribute-escaped, so a path containing quotes or markup
//! stays inert. The `Path:` line shows the path as given.
//!
//! ## Determinism
//!
//! The document depends only on the request and the probe results. The
//! timestamp only names the output file (`gallery_<unix-seconds>.html`).

use crate::auth::Session;
use crate::probe::{MediaProbe, probe_duration};
use crate::types::{Action, ActionSelection, Field, FieldSelection, MediaItem, MediaKind};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Select media files first.")]
    NoMedia,
}

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/player.js");

const PAGE_TITLE: &str = "WebGallery";

/// Bytes escaped in media URLs. `/` and `:` stay literal so path segments and
/// drive letters survive.
const URL_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Everything one generation needs, passed explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryRequest {
    /// Paths in the order the user selected them.
    pub media: Vec<String>,
    pub fields: FieldSelection,
    pub actions: ActionSelection,
}

impl GalleryRequest {
    pub fn new(media: Vec<String>, fields: FieldSelection, actions: ActionSelection) -> Self {
        Self {
            media,
            fields,
            actions,
        }
    }
}

/// Render the gallery document for a request.
///
/// Never fails: media files the probe cannot read still get an item, just
/// without a duration line.
pub fn generate(request: &GalleryRequest, probe: &dyn MediaProbe) -> String {
    let items: Vec<MediaItem> = request
        .media
        .iter()
        .map(|path| MediaItem::new(path, probe_duration(probe, Path::new(path))))
        .collect();
    render_page(&items, &request.fields, &request.actions).into_string()
}

/// Output filename for a generation at `timestamp` (unix seconds).
pub fn gallery_filename(timestamp: u64) -> String {
    format!("gallery_{}.html", timestamp)
}

/// Write a rendered document into `output_dir`, creating it if needed.
pub fn write_gallery(
    output_dir: &Path,
    html: &str,
    timestamp: u64,
) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(gallery_filename(timestamp));
    fs::write(&path, html)?;
    Ok(path)
}

/// Generate and write a gallery for a logged-in session.
///
/// An empty selection is rejected before anything is rendered or written.
pub fn build_gallery(
    _session: &Session,
    request: &GalleryRequest,
    output_dir: &Path,
    probe: &dyn MediaProbe,
    timestamp: u64,
) -> Result<PathBuf, GenerateError> {
    if request.media.is_empty() {
        return Err(GenerateError::NoMedia);
    }
    let html = generate(request, probe);
    write_gallery(output_dir, &html, timestamp)
}

/// Current time in whole unix seconds.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// URL the page uses to load a media file.
///
/// Absolute paths become `file://` URLs; relative paths stay relative to the
/// page. Non-ASCII bytes are always percent-encoded.
fn media_url(path: &str) -> String {
    let absolute = Path::new(path).is_absolute();
    let path = if cfg!(windows) {
        path.replace('\\', "/")
    } else {
        path.to_owned()
    };
    let encoded = utf8_percent_encode(&path, URL_PATH).to_string();
    match (absolute, encoded.starts_with('/')) {
        (false, _) => encoded,
        (true, true) => format!("file://{}", encoded),
        (true, false) => format!("file:///{}", encoded),
    }
}

/// Encode a string as a double-quoted JS string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

// ============================================================================
// HTML Components
// ============================================================================

fn render_page(items: &[MediaItem], fields: &FieldSelection, actions: &ActionSelection) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
                style { (PreEscaped(CSS)) }
            }
            body {
                h1 { "🎧 " (PAGE_TITLE) }
                div id="gallery" {
                    @for item in items {
                        (render_item(item, fields, actions))
                    }
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn render_item(item: &MediaItem, fields: &FieldSelection, actions: &ActionSelection) -> Markup {
    let url = media_url(&item.path);
    html! {
        div.item {
            h3 { (item.name) }
            @for field in fields {
                (render_field(*field, item))
            }
            (render_player(item.kind, &url))
            @for action in actions {
                (render_action(*action, &url))
            }
        }
    }
}

fn render_field(field: Field, item: &MediaItem) -> Markup {
    match field {
        Field::Duration => html! {
            @if let Some(secs) = item.duration {
                p { "Duration: " (format!("{:.1}", secs)) " sec" }
            }
        },
        Field::Path => html! {
            p { "Path: " (item.path) }
        },
    }
}

fn render_player(kind: MediaKind, url: &str) -> Markup {
    match kind {
        MediaKind::Video => html! { video controls src=(url) {} },
        MediaKind::Audio => html! { audio controls src=(url) {} },
    }
}

fn render_action(action: Action, url: &str) -> Markup {
    match action {
        Action::Play => html! {
            button onclick={ "playMedia(" (js_string(url)) ")" } { "▶ Play" }
        },
        Action::Pause => html! {
            button onclick="pauseMedia()" { "⏸ Pause" }
        },
        Action::Download => html! {
            button onclick={ "downloadFile(" (js_string(url)) ")" } { "⬇ Download" }
        },
        Action::Like => html! {
            button onclick="like(this)" { "❤️ Like" }
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
