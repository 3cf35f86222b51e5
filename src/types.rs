//! Shared types for the gallery request.
//!
//! Fields and actions are closed enums. Their declaration order is the render
//! order, so a `BTreeSet` of either always iterates in the fixed order no
//! matter how the user listed them.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Extensions rendered with a `<video>` element. Everything else is audio.
const VIDEO_EXTENSIONS: [&str; 2] = ["mp4", "webm"];

/// A metadata line that can be shown under each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Duration,
    Path,
}

impl Field {
    /// Parse a recognized field name. Names are matched exactly.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "duration" => Some(Field::Duration),
            "path" => Some(Field::Path),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Duration => "duration",
            Field::Path => "path",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A button rendered under each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Play,
    Pause,
    Download,
    Like,
}

impl Action {
    /// Parse a recognized button label. Labels are matched exactly.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Play" => Some(Action::Play),
            "Pause" => Some(Action::Pause),
            "Download" => Some(Action::Download),
            "Like" => Some(Action::Like),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Play => "Play",
            Action::Pause => "Pause",
            Action::Download => "Download",
            Action::Like => "Like",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub type FieldSelection = BTreeSet<Field>;
pub type ActionSelection = BTreeSet<Action>;

/// Collect recognized field names, silently dropping the rest.
pub fn parse_fields<I, S>(names: I) -> FieldSelection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|n| Field::parse(n.as_ref()))
        .collect()
}

/// Collect recognized action labels, silently dropping the rest.
pub fn parse_actions<I, S>(labels: I) -> ActionSelection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .filter_map(|l| Action::parse(l.as_ref()))
        .collect()
}

/// Which player element an item gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Route by extension, case-insensitive.
    pub fn from_path(path: &str) -> Self {
        let is_video = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| VIDEO_EXTENSIONS.iter().any(|v| e.eq_ignore_ascii_case(v)));
        if is_video {
            MediaKind::Video
        } else {
            MediaKind::Audio
        }
    }
}

/// One entry of the gallery, with everything derived from its path.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    /// The path exactly as the user supplied it.
    pub path: String,
    /// Base filename, shown as the item heading.
    pub name: String,
    pub kind: MediaKind,
    /// Playback length in seconds, already filtered by `probe_duration`.
    pub duration: Option<f64>,
}

impl MediaItem {
    pub fn new(path: &str, duration: Option<f64>) -> Self {
        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path: path.to_string(),
            name,
            kind: MediaKind::from_path(path),
            duration,
        }
    }
}
