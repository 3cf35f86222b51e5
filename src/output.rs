//! CLI output formatting.
//!
//! Each command has a `format_*` function that returns lines (pure, no I/O,
//! easy to test) and a `print_*` wrapper that writes them to stdout.
//!
//! # Output Format
//!
//! ## Select
//!
//! ```text
//! Last folder: /home/me/Music
//! Selected 2 files
//! 001 intro.mp3
//!     Source: /home/me/Music/intro.mp3
//! 002 clip.mp4
//!     Source: /home/me/Music/clip.mp4
//! ```
//!
//! ## Generate
//!
//! ```text
//! Logged in as: alice
//! Fields: duration, path
//! Actions: Play, Like
//! Saved: output/gallery_1700000000.html
//! ```

use crate::auth::Session;
use crate::generate::GalleryRequest;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Join a selection for display, or `(none)` when empty.
fn join_or_none<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    let joined = values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

pub fn format_last_folder(last_dir: Option<&str>) -> Vec<String> {
    match last_dir {
        Some(dir) => vec![format!("Last folder: {}", dir)],
        None => vec!["No folder remembered yet".to_string()],
    }
}

pub fn format_selection(files: &[PathBuf]) -> Vec<String> {
    let mut lines = vec![match files.len() {
        1 => "Selected 1 file".to_string(),
        n => format!("Selected {} files", n),
    }];
    for (i, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        lines.push(format!("{} {}", format_index(i + 1), name));
        lines.push(format!("{}Source: {}", indent(1), file.display()));
    }
    lines
}

pub fn format_generate_output(
    session: &Session,
    request: &GalleryRequest,
    saved: &Path,
) -> Vec<String> {
    vec![
        format!("Logged in as: {}", session.username()),
        format!("Fields: {}", join_or_none(&request.fields)),
        format!("Actions: {}", join_or_none(&request.actions)),
        format!("Saved: {}", saved.display()),
    ]
}

pub fn format_registered(username: &str) -> Vec<String> {
    vec![format!("User {} saved. Now log in.", username)]
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_last_folder(last_dir: Option<&str>) {
    print_lines(format_last_folder(last_dir));
}

pub fn print_selection(files: &[PathBuf]) {
    print_lines(format_selection(files));
}

pub fn print_generate_output(session: &Session, request: &GalleryRequest, saved: &Path) {
    print_lines(format_generate_output(session, request, saved));
}

pub fn print_registered(username: &str) {
    print_lines(format_registered(username));
}
