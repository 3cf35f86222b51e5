//! # WebGallery
//!
//! Turns a handful of local audio and video files into one self-contained
//! HTML page with a small JavaScript player. Pick the files, choose which
//! metadata lines and buttons each item shows, and open the result in a
//! browser. No server, no external assets.
//!
//! # Flow
//!
//! ```text
//! 1. Login     users.json      →  Session
//! 2. Select    files/folders   →  ordered media paths  (last_dir → config.json)
//! 3. Generate  GalleryRequest  →  output/gallery_<unix-seconds>.html
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`generate`] | Renders the gallery page with Maud and writes it to the output directory |
//! | [`types`] | Fields, actions, media kind routing, and the per-file `MediaItem` |
//! | [`probe`] | `MediaProbe` trait and the `lofty`-backed duration reader |
//! | [`select`] | Expands files and folders into the media selection |
//! | [`config`] | `config.json` with the remembered folder |
//! | [`auth`] | `users.json` credential store and the `Session` it hands out |
//! | [`browser`] | Opens results with the platform's default handler |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fixed Render Order
//!
//! Fields and actions are enums collected into `BTreeSet`s. Whatever order
//! the user names them in, items render `duration` before `path` and buttons
//! as `Play, Pause, Download, Like`.
//!
//! ## Explicit Context
//!
//! The generator receives everything as a [`generate::GalleryRequest`].
//! Writing a page additionally requires an [`auth::Session`], which only
//! [`auth::CredentialStore::authenticate`] can produce.
//!
//! ## Escaped By Default
//!
//! File paths land in text, `src` attributes, and `onclick` handlers. Maud
//! escapes every interpolation. Sources and handler arguments are
//! percent-encoded media URLs, and handler arguments are also encoded as JS
//! string literals. Files named `it's "live".mp3` or `track #1.mp3` play fine.
//!
//! ## Best-Effort Durations
//!
//! Probing never fails a generation. Unreadable or unsupported files still
//! get an item and a player, just without the duration line.
//!
//! ## Toy Credentials
//!
//! Passwords are stored as unsalted SHA-256 hex digests in plain JSON. This
//! is a convenience gate for a shared desktop, not a security boundary.

pub mod auth;
pub mod browser;
pub mod config;
pub mod generate;
pub mod output;
pub mod probe;
pub mod select;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
