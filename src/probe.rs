//! Media probe trait and the lofty-backed implementation.
//!
//! The [`MediaProbe`] trait is the only thing the generator knows about
//! reading media files. The production implementation is [`LoftyProbe`],
//! which parses the container headers with the `lofty` crate. Formats lofty
//! does not understand (WebM, for one) come back as
//! [`ProbeError::Unreadable`], and the generator renders them without a
//! duration line.

use lofty::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unreadable media: {0}")]
    Unreadable(String),
}

/// Best-effort metadata reader for a single media file.
pub trait MediaProbe {
    /// Playback length in seconds.
    fn duration(&self, path: &Path) -> Result<f64, ProbeError>;
}

/// Reads durations through `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyProbe;

impl MediaProbe for LoftyProbe {
    fn duration(&self, path: &Path) -> Result<f64, ProbeError> {
        if !path.is_file() {
            return Err(ProbeError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not a file", path.display()),
            )));
        }
        let tagged =
            lofty::read_from_path(path).map_err(|e| ProbeError::Unreadable(e.to_string()))?;
        Ok(tagged.properties().duration().as_secs_f64())
    }
}

/// Ask the probe for a duration and fold every failure into `None`.
pub fn probe_duration(probe: &dyn MediaProbe, path: &Path) -> Option<f64> {
    probe.duration(path).ok().filter(|d| d.is_finite() && *d > 0.0)
}
