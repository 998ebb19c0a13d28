//! Error types for playback control

use thiserror::Error;

/// Playback errors
///
/// The controller itself treats its edge cases (empty queue, missing track
/// at an index, unavailable duration) as valid steady states rather than
/// failures. Errors only originate at the media backend seam: a sink that
/// rejects a command surfaces it here instead of having it swallowed.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media backend rejected a command
    #[error("Media sink error: {0}")]
    Sink(String),

    /// IO error (file-backed sinks)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
