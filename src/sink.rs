//! Platform-agnostic media backend trait
//!
//! Abstracts the playable-media element for different platforms (HTML audio
//! element, GStreamer pipeline, test double, etc.)

use crate::error::Result;
use std::time::Duration;

/// Signals emitted by a [`MediaSink`]
///
/// Delivered with no payload; handlers read current sink state directly.
/// The backend is expected to serialize its own callbacks so that each
/// signal is handled to completion before the next is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Current track played to completion
    Ended,

    /// Playback position moved (fired continuously during playback)
    PositionChanged,

    /// Track metadata became available; duration is now known
    MetadataLoaded,
}

/// Platform-agnostic playable-media handle
///
/// Implementors provide loading, transport, and position/volume access for a
/// single media element. All calls are synchronous and non-blocking from the
/// controller's perspective.
///
/// Mutating calls return a [`Result`] so a backend that rejects a command
/// (for example an out-of-range volume) surfaces the rejection to the caller
/// rather than having it swallowed.
pub trait MediaSink {
    /// Load a media resource by URI
    ///
    /// Replaces whatever was previously loaded. Does not start playback.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback of the loaded resource
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the current position
    fn pause(&mut self) -> Result<()>;

    /// Current playback position from the start of the track
    fn position(&self) -> Duration;

    /// Seek to a position from the start of the track
    fn set_position(&mut self, position: Duration) -> Result<()>;

    /// Current volume (0.0-1.0 nominal)
    fn volume(&self) -> f32;

    /// Set volume (0.0-1.0 nominal)
    ///
    /// Values are passed through by the controller verbatim; range handling
    /// is the backend's responsibility.
    fn set_volume(&mut self, volume: f32) -> Result<()>;

    /// Total duration of the loaded track
    ///
    /// Returns `None` until metadata has loaded.
    fn duration(&self) -> Option<Duration>;
}
