//! Core types for playback control

use serde::{Deserialize, Serialize};

/// Display fallback when a track carries no artist metadata
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Display fallback when a track carries no cover art
pub const PLACEHOLDER_COVER_URL: &str =
    "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?w=100";

/// Track information for queue management
///
/// Contains all metadata needed for playback and display. Supplied entirely
/// by the caller; the controller never mutates a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Opaque track identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name (optional)
    pub artist: Option<String>,

    /// Cover art URI (optional)
    pub cover_url: Option<String>,

    /// Audio URI for the media backend to load
    pub audio_url: String,
}

impl Track {
    /// Artist name for display, falling back to [`UNKNOWN_ARTIST`]
    pub fn display_artist(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }

    /// Cover art URI for display, falling back to [`PLACEHOLDER_COVER_URL`]
    pub fn display_cover(&self) -> &str {
        self.cover_url.as_deref().unwrap_or(PLACEHOLDER_COVER_URL)
    }
}

/// Playback state derived from transport flags and track presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 0.7)
    ///
    /// Passed to the media backend verbatim; out-of-range values are the
    /// backend's to accept or reject.
    pub volume: f32,

    /// Initial repeat flag (default: off)
    pub repeat: bool,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 0.7,
            repeat: false,
            shuffle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.volume, 0.7);
        assert!(!config.repeat);
        assert!(!config.shuffle);
    }

    #[test]
    fn display_fallbacks() {
        let track = Track {
            id: "t1".to_string(),
            title: "Test Song".to_string(),
            artist: None,
            cover_url: None,
            audio_url: "https://cdn.example.com/t1.mp3".to_string(),
        };

        assert_eq!(track.display_artist(), UNKNOWN_ARTIST);
        assert_eq!(track.display_cover(), PLACEHOLDER_COVER_URL);
    }

    #[test]
    fn display_uses_metadata_when_present() {
        let track = Track {
            id: "t2".to_string(),
            title: "Test Song".to_string(),
            artist: Some("Test Artist".to_string()),
            cover_url: Some("https://cdn.example.com/t2.jpg".to_string()),
            audio_url: "https://cdn.example.com/t2.mp3".to_string(),
        };

        assert_eq!(track.display_artist(), "Test Artist");
        assert_eq!(track.display_cover(), "https://cdn.example.com/t2.jpg");
    }
}
