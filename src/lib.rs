//! Tonearm - Playback Control
//!
//! Platform-agnostic playback control for single-deck audio players.
//!
//! This crate provides:
//! - An ordered track queue with wholesale replacement
//! - Transport controls (play/pause/seek/volume/next/previous)
//! - Repeat and shuffle flags with the classic priority rules
//! - Media-event dispatch (ended / position / metadata)
//! - Display projections (track info, progress, button states)
//!
//! # Architecture
//!
//! `tonearm` is completely platform-agnostic: there is no audio decoding,
//! no rendering, no network, and no persistence here. The two
//! platform-specific pieces are injected as traits:
//! - [`MediaSink`]: the playable-media element
//!   (load/play/pause/seek/volume/duration plus three signals)
//! - [`DisplaySink`]: a write-only UI surface with one method per slot,
//!   all optional
//!
//! Everything is single-threaded and event-driven: the platform calls
//! controller methods and forwards backend signals via
//! [`PlaybackController::handle_media_event`]; each call runs to
//! completion before the next.
//!
//! # Example: Basic Transport
//!
//! ```rust
//! use tonearm::{DisplaySink, MediaSink, PlaybackController, Result, Track};
//! use std::time::Duration;
//!
//! // A minimal in-memory media backend
//! #[derive(Default)]
//! struct StubMedia {
//!     url: String,
//!     playing: bool,
//!     position: Duration,
//!     volume: f32,
//! }
//!
//! impl MediaSink for StubMedia {
//!     fn load(&mut self, url: &str) -> Result<()> {
//!         self.url = url.to_string();
//!         self.position = Duration::ZERO;
//!         Ok(())
//!     }
//!
//!     fn play(&mut self) -> Result<()> {
//!         self.playing = true;
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) -> Result<()> {
//!         self.playing = false;
//!         Ok(())
//!     }
//!
//!     fn position(&self) -> Duration {
//!         self.position
//!     }
//!
//!     fn set_position(&mut self, position: Duration) -> Result<()> {
//!         self.position = position;
//!         Ok(())
//!     }
//!
//!     fn volume(&self) -> f32 {
//!         self.volume
//!     }
//!
//!     fn set_volume(&mut self, volume: f32) -> Result<()> {
//!         self.volume = volume;
//!         Ok(())
//!     }
//!
//!     fn duration(&self) -> Option<Duration> {
//!         Some(Duration::from_secs(180))
//!     }
//! }
//!
//! // A surface that renders nothing - every slot defaults to a no-op
//! struct NoDisplay;
//! impl DisplaySink for NoDisplay {}
//!
//! # fn main() -> Result<()> {
//! let mut player = PlaybackController::new(StubMedia::default(), NoDisplay)?;
//!
//! let tracks = vec![
//!     Track {
//!         id: "1".to_string(),
//!         title: "First".to_string(),
//!         artist: Some("Artist".to_string()),
//!         cover_url: None,
//!         audio_url: "https://cdn.example.com/1.mp3".to_string(),
//!     },
//!     Track {
//!         id: "2".to_string(),
//!         title: "Second".to_string(),
//!         artist: None,
//!         cover_url: None,
//!         audio_url: "https://cdn.example.com/2.mp3".to_string(),
//!     },
//! ];
//!
//! // Loads the first track but does not start playback
//! player.set_queue(tracks, 0)?;
//! assert!(!player.is_playing());
//!
//! player.play()?;
//! player.play_next()?;
//! assert_eq!(player.current_index(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Example: Repeat and Shuffle
//!
//! ```rust
//! # use tonearm::{DisplaySink, MediaSink, PlaybackController, Result};
//! # use std::time::Duration;
//! # #[derive(Default)]
//! # struct StubMedia;
//! # impl MediaSink for StubMedia {
//! #     fn load(&mut self, _url: &str) -> Result<()> { Ok(()) }
//! #     fn play(&mut self) -> Result<()> { Ok(()) }
//! #     fn pause(&mut self) -> Result<()> { Ok(()) }
//! #     fn position(&self) -> Duration { Duration::ZERO }
//! #     fn set_position(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//! #     fn volume(&self) -> f32 { 0.7 }
//! #     fn set_volume(&mut self, _volume: f32) -> Result<()> { Ok(()) }
//! #     fn duration(&self) -> Option<Duration> { None }
//! # }
//! # struct NoDisplay;
//! # impl DisplaySink for NoDisplay {}
//! # fn main() -> Result<()> {
//! let mut player = PlaybackController::new(StubMedia::default(), NoDisplay)?;
//!
//! player.toggle_repeat();
//! assert!(player.is_repeat());
//!
//! // Independent flags: shuffle is only consulted while repeat is off
//! player.toggle_shuffle();
//! assert!(player.is_shuffle());
//! # Ok(())
//! # }
//! ```

mod controller;
mod display;
mod error;
mod format;
mod queue;
mod sink;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use display::{DisplaySink, PlayButtonState, ToggleState};
pub use error::{PlaybackError, Result};
pub use format::format_time;
pub use sink::{MediaEvent, MediaSink};
pub use types::{PlaybackState, PlayerConfig, Track};
