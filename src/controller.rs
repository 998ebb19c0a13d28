//! Playback controller - core orchestration
//!
//! Translates caller intent and media backend signals into transport-state
//! transitions and display projections. All state mutation happens on
//! direct-call or event dispatch; handlers run to completion, so there is
//! no reentrancy to guard against.

use std::time::Duration;

use tracing::{debug, trace};

use crate::{
    display::{DisplaySink, PlayButtonState, ToggleState},
    error::Result,
    format::format_time,
    queue::Queue,
    sink::{MediaEvent, MediaSink},
    types::{PlaybackState, PlayerConfig, Track},
};

/// Position threshold for the previous button: above this, "previous"
/// restarts the current track instead of going back one
const RESTART_THRESHOLD: Duration = Duration::from_secs(3);

/// Central playback control
///
/// Owns all queue and transport state and the two injected capabilities:
/// - [`MediaSink`]: the playable-media backend
/// - [`DisplaySink`]: the write-only rendering surface
///
/// Instances are caller-owned; construct as many as you need (one per
/// deck, one per test). There is no global instance.
pub struct PlaybackController<M: MediaSink, D: DisplaySink> {
    media: M,
    display: D,

    // Queue
    queue: Queue,

    // Transport state
    current_track: Option<Track>,
    is_playing: bool,
    is_repeat: bool,
    is_shuffle: bool,
    volume: f32,
}

impl<M: MediaSink, D: DisplaySink> PlaybackController<M, D> {
    /// Create a controller with default configuration
    ///
    /// Pushes the default volume (0.7) to the media backend.
    pub fn new(media: M, display: D) -> Result<Self> {
        Self::with_config(media, display, PlayerConfig::default())
    }

    /// Create a controller with explicit configuration
    ///
    /// Pushes the configured volume to the media backend; a backend that
    /// rejects it fails construction.
    pub fn with_config(mut media: M, display: D, config: PlayerConfig) -> Result<Self> {
        media.set_volume(config.volume)?;

        Ok(Self {
            media,
            display,
            queue: Queue::new(),
            current_track: None,
            is_playing: false,
            is_repeat: config.repeat,
            is_shuffle: config.shuffle,
            volume: config.volume,
        })
    }

    // ===== Playback Control =====

    /// Load a track into the media backend without starting playback
    ///
    /// Sets the current track (which may be outside the queue) and pushes a
    /// full display refresh (title, artist, cover).
    pub fn load_track(&mut self, track: Track) -> Result<()> {
        debug!(track_id = %track.id, title = %track.title, "load track");

        self.media.load(&track.audio_url)?;
        self.current_track = Some(track);
        self.update_player_ui();
        Ok(())
    }

    /// Start or resume playback
    pub fn play(&mut self) -> Result<()> {
        self.media.play()?;
        self.is_playing = true;
        self.update_play_button();
        Ok(())
    }

    /// Pause playback
    pub fn pause(&mut self) -> Result<()> {
        self.media.pause()?;
        self.is_playing = false;
        self.update_play_button();
        Ok(())
    }

    /// Pause if playing, play if paused
    pub fn toggle_play(&mut self) -> Result<()> {
        if self.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Advance to the next track and play it
    ///
    /// Selection priority:
    /// 1. Repeat on: restart the current track from 0; queue position
    ///    unchanged. Repeat takes precedence over shuffle.
    /// 2. Shuffle on: jump to a uniformly random queue position. No
    ///    exclusion of the track just played - immediate repeats are
    ///    possible.
    /// 3. Otherwise: step forward sequentially, wrapping past the end.
    ///
    /// An empty queue is a valid steady state: nothing is loaded, no error
    /// is raised, and the media backend is not touched.
    pub fn play_next(&mut self) -> Result<()> {
        if self.is_repeat && self.current_track.is_some() {
            debug!("repeat on, restarting current track");
            self.media.set_position(Duration::ZERO)?;
            return self.play();
        }

        let next = if self.is_shuffle {
            self.queue.advance_random().cloned()
        } else {
            self.queue.advance().cloned()
        };

        match next {
            Some(track) => {
                self.load_track(track)?;
                self.play()
            }
            None => Ok(()),
        }
    }

    /// Go back to the previous track, or restart the current one
    ///
    /// More than 3 seconds into the track, "previous" means "restart": the
    /// position resets to 0 and the queue does not move. Otherwise the
    /// cursor steps back with wraparound and the track there is played.
    ///
    /// This path is always sequential - repeat and shuffle are ignored, by
    /// design asymmetry with [`PlaybackController::play_next`].
    pub fn play_previous(&mut self) -> Result<()> {
        if self.media.position() > RESTART_THRESHOLD {
            debug!("past restart threshold, restarting current track");
            return self.media.set_position(Duration::ZERO);
        }

        match self.queue.retreat().cloned() {
            Some(track) => {
                self.load_track(track)?;
                self.play()
            }
            None => Ok(()),
        }
    }

    // ===== Queue Management =====

    /// Replace the queue wholesale and position the cursor at `start_index`
    ///
    /// If a track exists at that index it is loaded (but not played). An
    /// out-of-range index leaves nothing loaded until the cursor moves.
    pub fn set_queue(&mut self, tracks: Vec<Track>, start_index: usize) -> Result<()> {
        debug!(len = tracks.len(), start_index, "replace queue");

        self.queue.replace(tracks, start_index);
        if let Some(track) = self.queue.current().cloned() {
            self.load_track(track)?;
        }
        Ok(())
    }

    // ===== Seek & Volume =====

    /// Seek to a position in the current track
    ///
    /// Forwarded to the media backend verbatim; range validation is the
    /// caller's (or the backend's) responsibility.
    pub fn seek(&mut self, time: Duration) -> Result<()> {
        self.media.set_position(time)
    }

    /// Set volume (0.0-1.0 nominal)
    ///
    /// Forwarded to the media backend verbatim, not clamped. If the backend
    /// rejects the value, the internal volume is left unchanged and the
    /// rejection surfaces to the caller.
    pub fn set_volume(&mut self, level: f32) -> Result<()> {
        self.media.set_volume(level)?;
        self.volume = level;
        Ok(())
    }

    // ===== Repeat & Shuffle =====

    /// Flip the repeat flag and push its button state
    ///
    /// Repeat and shuffle are independent flags, not mutually exclusive;
    /// shuffle is only consulted when repeat is off.
    pub fn toggle_repeat(&mut self) {
        self.is_repeat = !self.is_repeat;
        debug!(is_repeat = self.is_repeat, "toggle repeat");
        self.update_repeat_button();
    }

    /// Flip the shuffle flag and push its button state
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffle = !self.is_shuffle;
        debug!(is_shuffle = self.is_shuffle, "toggle shuffle");
        self.update_shuffle_button();
    }

    // ===== Media Events =====

    /// Dispatch a signal from the media backend
    ///
    /// This is the explicit wiring for the backend's three signals:
    /// - [`MediaEvent::Ended`] re-enters queue advancement - the only
    ///   trigger for autoplay-to-next.
    /// - [`MediaEvent::PositionChanged`] projects progress; it fires
    ///   continuously during playback and stays cheap (two display writes).
    /// - [`MediaEvent::MetadataLoaded`] projects the now-known duration.
    ///
    /// Each dispatch runs to completion before the next; the backend is
    /// expected to serialize its callbacks.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Result<()> {
        match event {
            MediaEvent::Ended => self.play_next(),
            MediaEvent::PositionChanged => {
                self.update_progress();
                Ok(())
            }
            MediaEvent::MetadataLoaded => {
                self.update_duration();
                Ok(())
            }
        }
    }

    // ===== State Queries =====

    /// Playback state derived from the transport flags
    pub fn state(&self) -> PlaybackState {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlaybackState::Stopped,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    /// Currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Current queue cursor position
    pub fn current_index(&self) -> usize {
        self.queue.current_index()
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether repeat is on
    pub fn is_repeat(&self) -> bool {
        self.is_repeat
    }

    /// Whether shuffle is on
    pub fn is_shuffle(&self) -> bool {
        self.is_shuffle
    }

    /// Current volume as last accepted by the backend
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// All queued tracks in order
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // ===== Display Projections =====
    //
    // Pure projections from transport state (and live backend
    // position/duration) to display writes. Idempotent; a surface with no
    // target for a slot skips it silently.

    fn update_progress(&mut self) {
        let position = self.media.position();

        if let Some(duration) = self.media.duration() {
            if !duration.is_zero() {
                let percent = position.as_secs_f64() / duration.as_secs_f64() * 100.0;
                self.display.progress_percentage(percent);
            }
        }

        self.display
            .current_time_text(&format_time(position.as_secs_f64()));
        trace!(?position, "progress update");
    }

    fn update_duration(&mut self) {
        if let Some(duration) = self.media.duration() {
            self.display
                .duration_text(&format_time(duration.as_secs_f64()));
        }
    }

    fn update_player_ui(&mut self) {
        let Some(track) = self.current_track.as_ref() else {
            return;
        };

        self.display.song_title(&track.title);
        self.display.artist_name(track.display_artist());
        self.display.cover_image(track.display_cover());
    }

    fn update_play_button(&mut self) {
        let state = if self.is_playing {
            PlayButtonState::Playing
        } else {
            PlayButtonState::Paused
        };
        self.display.play_button(state);
    }

    fn update_repeat_button(&mut self) {
        self.display.repeat_button(ToggleState::from(self.is_repeat));
    }

    fn update_shuffle_button(&mut self) {
        self.display
            .shuffle_button(ToggleState::from(self.is_shuffle));
    }
}
