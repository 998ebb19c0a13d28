//! Write-only UI projection target
//!
//! The controller pushes display updates through one method per logical
//! slot. Every method defaults to a no-op, so a rendering surface that has
//! no target for a given slot simply skips it - a missing slot is never an
//! error. Any target (terminal, web view, native UI) can implement this.

/// Play/pause button glyph state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayButtonState {
    /// Show the pause glyph (audio is playing)
    Playing,

    /// Show the play glyph (audio is paused or stopped)
    Paused,
}

/// Visual state for a toggle button (repeat, shuffle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// Toggle is on (full opacity)
    Active,

    /// Toggle is off (dimmed)
    Inactive,
}

impl From<bool> for ToggleState {
    fn from(active: bool) -> Self {
        if active {
            ToggleState::Active
        } else {
            ToggleState::Inactive
        }
    }
}

/// Write-only consumer of display updates
///
/// All writes are independent, idempotent, and fire-and-forget.
pub trait DisplaySink {
    /// Title of the current track
    fn song_title(&mut self, _title: &str) {}

    /// Artist of the current track
    fn artist_name(&mut self, _name: &str) {}

    /// Cover art URI of the current track
    fn cover_image(&mut self, _url: &str) {}

    /// Playback progress as a percentage (0-100)
    fn progress_percentage(&mut self, _percent: f64) {}

    /// Elapsed time, formatted `M:SS`
    fn current_time_text(&mut self, _text: &str) {}

    /// Track duration, formatted `M:SS`
    fn duration_text(&mut self, _text: &str) {}

    /// Play/pause button glyph
    fn play_button(&mut self, _state: PlayButtonState) {}

    /// Repeat toggle visual state
    fn repeat_button(&mut self, _state: ToggleState) {}

    /// Shuffle toggle visual state
    fn shuffle_button(&mut self, _state: ToggleState) {}
}
