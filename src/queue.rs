//! Playback queue with index-based navigation
//!
//! A single ordered sequence of tracks plus a cursor. The queue is replaced
//! wholesale, never partially mutated, so the cursor only goes stale when
//! the caller hands in a short list with a large start index - and every
//! access is existence-checked for exactly that reason.

use crate::types::Track;
use rand::Rng;

/// Ordered playback queue
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
    current_index: usize,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            current_index: 0,
        }
    }

    /// Replace the entire queue and reposition the cursor
    ///
    /// `start_index` is taken as-is; if no track exists there,
    /// [`Queue::current`] returns `None` until the cursor moves.
    pub fn replace(&mut self, tracks: Vec<Track>, start_index: usize) {
        self.tracks = tracks;
        self.current_index = start_index;
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Current cursor position
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Track at the cursor, if any
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current_index)
    }

    /// All tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Advance the cursor sequentially, wrapping past the end
    ///
    /// Returns the track at the new position. On an empty queue the cursor
    /// does not move and `None` is returned.
    pub fn advance(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }

        self.current_index = (self.current_index + 1) % self.tracks.len();
        self.tracks.get(self.current_index)
    }

    /// Jump the cursor to a uniformly random position
    ///
    /// No exclusion is applied against the current position, so landing on
    /// the same track again is possible. Returns the track at the new
    /// position, or `None` on an empty queue.
    pub fn advance_random(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }

        self.current_index = rand::thread_rng().gen_range(0..self.tracks.len());
        self.tracks.get(self.current_index)
    }

    /// Step the cursor back, wrapping from 0 to the last track
    ///
    /// Returns the track at the new position, or `None` on an empty queue.
    pub fn retreat(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }

        self.current_index = (self.current_index + self.tracks.len() - 1) % self.tracks.len();
        self.tracks.get(self.current_index)
    }
}
