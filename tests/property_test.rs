//! Property-based tests for the playback controller
//!
//! Uses proptest to verify queue-advance invariants and time formatting
//! across many random inputs.

use proptest::prelude::*;
use std::time::Duration;
use tonearm::{DisplaySink, MediaSink, PlaybackController, Result, Track};

// ===== Helpers =====

/// Media backend that accepts everything and remembers nothing
#[derive(Default)]
struct NullMedia {
    position: Duration,
}

impl MediaSink for NullMedia {
    fn load(&mut self, _url: &str) -> Result<()> {
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn set_position(&mut self, position: Duration) -> Result<()> {
        self.position = position;
        Ok(())
    }

    fn volume(&self) -> f32 {
        0.7
    }

    fn set_volume(&mut self, _volume: f32) -> Result<()> {
        Ok(())
    }

    fn duration(&self) -> Option<Duration> {
        None
    }
}

struct NoDisplay;
impl DisplaySink for NoDisplay {}

fn make_tracks(n: usize) -> Vec<Track> {
    (0..n)
        .map(|i| Track {
            id: i.to_string(),
            title: format!("Track {}", i),
            artist: None,
            cover_url: None,
            audio_url: format!("https://cdn.example.com/{}.mp3", i),
        })
        .collect()
}

fn make_player(
    n: usize,
    start_index: usize,
) -> PlaybackController<NullMedia, NoDisplay> {
    let mut player =
        PlaybackController::new(NullMedia::default(), NoDisplay).expect("construction");
    player
        .set_queue(make_tracks(n), start_index)
        .expect("set_queue");
    player
}

// ===== Property Tests =====

proptest! {
    /// Property: with both flags off, next is exactly (i + 1) mod N
    #[test]
    fn sequential_next_is_modular_increment(
        n in 1usize..30,
        steps in 1usize..100
    ) {
        let mut player = make_player(n, 0);

        for step in 1..=steps {
            player.play_next().expect("next");
            prop_assert_eq!(player.current_index(), step % n);
        }
    }

    /// Property: shuffle always yields an index in [0, N)
    #[test]
    fn shuffle_index_always_in_bounds(
        n in 1usize..50,
        steps in 1usize..50
    ) {
        let mut player = make_player(n, 0);
        player.toggle_shuffle();

        for _ in 0..steps {
            player.play_next().expect("next");
            prop_assert!(player.current_index() < n);
        }
    }

    /// Property: repeat pins the queue position no matter how often
    /// next is invoked
    #[test]
    fn repeat_never_moves_the_cursor(
        n in 1usize..30,
        start in 0usize..30,
        steps in 1usize..50
    ) {
        let start = start % n;
        let mut player = make_player(n, start);
        player.toggle_repeat();

        for _ in 0..steps {
            player.play_next().expect("next");
            prop_assert_eq!(player.current_index(), start);
        }
    }

    /// Property: previous below the restart threshold is exactly
    /// (i + N - 1) mod N, regardless of repeat/shuffle flags
    #[test]
    fn previous_is_modular_decrement(
        n in 1usize..30,
        start in 0usize..30,
        repeat in any::<bool>(),
        shuffle in any::<bool>()
    ) {
        let start = start % n;
        let mut player = make_player(n, start);
        if repeat {
            player.toggle_repeat();
        }
        if shuffle {
            player.toggle_shuffle();
        }

        player.play_previous().expect("previous");
        prop_assert_eq!(player.current_index(), (start + n - 1) % n);
    }

    /// Property: toggling a flag an even number of times restores it,
    /// an odd number flips it
    #[test]
    fn toggles_compose_by_parity(
        repeat_toggles in 0usize..20,
        shuffle_toggles in 0usize..20
    ) {
        let mut player = make_player(3, 0);

        for _ in 0..repeat_toggles {
            player.toggle_repeat();
        }
        for _ in 0..shuffle_toggles {
            player.toggle_shuffle();
        }

        prop_assert_eq!(player.is_repeat(), repeat_toggles % 2 == 1);
        prop_assert_eq!(player.is_shuffle(), shuffle_toggles % 2 == 1);
    }

    /// Property: formatted time reconstructs the floored input and the
    /// seconds field is always two digits below 60
    #[test]
    fn format_time_round_trips(seconds in 0.0f64..36000.0) {
        let text = tonearm::format_time(seconds);
        let (mins, secs) = text.split_once(':').expect("M:SS shape");

        let mins: u64 = mins.parse().expect("minutes parse");
        prop_assert_eq!(secs.len(), 2);
        let secs: u64 = secs.parse().expect("seconds parse");

        prop_assert!(secs < 60);
        prop_assert_eq!(mins * 60 + secs, seconds.floor() as u64);
    }

    /// Property: negative and non-finite durations render the documented
    /// placeholder
    #[test]
    fn format_time_degenerate_inputs(seconds in -36000.0f64..0.0) {
        prop_assert_eq!(tonearm::format_time(seconds), "0:00");
    }
}

// proptest's f64 strategies skip NaN unless asked; cover it explicitly
#[test]
fn format_time_nan_renders_placeholder() {
    assert_eq!(tonearm::format_time(f64::NAN), "0:00");
}
