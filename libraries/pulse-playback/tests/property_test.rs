//! Property-based tests for playback manager
//!
//! Uses proptest to verify invariants across many random command sequences.

use proptest::prelude::*;
use pulse_core::{AccentTheme, RepeatMode, Track, TrackId};
use pulse_playback::{
    AudioOutput, OutputEvent, PlaybackConfig, PlaybackManager, SourceId,
};

/// Output that only remembers what is loaded
#[derive(Debug, Default)]
struct NullOutput {
    loads: usize,
}

impl AudioOutput for NullOutput {
    fn load(&mut self, _source: SourceId, _url: &str) {
        self.loads += 1;
    }
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn seek(&mut self, _seconds: f64) {}
    fn set_volume(&mut self, _volume: f64) {}
}

#[derive(Debug, Clone)]
enum Op {
    TogglePlay,
    Select(usize),
    Next,
    Previous,
    Shuffle(bool),
    Repeat(RepeatMode),
    Seek(f64),
    Volume(f64),
    TimeUpdate(f64),
    Metadata(f64),
    Ended,
    Replace(usize),
}

fn arbitrary_repeat() -> impl Strategy<Value = RepeatMode> {
    prop_oneof![
        Just(RepeatMode::Off),
        Just(RepeatMode::One),
        Just(RepeatMode::All),
    ]
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::TogglePlay),
        (0usize..12).prop_map(Op::Select),
        Just(Op::Next),
        Just(Op::Previous),
        any::<bool>().prop_map(Op::Shuffle),
        arbitrary_repeat().prop_map(Op::Repeat),
        (-50.0f64..500.0).prop_map(Op::Seek),
        (-1.0f64..2.0).prop_map(Op::Volume),
        (-10.0f64..500.0).prop_map(Op::TimeUpdate),
        prop_oneof![Just(f64::NAN), Just(f64::INFINITY), 0.0f64..400.0].prop_map(Op::Metadata),
        Just(Op::Ended),
        (0usize..8).prop_map(Op::Replace),
    ]
}

fn tracks(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| Track {
            id: TrackId::from(i as u64),
            title: format!("Track {}", i),
            artist: "Artist".to_string(),
            audio_url: format!("https://cdn.example.com/{}.mp3", i),
            cover_url: format!("https://cdn.example.com/{}.jpg", i),
            accent: AccentTheme::for_position(i),
        })
        .collect()
}

fn apply(manager: &mut PlaybackManager<NullOutput>, op: Op) {
    let source = manager.current_source();
    match op {
        Op::TogglePlay => manager.toggle_play(),
        Op::Select(index) => manager.select_track(index),
        Op::Next => manager.next(),
        Op::Previous => manager.previous(),
        Op::Shuffle(enabled) => manager.set_shuffle(enabled),
        Op::Repeat(mode) => manager.set_repeat(mode),
        Op::Seek(seconds) => manager.seek(seconds),
        Op::Volume(volume) => manager.set_volume(volume),
        Op::TimeUpdate(t) => {
            if let Some(source) = source {
                manager.handle_output_event(source, OutputEvent::TimeUpdate { current_time: t });
            }
        }
        Op::Metadata(d) => {
            if let Some(source) = source {
                manager.handle_output_event(source, OutputEvent::LoadedMetadata { duration: d });
            }
        }
        Op::Ended => {
            if let Some(source) = source {
                manager.handle_output_event(source, OutputEvent::Ended);
            }
        }
        Op::Replace(count) => manager.replace_catalog(tracks(count).into()),
    }
}

proptest! {
    /// Property: current index is valid for every reachable state
    #[test]
    fn index_always_valid(
        initial in 0usize..8,
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 1..60)
    ) {
        let config = PlaybackConfig {
            shuffle_seed: Some(seed),
            ..PlaybackConfig::default()
        };
        let mut manager = PlaybackManager::new(&config, NullOutput::default());
        manager.replace_catalog(tracks(initial).into());

        for op in ops {
            apply(&mut manager, op);

            let len = manager.catalog().len();
            match manager.state().current_index {
                Some(index) => prop_assert!(index < len, "index {} out of {}", index, len),
                None => {
                    prop_assert_eq!(len, 0);
                    prop_assert!(manager.current_source().is_none());
                }
            }
        }
    }

    /// Property: transport values stay in range
    #[test]
    fn transport_stays_in_range(
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 1..60)
    ) {
        let config = PlaybackConfig {
            shuffle_seed: Some(seed),
            ..PlaybackConfig::default()
        };
        let mut manager = PlaybackManager::new(&config, NullOutput::default());
        manager.replace_catalog(tracks(4).into());

        for op in ops {
            apply(&mut manager, op);

            let transport = manager.transport();
            prop_assert!(transport.current_time() >= 0.0);
            prop_assert!((0.0..=1.0).contains(&transport.volume()));
            if let Some(duration) = transport.duration() {
                prop_assert!(duration.is_finite());
                prop_assert!(transport.current_time() <= duration);
            }
        }
    }

    /// Property: shuffle next never lands on the current track
    #[test]
    fn shuffle_next_changes_track(count in 2usize..12, seed in any::<u64>(), steps in 1usize..30) {
        let config = PlaybackConfig {
            shuffle: true,
            shuffle_seed: Some(seed),
            ..PlaybackConfig::default()
        };
        let mut manager = PlaybackManager::new(&config, NullOutput::default());
        manager.replace_catalog(tracks(count).into());

        for _ in 0..steps {
            let before = manager.state().current_index;
            manager.next();
            prop_assert_ne!(manager.state().current_index, before);
        }
        prop_assert_eq!(manager.output().loads, steps + 1);
    }
}
