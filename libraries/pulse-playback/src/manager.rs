//! Playback manager - core orchestration
//!
//! Coordinates the controller, transport telemetry and the single output
//! device. All mutation happens through `&mut self`; the embedding shell
//! serializes commands and device callbacks onto one logical thread.

use crate::{
    controller::{PlaybackController, Transition},
    events::PlaybackEvent,
    output::{AudioOutput, OutputEvent, OutputHandle, SourceId},
    transport::TransportState,
    types::{PlaybackConfig, PlaybackState},
};
use pulse_core::{Catalog, RepeatMode, Track, TrackId};
use tracing::{debug, trace};

/// Main playback manager
///
/// Owns the output device through an [`OutputHandle`] so at most one source
/// is ever loaded.
pub struct PlaybackManager<O> {
    controller: PlaybackController,
    transport: TransportState,
    output: OutputHandle<O>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl<O: AudioOutput> PlaybackManager<O> {
    /// Create new playback manager driving `device`
    pub fn new(config: &PlaybackConfig, device: O) -> Self {
        let transport = TransportState::new(config.volume);
        let mut output = OutputHandle::new(device);
        output.set_volume(transport.volume());

        Self {
            controller: PlaybackController::new(config),
            transport,
            output,
            pending_events: Vec::new(),
        }
    }

    // ===== Catalog =====

    /// Replace the catalog after a fetch
    ///
    /// The first track is loaded paused; an empty catalog unloads the output.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        let was_playing = self.controller.is_playing();
        let previous = self.current_track_id();
        let length = catalog.len();

        let transition = self.controller.replace_catalog(catalog);
        debug!(length, "Catalog replaced");

        self.pending_events.push(PlaybackEvent::CatalogReplaced { length });
        if was_playing {
            self.emit_state_changed();
        }
        self.apply(transition, previous);
    }

    // ===== Playback Control =====

    /// Play if paused, pause if playing
    pub fn toggle_play(&mut self) {
        let transition = self.controller.toggle_play();
        if transition != Transition::None {
            self.emit_state_changed();
        }
        self.apply(transition, None);
    }

    /// Make the track at `index` current
    pub fn select_track(&mut self, index: usize) {
        let previous = self.current_track_id();
        let transition = self.controller.select(index);
        if transition == Transition::None {
            trace!(index, "Ignoring track selection");
        }
        self.apply(transition, previous);
    }

    /// Skip to next track
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.advance();
    }

    /// Go to previous track
    pub fn previous(&mut self) {
        let previous = self.current_track_id();
        let transition = self.controller.previous();
        self.apply(transition, previous);
    }

    fn advance(&mut self) {
        let was_playing = self.controller.is_playing();
        let previous = self.current_track_id();
        let transition = self.controller.next();

        if self.controller.is_playing() != was_playing {
            self.emit_state_changed();
        }
        self.apply(transition, previous);
    }

    // ===== Seek =====

    /// Seek to `seconds` in the current source
    ///
    /// Ignored without a loaded source.
    pub fn seek(&mut self, seconds: f64) {
        if self.output.current_source().is_none() {
            return;
        }
        if let Some(position) = self.transport.seek(seconds) {
            self.output.seek(position);
            self.pending_events.push(PlaybackEvent::Seeked { position });
        }
    }

    /// Seek to a fraction (0.0-1.0) of the current source
    ///
    /// Ignored while the duration is unknown.
    pub fn seek_to_percent(&mut self, fraction: f64) {
        if let Some(position) = self.transport.position_at_percent(fraction) {
            self.seek(position);
        }
    }

    // ===== Volume =====

    /// Set volume (clamped to 0.0-1.0)
    pub fn set_volume(&mut self, volume: f64) {
        if let Some(volume) = self.transport.set_volume(volume) {
            self.output.set_volume(volume);
            self.pending_events.push(PlaybackEvent::VolumeChanged { volume });
        }
    }

    // ===== Shuffle & Repeat =====

    /// Set shuffle on or off
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.controller.shuffle_enabled() != enabled {
            self.controller.set_shuffle(enabled);
            self.pending_events.push(PlaybackEvent::ShuffleChanged { enabled });
        }
    }

    /// Flip shuffle
    pub fn toggle_shuffle(&mut self) {
        let enabled = self.controller.toggle_shuffle();
        self.pending_events.push(PlaybackEvent::ShuffleChanged { enabled });
    }

    /// Set repeat mode
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        if self.controller.repeat_mode() != mode {
            self.controller.set_repeat(mode);
            self.pending_events.push(PlaybackEvent::RepeatChanged { mode });
        }
    }

    /// Cycle repeat mode off -> one -> all
    pub fn cycle_repeat(&mut self) {
        let mode = self.controller.cycle_repeat();
        self.pending_events.push(PlaybackEvent::RepeatChanged { mode });
    }

    // ===== Device Feedback =====

    /// Feed an event reported by the output device
    ///
    /// Events tagged with a superseded [`SourceId`] are dropped.
    pub fn handle_output_event(&mut self, source: SourceId, event: OutputEvent) {
        if !self.output.accepts(source) {
            trace!(source = %source, ?event, "Dropping event from stale source");
            return;
        }

        match event {
            OutputEvent::TimeUpdate { current_time } => {
                self.transport.on_time_update(current_time);
            }
            OutputEvent::LoadedMetadata { duration } => {
                self.transport.on_loaded_metadata(duration);
            }
            OutputEvent::Ended => {
                if let Some(track_id) = self.current_track_id() {
                    debug!(track_id = %track_id, "Track ended");
                    self.pending_events.push(PlaybackEvent::TrackFinished { track_id });
                }
                self.advance();
            }
        }
    }

    // ===== State Queries =====

    /// Discrete playback state
    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    /// Transport telemetry
    pub fn transport(&self) -> &TransportState {
        &self.transport
    }

    /// Active catalog
    pub fn catalog(&self) -> &Catalog {
        self.controller.catalog()
    }

    /// Current track (if any)
    pub fn current_track(&self) -> Option<&Track> {
        self.controller.current_track()
    }

    /// Whether playback is wanted
    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    /// Source currently loaded into the device
    pub fn current_source(&self) -> Option<SourceId> {
        self.output.current_source()
    }

    /// Borrow the output device
    pub fn output(&self) -> &O {
        self.output.device()
    }

    /// Mutably borrow the output device
    pub fn output_mut(&mut self) -> &mut O {
        self.output.device_mut()
    }

    /// Consume the manager, returning the output device
    pub fn into_output(self) -> O {
        self.output.into_inner()
    }

    // ===== Events =====

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn current_track_id(&self) -> Option<TrackId> {
        self.controller.current_track().map(|t| t.id.clone())
    }

    /// Carry out a controller transition on the device and transport
    fn apply(&mut self, transition: Transition, previous: Option<TrackId>) {
        match transition {
            Transition::None => {}
            Transition::Play => self.output.play(),
            Transition::Pause | Transition::Stop => self.output.pause(),
            Transition::Restart => {
                self.output.seek(0.0);
                self.transport.on_time_update(0.0);
                if self.controller.is_playing() {
                    self.output.play();
                }
                if let Some(track_id) = self.current_track_id() {
                    self.pending_events.push(PlaybackEvent::TrackRestarted { track_id });
                }
            }
            Transition::Load { index } => {
                let Some(track) = self.controller.catalog().get(index) else {
                    return;
                };
                let track_id = track.id.clone();
                let source = self.output.load(&track.audio_url);
                self.transport.reset_for_new_source();
                debug!(index, track_id = %track_id, source = %source, "Loaded track");

                if self.controller.is_playing() {
                    self.output.play();
                }
                self.pending_events.push(PlaybackEvent::TrackChanged {
                    index,
                    track_id,
                    previous_track_id: previous,
                });
            }
            Transition::Unload => {
                self.output.unload();
                self.transport.reset_for_new_source();
            }
        }
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::StateChanged {
            is_playing: self.controller.is_playing(),
        });
    }
}

impl<O: AudioOutput + Default> Default for PlaybackManager<O> {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default(), O::default())
    }
}
