//! Player store
//!
//! Single owner of all player state. Every asynchronous completion (debounce
//! timer, HTTP response, output device callback) and every user command
//! enters as a [`PlayerMessage`]; dispatching one is atomic with respect to
//! all others. The store never spawns or sleeps itself: work that has to
//! happen later is handed back to the caller as [`Effect`]s.

use crate::config::PlayerConfig;
use crate::snapshot::PlayerSnapshot;
use pulse_core::{Catalog, RepeatMode, Theme};
use pulse_playback::{AudioOutput, OutputEvent, PlaybackEvent, PlaybackManager, SourceId};
use pulse_search::{
    CatalogFetcher, CatalogState, DebounceTicket, FetchOutcome, FetchTicket, SearchDebouncer,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// User-issued player command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerCommand {
    TogglePlay,
    SelectTrack { index: usize },
    Next,
    Previous,
    SetShuffle { enabled: bool },
    ToggleShuffle,
    SetRepeat { mode: RepeatMode },
    CycleRepeat,
    /// Seek to a position in seconds
    Seek { seconds: f64 },
    /// Seek to a fraction of the duration
    SeekPercent { fraction: f64 },
    SetVolume { volume: f64 },
    ToggleTheme,
    /// Re-issue the current query after a failure
    Retry,
}

/// Input to [`PlayerStore::dispatch`]
#[derive(Debug)]
pub enum PlayerMessage {
    /// Search box content changed
    QueryInput(String),
    /// A debounce timer ran out
    DebounceElapsed(DebounceTicket),
    /// A catalog request finished
    FetchCompleted(FetchTicket, pulse_search::Result<Catalog>),
    /// The output device reported an event for a load
    Output(SourceId, OutputEvent),
    Command(PlayerCommand),
    /// Tear down: cancel the timer and ignore everything that follows
    Dispose,
}

/// Work the driver must perform on behalf of the store
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Sleep for `ticket.delay`, then send [`PlayerMessage::DebounceElapsed`].
    /// Replaces any previously scheduled timer.
    ScheduleDebounce(DebounceTicket),
    /// Search for `ticket.query()`, then send [`PlayerMessage::FetchCompleted`]
    StartFetch(FetchTicket),
    /// Write the theme to the preference store
    PersistTheme(Theme),
}

pub struct PlayerStore<O> {
    debouncer: SearchDebouncer,
    fetcher: CatalogFetcher,
    playback: PlaybackManager<O>,
    theme: Theme,
    disposed: bool,
}

impl<O: AudioOutput> PlayerStore<O> {
    pub fn new(config: &PlayerConfig, output: O, theme: Theme) -> Self {
        Self {
            debouncer: SearchDebouncer::new(
                config.search.default_query.clone(),
                config.debounce_window(),
            ),
            fetcher: CatalogFetcher::new(),
            playback: PlaybackManager::new(&config.playback_config(), output),
            theme,
            disposed: false,
        }
    }

    /// Issue the initial request for the default query
    pub fn mount(&mut self) -> Vec<Effect> {
        if self.disposed {
            return Vec::new();
        }
        let query = self.debouncer.effective().to_string();
        self.fetcher
            .request(&query)
            .map(Effect::StartFetch)
            .into_iter()
            .collect()
    }

    /// Apply one message
    pub fn dispatch(&mut self, message: PlayerMessage) -> Vec<Effect> {
        if self.disposed {
            debug!(?message, "Ignoring message after dispose");
            return Vec::new();
        }

        match message {
            PlayerMessage::QueryInput(raw) => {
                vec![Effect::ScheduleDebounce(self.debouncer.input(raw))]
            }
            PlayerMessage::DebounceElapsed(ticket) => self
                .debouncer
                .fire(ticket)
                .and_then(|query| self.fetcher.request(&query))
                .map(Effect::StartFetch)
                .into_iter()
                .collect(),
            PlayerMessage::FetchCompleted(ticket, result) => {
                match self.fetcher.complete(&ticket, result) {
                    FetchOutcome::Loaded(catalog) => self.playback.replace_catalog(catalog),
                    FetchOutcome::Failed => self.playback.replace_catalog(Catalog::empty()),
                    FetchOutcome::Discarded => {}
                }
                Vec::new()
            }
            PlayerMessage::Output(source, event) => {
                self.playback.handle_output_event(source, event);
                Vec::new()
            }
            PlayerMessage::Command(command) => self.execute(command),
            PlayerMessage::Dispose => {
                info!("Disposing player store");
                self.disposed = true;
                self.debouncer.cancel();
                self.fetcher.dispose();
                Vec::new()
            }
        }
    }

    fn execute(&mut self, command: PlayerCommand) -> Vec<Effect> {
        match command {
            PlayerCommand::TogglePlay => self.playback.toggle_play(),
            PlayerCommand::SelectTrack { index } => self.playback.select_track(index),
            PlayerCommand::Next => self.playback.next(),
            PlayerCommand::Previous => self.playback.previous(),
            PlayerCommand::SetShuffle { enabled } => self.playback.set_shuffle(enabled),
            PlayerCommand::ToggleShuffle => self.playback.toggle_shuffle(),
            PlayerCommand::SetRepeat { mode } => self.playback.set_repeat(mode),
            PlayerCommand::CycleRepeat => self.playback.cycle_repeat(),
            PlayerCommand::Seek { seconds } => self.playback.seek(seconds),
            PlayerCommand::SeekPercent { fraction } => self.playback.seek_to_percent(fraction),
            PlayerCommand::SetVolume { volume } => self.playback.set_volume(volume),
            PlayerCommand::ToggleTheme => {
                self.theme = self.theme.toggled();
                return vec![Effect::PersistTheme(self.theme)];
            }
            PlayerCommand::Retry => {
                return self.fetcher.retry().map(Effect::StartFetch).into_iter().collect();
            }
        }
        Vec::new()
    }

    /// Render-ready copy of the current state
    pub fn snapshot(&self) -> PlayerSnapshot {
        let transport = self.playback.transport();
        let error = match self.fetcher.state() {
            CatalogState::Failed { message } => Some(message.clone()),
            _ => None,
        };

        PlayerSnapshot {
            raw_query: self.debouncer.raw().to_string(),
            effective_query: self.debouncer.effective().to_string(),
            loading: self.fetcher.is_loading(),
            error,
            catalog: self.playback.catalog().clone(),
            playback: self.playback.state(),
            current_track: self.playback.current_track().cloned(),
            current_time: transport.current_time(),
            duration: transport.duration(),
            progress: transport.progress(),
            formatted_time: transport.formatted_time(),
            formatted_duration: transport.formatted_duration(),
            volume: transport.volume(),
            volume_level: transport.volume_level(),
            theme: self.theme,
        }
    }

    /// Take playback events queued since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.playback.drain_events()
    }

    pub fn catalog_state(&self) -> &CatalogState {
        self.fetcher.state()
    }

    pub fn playback(&self) -> &PlaybackManager<O> {
        &self.playback
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Consume the store, returning the output device
    pub fn into_output(self) -> O {
        self.playback.into_output()
    }
}
