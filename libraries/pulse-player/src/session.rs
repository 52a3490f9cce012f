//! Async session driver
//!
//! Runs a [`PlayerStore`] on its own tokio task. Messages arrive on an
//! unbounded `mpsc` channel so device callbacks can post without awaiting;
//! effects are executed by spawning timer and fetch tasks that post their
//! completion back into the same channel. After every message the current
//! [`PlayerSnapshot`] is published on a `watch` channel and drained playback
//! events go out on a `broadcast` channel.

use crate::config::PlayerConfig;
use crate::error::{PlayerError, Result};
use crate::snapshot::PlayerSnapshot;
use crate::store::{Effect, PlayerCommand, PlayerMessage, PlayerStore};
use pulse_core::{PreferenceStore, Theme};
use pulse_playback::{AudioOutput, OutputEvent, PlaybackEvent, SourceId};
use pulse_search::{CatalogSource, SearchClient, SearchError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

const EVENT_CAPACITY: usize = 256;

/// Cloneable sender for posting input into a running session
///
/// Hand one to the output device so it can report [`OutputEvent`]s.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    sender: mpsc::UnboundedSender<PlayerMessage>,
}

impl PlayerHandle {
    /// Search box content changed
    pub fn input(&self, raw: impl Into<String>) -> Result<()> {
        self.send(PlayerMessage::QueryInput(raw.into()))
    }

    /// Issue a user command
    pub fn command(&self, command: PlayerCommand) -> Result<()> {
        self.send(PlayerMessage::Command(command))
    }

    /// Report an event from the output device
    pub fn output_event(&self, source: SourceId, event: OutputEvent) -> Result<()> {
        self.send(PlayerMessage::Output(source, event))
    }

    fn send(&self, message: PlayerMessage) -> Result<()> {
        self.sender
            .send(message)
            .map_err(|_| PlayerError::SessionClosed)
    }
}

/// A running player
pub struct PlayerSession<O> {
    handle: PlayerHandle,
    snapshot: watch::Receiver<PlayerSnapshot>,
    events: broadcast::Sender<PlaybackEvent>,
    task: JoinHandle<O>,
}

impl<O: AudioOutput + 'static> PlayerSession<O> {
    /// Start a session that searches with `source`
    ///
    /// The theme is read from `preferences` and written back whenever it is
    /// toggled. The default query is fetched immediately.
    pub fn spawn<S, P>(config: &PlayerConfig, output: O, source: S, preferences: P) -> Self
    where
        S: CatalogSource + 'static,
        P: PreferenceStore + 'static,
    {
        let theme = Theme::load(&preferences);
        let mut store = PlayerStore::new(config, output, theme);
        let mount = store.mount();

        let (sender, inbox) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot) = watch::channel(store.snapshot());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        let driver = Driver {
            store,
            preferences,
            source: Arc::new(source),
            sender: sender.downgrade(),
            fetch_timeout: config.fetch_timeout(),
            debounce: None,
            fetches: JoinSet::new(),
            snapshot: snapshot_tx,
            events: events.clone(),
        };

        info!(query = %config.search.default_query, "Starting player session");
        let task = tokio::spawn(driver.run(inbox, mount));

        Self {
            handle: PlayerHandle { sender },
            snapshot,
            events,
            task,
        }
    }

    /// Start a session backed by the HTTP search client
    pub fn connect<P>(config: &PlayerConfig, output: O, preferences: P) -> Result<Self>
    where
        P: PreferenceStore + 'static,
    {
        let client = SearchClient::new(config.search_config())?;
        Ok(Self::spawn(config, output, client, preferences))
    }

    pub fn handle(&self) -> PlayerHandle {
        self.handle.clone()
    }

    pub fn input(&self, raw: impl Into<String>) -> Result<()> {
        self.handle.input(raw)
    }

    pub fn command(&self, command: PlayerCommand) -> Result<()> {
        self.handle.command(command)
    }

    pub fn output_event(&self, source: SourceId, event: OutputEvent) -> Result<()> {
        self.handle.output_event(source, event)
    }

    /// Latest published state
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Receiver notified after every processed message
    pub fn subscribe(&self) -> watch::Receiver<PlayerSnapshot> {
        self.snapshot.clone()
    }

    /// Receiver for playback events
    pub fn subscribe_events(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.events.subscribe()
    }

    /// Dispose the store, cancel outstanding work and return the output device
    pub async fn shutdown(self) -> Result<O> {
        if self.handle.send(PlayerMessage::Dispose).is_err() {
            debug!("Session loop already stopped");
        }
        drop(self.handle);
        self.task.await.map_err(|e| {
            warn!(error = %e, "Player session task failed");
            PlayerError::SessionClosed
        })
    }
}

struct Driver<O, S, P> {
    store: PlayerStore<O>,
    preferences: P,
    source: Arc<S>,
    sender: mpsc::WeakUnboundedSender<PlayerMessage>,
    fetch_timeout: Duration,
    debounce: Option<JoinHandle<()>>,
    fetches: JoinSet<()>,
    snapshot: watch::Sender<PlayerSnapshot>,
    events: broadcast::Sender<PlaybackEvent>,
}

impl<O, S, P> Driver<O, S, P>
where
    O: AudioOutput + 'static,
    S: CatalogSource + 'static,
    P: PreferenceStore + 'static,
{
    async fn run(
        mut self,
        mut inbox: mpsc::UnboundedReceiver<PlayerMessage>,
        mount: Vec<Effect>,
    ) -> O {
        self.execute(mount);
        self.publish();

        loop {
            tokio::select! {
                message = inbox.recv() => {
                    let Some(message) = message else {
                        debug!("All player handles dropped");
                        break;
                    };
                    let dispose = matches!(message, PlayerMessage::Dispose);
                    let effects = self.store.dispatch(message);
                    self.execute(effects);
                    self.publish();
                    if dispose {
                        break;
                    }
                }
                Some(joined) = self.fetches.join_next(), if !self.fetches.is_empty() => {
                    if let Err(e) = joined {
                        if e.is_panic() {
                            warn!(error = %e, "Catalog fetch task panicked");
                        }
                    }
                }
            }
        }

        if let Some(timer) = self.debounce.take() {
            timer.abort();
        }
        self.fetches.abort_all();
        info!("Player session stopped");
        self.store.into_output()
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleDebounce(ticket) => {
                    if let Some(previous) = self.debounce.take() {
                        previous.abort();
                    }
                    let Some(sender) = self.sender.upgrade() else {
                        continue;
                    };
                    self.debounce = Some(tokio::spawn(async move {
                        tokio::time::sleep(ticket.delay).await;
                        if sender.send(PlayerMessage::DebounceElapsed(ticket)).is_err() {
                            debug!("Session closed before debounce elapsed");
                        }
                    }));
                }
                Effect::StartFetch(ticket) => {
                    let Some(sender) = self.sender.upgrade() else {
                        continue;
                    };
                    let source = Arc::clone(&self.source);
                    let timeout = self.fetch_timeout;
                    self.fetches.spawn(async move {
                        let search = source.search(ticket.query());
                        let result = match tokio::time::timeout(timeout, search).await {
                            Ok(result) => result,
                            Err(_) => Err(SearchError::Timeout(timeout)),
                        };
                        if sender.send(PlayerMessage::FetchCompleted(ticket, result)).is_err() {
                            debug!("Session closed before fetch completed");
                        }
                    });
                }
                Effect::PersistTheme(theme) => {
                    debug!(theme = theme.as_str(), "Persisting theme");
                    theme.save(&mut self.preferences);
                }
            }
        }
    }

    fn publish(&mut self) {
        self.snapshot.send_replace(self.store.snapshot());
        for event in self.store.drain_events() {
            // No subscribers is fine
            let _ = self.events.send(event);
        }
    }
}
