use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};
use vodloop_api::ApiError;
use vodloop_api::VideoDescriptor;

use crate::engine::PlaybackEngine;
use crate::session::Session;
use crate::source::VideoSource;
use crate::state::PlaybackState;

/// Fixed wait between a fetch cycle finishing and the loading flag
/// clearing, so the indicator does not flicker on fast responses.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy)]
enum Command {
    Refresh,
    Next,
    Previous,
    PlayPause,
    ToggleControls,
    ExternalPause,
    Close,
}

type FetchOutcome = (u64, Result<Vec<VideoDescriptor>, ApiError>);

/// Handle to a running player task.
///
/// Intents are fire-and-forget sends onto the task's command channel; the
/// observable state comes back through a `watch` channel. Once the task has
/// exited, sends are silently dropped.
pub struct PlayerHandle {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<PlaybackState>,
    task: JoinHandle<()>,
}

impl PlayerHandle {
    /// Snapshot of the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state.borrow().clone()
    }

    /// A receiver observing every published state change.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.state.clone()
    }

    /// Start a new fetch cycle, superseding any fetch still in flight.
    pub fn refresh(&self) {
        self.send(Command::Refresh);
    }

    pub fn request_next(&self) {
        self.send(Command::Next);
    }

    pub fn request_previous(&self) {
        self.send(Command::Previous);
    }

    pub fn request_play_pause(&self) {
        self.send(Command::PlayPause);
    }

    pub fn request_toggle_controls(&self) {
        self.send(Command::ToggleControls);
    }

    /// Report that the engine was paused from outside the session.
    pub fn notify_external_pause(&self) {
        self.send(Command::ExternalPause);
    }

    /// End the session: the engine is released and the task exits.
    pub async fn close(self) {
        let _ = self.commands.send(Command::Close);
        let _ = self.task.await;
    }

    fn send(&self, command: Command) {
        let _ = self.commands.send(command);
    }
}

/// Spawn a player task owning `engine`, fed by `source`. The first fetch
/// begins immediately.
pub fn spawn<E, S>(engine: E, source: S) -> PlayerHandle
where
    E: PlaybackEngine + 'static,
    S: VideoSource + 'static,
{
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let session = Session::new(engine);
    let (state_tx, state_rx) = watch::channel(session.state().clone());

    let task = PlayerTask {
        session,
        source: Arc::new(source),
        commands: command_rx,
        outcome_tx,
        outcome_rx,
        state_tx,
        fetch: None,
        generation: 0,
        settle_deadline: None,
    };
    let task = tokio::spawn(task.run());

    PlayerHandle {
        commands: command_tx,
        state: state_rx,
        task,
    }
}

/// The task owning the session. All session and engine mutation happens
/// here, on one task.
struct PlayerTask<E: PlaybackEngine, S: VideoSource> {
    session: Session<E>,
    source: Arc<S>,
    commands: mpsc::UnboundedReceiver<Command>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    state_tx: watch::Sender<PlaybackState>,
    fetch: Option<JoinHandle<()>>,
    /// Monotonic fetch cycle id; outcomes from superseded cycles are
    /// dropped even if their abort raced with completion.
    generation: u64,
    settle_deadline: Option<Instant>,
}

impl<E: PlaybackEngine, S: VideoSource + 'static> PlayerTask<E, S> {
    async fn run(mut self) {
        self.begin_fetch();

        loop {
            // evaluated even when the branch below is disabled
            let settle_at = self.settle_deadline.unwrap_or_else(Instant::now);

            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Close) | None => break,
                    Some(command) => self.handle_command(command),
                },
                outcome = self.outcome_rx.recv() => {
                    if let Some((generation, result)) = outcome {
                        self.handle_outcome(generation, result);
                    }
                },
                _ = time::sleep_until(settle_at), if self.settle_deadline.is_some() => {
                    self.settle_deadline = None;
                    self.session.fetch_settled();
                    self.publish();
                },
            }
        }

        if let Some(handle) = self.fetch.take() {
            handle.abort();
        }
        self.session.close();
        self.publish();
        info!("player session closed");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Refresh => {
                self.begin_fetch();
                return;
            }
            Command::Next => self.session.request_next(),
            Command::Previous => self.session.request_previous(),
            Command::PlayPause => self.session.request_play_pause(),
            Command::ToggleControls => self.session.request_toggle_controls(),
            Command::ExternalPause => self.session.external_pause(),
            // Close never reaches here; the select loop breaks on it
            Command::Close => return,
        }
        self.publish();
    }

    /// Start a fetch cycle. A cycle already in flight is aborted together
    /// with its pending settle timer: the newest request owns the loading
    /// indicator.
    fn begin_fetch(&mut self) {
        if let Some(stale) = self.fetch.take() {
            debug!("superseding in-flight fetch");
            stale.abort();
        }
        self.settle_deadline = None;
        self.generation += 1;

        self.session.fetch_started();
        self.publish();

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let outcomes = self.outcome_tx.clone();
        self.fetch = Some(tokio::spawn(async move {
            let result = source.fetch_videos().await;
            let _ = outcomes.send((generation, result));
        }));
    }

    fn handle_outcome(&mut self, generation: u64, result: Result<Vec<VideoDescriptor>, ApiError>) {
        if generation != self.generation {
            debug!(generation, "dropping superseded fetch outcome");
            return;
        }
        self.fetch = None;

        match result {
            Ok(videos) => {
                // a sort failure is absorbed by the session: the engine is
                // untouched and the loading flag stays raised
                let _ = self.session.apply_videos(videos);
            }
            Err(e) => warn!(error = %e, "catalogue fetch failed"),
        }

        // the settle delay runs for success and failure alike
        self.settle_deadline = Some(Instant::now() + SETTLE_DELAY);
        self.publish();
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.session.state().clone());
    }
}
