use tracing::{debug, warn};
use vodloop_api::VideoDescriptor;

use crate::engine::PlaybackEngine;
use crate::playlist::{SortError, sorted_playlist};
use crate::state::PlaybackState;

/// The playback session state machine.
///
/// Owns the engine and the observable [`PlaybackState`]; every transition
/// goes through one of the methods below, so state and engine can never
/// drift apart. After [`Session::close`] all transitions are ignored.
pub struct Session<E: PlaybackEngine> {
    engine: E,
    state: PlaybackState,
    sort_failed: bool,
    closed: bool,
}

impl<E: PlaybackEngine> Session<E> {
    pub fn new(engine: E) -> Self {
        let state = PlaybackState::initial(engine.is_playing());
        Self {
            engine,
            state,
            sort_failed: false,
            closed: false,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// A fetch cycle has begun: raise the loading flag.
    pub fn fetch_started(&mut self) {
        if self.closed {
            return;
        }
        self.state.is_loading = true;
        self.sort_failed = false;
    }

    /// The settle delay after a fetch cycle has elapsed: clear the flag.
    /// A cycle abandoned by a sort failure keeps the flag forced true (see
    /// [`Session::apply_videos`]).
    pub fn fetch_settled(&mut self) {
        if self.closed || self.sort_failed {
            return;
        }
        self.state.is_loading = false;
    }

    /// Order the fetched catalogue and hand it to the engine.
    ///
    /// On a sort failure the engine is left untouched, the load is
    /// abandoned for this cycle, and the loading flag is forced back to
    /// true. That is the historical behavior, kept for parity even though
    /// it leaves the indicator raised.
    pub fn apply_videos(&mut self, videos: Vec<VideoDescriptor>) -> Result<(), SortError> {
        if self.closed {
            return Ok(());
        }
        match sorted_playlist(videos) {
            Ok(items) => {
                debug!(count = items.len(), "loading playlist into engine");
                self.engine.load(items);
                self.sync_transport();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "abandoning load, catalogue could not be ordered");
                self.state.is_loading = true;
                self.sort_failed = true;
                Err(e)
            }
        }
    }

    /// Advance to the next item. No-op unless `has_next`.
    pub fn request_next(&mut self) {
        if self.closed || !self.state.has_next {
            return;
        }
        self.engine.next();
        self.sync_transport();
        self.state.controls_visible = !self.state.controls_visible;
        if !self.state.is_playing {
            self.engine.play();
            self.state.is_playing = true;
        }
    }

    /// Step back to the previous item. No-op unless `has_previous`.
    pub fn request_previous(&mut self) {
        if self.closed || !self.state.has_previous {
            return;
        }
        self.engine.previous();
        self.sync_transport();
        self.state.controls_visible = !self.state.controls_visible;
        if !self.state.is_playing {
            self.engine.play();
            self.state.is_playing = true;
        }
    }

    /// Toggle between playing and paused. Controls visibility flips only on
    /// the pause-to-play edge.
    pub fn request_play_pause(&mut self) {
        if self.closed {
            return;
        }
        let was_playing = self.state.is_playing;
        if was_playing {
            self.engine.pause();
        } else {
            self.engine.play();
        }
        self.state.is_playing = !was_playing;
        if !was_playing {
            self.state.controls_visible = !self.state.controls_visible;
        }
    }

    pub fn request_toggle_controls(&mut self) {
        if self.closed {
            return;
        }
        self.state.controls_visible = !self.state.controls_visible;
    }

    /// The engine paused on its own (e.g. the host backgrounded us).
    /// Controls visibility is untouched.
    pub fn external_pause(&mut self) {
        if self.closed {
            return;
        }
        self.state.is_playing = false;
    }

    /// Release the engine and stop accepting transitions.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.engine.release();
        self.state.is_playing = false;
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Re-read capability flags and current metadata from the engine.
    /// Called after every item-advancing operation so they are never stale.
    fn sync_transport(&mut self) {
        self.state.has_previous = self.engine.has_previous();
        self.state.has_next = self.engine.has_next();
        self.state.current = self.engine.current_metadata();
    }
}
