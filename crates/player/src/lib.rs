//! # Vodloop player
//!
//! Sequential playback over a fetched video catalogue.
//!
//! The crate is layered the way the data flows:
//!
//! - [`playlist`] orders fetched descriptors newest-first and adapts them
//!   into [`PlayableItem`]s
//! - [`engine`] is the transport surface of a playback engine;
//!   [`QueueEngine`] is the in-process implementation
//! - [`session`] is the state machine tying engine and
//!   [`PlaybackState`] together
//! - [`player`] wraps a session in a Tokio task: fetch lifecycle with
//!   latest-wins supersession, the settle delay on the loading flag, and a
//!   `watch`-broadcast state for the presentation layer

pub mod engine;
pub mod item;
pub mod player;
pub mod playlist;
pub mod queue;
pub mod session;
pub mod source;
pub mod state;

pub use engine::PlaybackEngine;
pub use item::{ItemMetadata, PlayableItem};
pub use player::{PlayerHandle, SETTLE_DELAY, spawn};
pub use playlist::{SortError, sorted_playlist};
pub use queue::QueueEngine;
pub use session::Session;
pub use source::VideoSource;
pub use state::PlaybackState;
