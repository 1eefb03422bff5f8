use crate::item::{ItemMetadata, PlayableItem};

/// Transport surface of a media playback engine.
///
/// The engine is a single-owner resource: every mutating call takes
/// `&mut self`, so ownership by one session serializes all mutation.
/// Decoding and rendering are the implementation's business; this trait
/// only covers queue position, transport state, and capability queries.
pub trait PlaybackEngine: Send {
    /// Replace the queue with `items`, moving to the first item.
    fn load(&mut self, items: Vec<PlayableItem>);

    fn play(&mut self);

    fn pause(&mut self);

    /// Advance to the next queued item. No-op when there is none.
    fn next(&mut self);

    /// Step back to the previous queued item. No-op when there is none.
    fn previous(&mut self);

    fn is_playing(&self) -> bool;

    fn has_next(&self) -> bool;

    fn has_previous(&self) -> bool;

    /// Metadata of the item at the current queue position, if any.
    fn current_metadata(&self) -> Option<ItemMetadata>;

    /// Release engine resources. Every call after this is a no-op.
    fn release(&mut self);
}
