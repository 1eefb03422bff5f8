use crate::item::ItemMetadata;

/// Observable playback/UI state.
///
/// The flags are deliberately independent booleans rather than one enum:
/// loading, play/pause, and controls visibility vary independently and the
/// presentation layer reads each on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    /// A fetch cycle is underway (cleared only after the settle delay).
    pub is_loading: bool,
    pub is_playing: bool,
    pub controls_visible: bool,
    pub has_previous: bool,
    pub has_next: bool,
    /// Metadata of the engine's current queue position.
    pub current: Option<ItemMetadata>,
}

impl PlaybackState {
    /// State at session start. `engine_playing` mirrors whatever the engine
    /// reports before the first load.
    pub(crate) fn initial(engine_playing: bool) -> Self {
        Self {
            is_loading: false,
            is_playing: engine_playing,
            controls_visible: true,
            has_previous: false,
            has_next: false,
            current: None,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::initial(false)
    }
}
