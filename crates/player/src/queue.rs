use crate::engine::PlaybackEngine;
use crate::item::{ItemMetadata, PlayableItem};

/// In-process playback engine tracking transport state over a queue of
/// items. It does no decoding; it exists so the session can run headless
/// and so tests have a real engine to drive.
#[derive(Debug, Default)]
pub struct QueueEngine {
    items: Vec<PlayableItem>,
    cursor: usize,
    playing: bool,
    released: bool,
}

impl QueueEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items currently queued, in playback order.
    pub fn items(&self) -> &[PlayableItem] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl PlaybackEngine for QueueEngine {
    fn load(&mut self, items: Vec<PlayableItem>) {
        if self.released {
            return;
        }
        self.items = items;
        self.cursor = 0;
    }

    fn play(&mut self) {
        if self.released || self.items.is_empty() {
            return;
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        if self.released {
            return;
        }
        self.playing = false;
    }

    fn next(&mut self) {
        if self.released || self.cursor + 1 >= self.items.len() {
            return;
        }
        self.cursor += 1;
    }

    fn previous(&mut self) {
        if self.released || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn has_next(&self) -> bool {
        !self.released && self.cursor + 1 < self.items.len()
    }

    fn has_previous(&self) -> bool {
        !self.released && self.cursor > 0
    }

    fn current_metadata(&self) -> Option<ItemMetadata> {
        self.items.get(self.cursor).map(PlayableItem::metadata)
    }

    fn release(&mut self) {
        self.items.clear();
        self.cursor = 0;
        self.playing = false;
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> PlayableItem {
        PlayableItem {
            media_url: format!("https://cdn.example.com/{title}/index.m3u8"),
            title: title.to_owned(),
            author_name: "Dana".to_owned(),
            description: String::new(),
        }
    }

    #[test]
    fn load_resets_to_first_item() {
        let mut engine = QueueEngine::new();
        engine.load(vec![item("a"), item("b")]);
        engine.next();
        assert_eq!(engine.cursor(), 1);

        engine.load(vec![item("c"), item("d"), item("e")]);
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.current_metadata().unwrap().title, "c");
        assert!(engine.has_next());
        assert!(!engine.has_previous());
    }

    #[test]
    fn next_and_previous_are_bounds_guarded() {
        let mut engine = QueueEngine::new();
        engine.load(vec![item("a"), item("b")]);

        engine.previous();
        assert_eq!(engine.cursor(), 0);

        engine.next();
        engine.next();
        engine.next();
        assert_eq!(engine.cursor(), 1);
        assert!(!engine.has_next());
        assert!(engine.has_previous());
    }

    #[test]
    fn play_requires_a_queue() {
        let mut engine = QueueEngine::new();
        engine.play();
        assert!(!engine.is_playing());

        engine.load(vec![item("a")]);
        engine.play();
        assert!(engine.is_playing());
        engine.pause();
        assert!(!engine.is_playing());
    }

    #[test]
    fn release_is_terminal() {
        let mut engine = QueueEngine::new();
        engine.load(vec![item("a"), item("b")]);
        engine.play();
        engine.release();

        assert!(!engine.is_playing());
        assert_eq!(engine.current_metadata(), None);

        engine.load(vec![item("c")]);
        engine.play();
        engine.next();
        assert!(!engine.is_playing());
        assert!(!engine.has_next());
        assert_eq!(engine.current_metadata(), None);
    }
}
