/// Grid view state: which card is hovered and which thumbnails have loaded.
use std::collections::HashSet;

use super::data::{ImageId, ImageRecord};

/// Per-card view model handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub record: &'a ImageRecord,
    pub hovered: bool,
    pub loaded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GridState {
    /// At most one card is emphasized at a time
    hovered: Option<ImageId>,
    /// Grows only; an id never leaves once its asset finished loading
    loaded: HashSet<ImageId>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One card per record, in record order
    pub fn cards<'a>(&self, records: &'a [ImageRecord]) -> Vec<Card<'a>> {
        records
            .iter()
            .map(|record| Card {
                record,
                hovered: self.is_hovered(record.id),
                loaded: self.is_loaded(record.id),
            })
            .collect()
    }

    /// Pointer entered a card. Replaces any previous hover.
    pub fn pointer_enter(&mut self, id: ImageId) {
        self.hovered = Some(id);
    }

    /// Pointer left a card.
    ///
    /// A leave for a card that is no longer the hovered one is stale
    /// (the pointer already entered its neighbour) and is ignored.
    pub fn pointer_leave(&mut self, id: ImageId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Record a load-completion signal. Returns true the first time only.
    pub fn mark_loaded(&mut self, id: ImageId) -> bool {
        self.loaded.insert(id)
    }

    #[cfg(test)]
    pub fn hovered(&self) -> Option<ImageId> {
        self.hovered
    }

    pub fn is_hovered(&self, id: ImageId) -> bool {
        self.hovered == Some(id)
    }

    pub fn is_loaded(&self, id: ImageId) -> bool {
        self.loaded.contains(&id)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }
}
