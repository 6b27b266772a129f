//! Per-parse accumulator behind [`Results`].
//!
//! Objects are completed bottom-up (a nested object finishes before the
//! object that contains it) but must be reported in document order, so the
//! walker reserves a [`Slot`] when it meets an object root and fills it once
//! the object is complete.

use std::collections::BTreeMap;
use std::sync::Arc;

use mf2_core::{MicroformatObject, Results};

/// Position of an object root in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(usize);

#[derive(Debug)]
struct Entry {
    object: Arc<MicroformatObject>,
    standalone: bool,
    id: Option<String>,
}

#[derive(Debug, Default)]
pub struct ResultIndex {
    entries: Vec<Option<Entry>>,
    rels: BTreeMap<String, Vec<String>>,
}

impl ResultIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next document-order position.
    pub fn reserve(&mut self) -> Slot {
        self.entries.push(None);
        Slot(self.entries.len() - 1)
    }

    /// Record a completed object at a previously reserved position.
    pub fn fill(
        &mut self,
        slot: Slot,
        object: Arc<MicroformatObject>,
        standalone: bool,
        id: Option<String>,
    ) {
        if let Some(entry) = self.entries.get_mut(slot.0) {
            *entry = Some(Entry {
                object,
                standalone,
                id,
            });
        }
    }

    /// Record a relationship found outside any object.
    pub fn push_rel(&mut self, token: &str, target: &str) {
        self.rels
            .entry(token.to_string())
            .or_default()
            .push(target.to_string());
    }

    /// Number of object roots met so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze into [`Results`]. When several objects share an id, the first
    /// in document order is kept.
    #[must_use]
    pub fn finish(self) -> Results {
        let mut all = Vec::with_capacity(self.entries.len());
        let mut standalone = Vec::new();
        let mut by_id = BTreeMap::new();

        for entry in self.entries.into_iter().flatten() {
            if entry.standalone {
                standalone.push(Arc::clone(&entry.object));
            }
            if let Some(id) = entry.id {
                by_id.entry(id).or_insert_with(|| Arc::clone(&entry.object));
            }
            all.push(entry.object);
        }

        Results::from_parts(all, standalone, by_id, self.rels)
    }
}
