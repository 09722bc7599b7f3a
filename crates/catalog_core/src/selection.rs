use std::sync::{Arc, Mutex};

use crate::Item;

/// Receives the item the user picked for detail viewing.
///
/// The coordinator never owns the "currently selected item"; whoever runs its
/// effects is handed one of these at construction.
pub trait SelectionSink: Send + Sync {
    fn select(&self, item: Item);
}

/// Clonable in-memory holder for the selected item.
#[derive(Debug, Clone, Default)]
pub struct SharedSelection {
    inner: Arc<Mutex<Option<Item>>>,
}

impl SharedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Item> {
        self.inner.lock().ok().and_then(|guard| guard.clone())
    }
}

impl SelectionSink for SharedSelection {
    fn select(&self, item: Item) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(item);
        }
    }
}
