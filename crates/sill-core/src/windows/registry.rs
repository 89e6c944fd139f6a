use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::WindowRecord;

/// Stacking key handed to the first window in an empty registry.
pub const INITIAL_Z_INDEX: u64 = 1000;

/// The window registry: every window keyed by id, open and closed alike.
///
/// The map itself carries no ordering - stacking order is derived from
/// `z_index` on demand. The map is private so all mutation goes through
/// [`crate::windows::operations`] and, above that, the store's single
/// write path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowRegistry {
    windows: HashMap<String, WindowRecord>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.windows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All records, open and closed, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut WindowRecord> {
        self.windows.get_mut(id)
    }

    /// Insert a record under its own id, replacing any previous record
    /// with that id.
    pub(crate) fn insert(&mut self, record: WindowRecord) {
        self.windows.insert(record.id.clone(), record);
    }

    /// Next stacking key: [`INITIAL_Z_INDEX`] for an empty registry, else
    /// one above the maximum across ALL records. Closed windows count too,
    /// so the value never decreases over the registry's lifetime.
    pub fn next_z_index(&self) -> u64 {
        self.windows
            .values()
            .map(|w| w.z_index)
            .max()
            .map_or(INITIAL_Z_INDEX, |max| max + 1)
    }

    /// Currently open windows in back-to-front render order (ascending
    /// `z_index`; the last element is the topmost window).
    ///
    /// A pure projection recomputed on every call - never cached, so it
    /// cannot drift from the registry it was derived from.
    pub fn open_windows(&self) -> Vec<&WindowRecord> {
        let mut open: Vec<&WindowRecord> =
            self.windows.values().filter(|w| w.is_open).collect();
        open.sort_by_key(|w| w.z_index);
        open
    }
}
