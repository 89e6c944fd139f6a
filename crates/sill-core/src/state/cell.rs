//! Reactive state cells.
//!
//! [`StateCell`] is the base get/set container with subscriber
//! notification; [`RegistryCell`] derives the registry's single write path
//! over it, adding write-through persistence. Single-threaded by design:
//! the shell processes one state transition to completion before the next
//! begins, so there is no locking here and the cells are not `Sync`.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::storage;
use crate::windows::registry::WindowRegistry;

/// Feature key of the registry's persisted blob.
pub const WINDOWS_FEATURE_KEY: &str = "windows";

/// Handle returned by [`StateCell::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

/// A value plus the callbacks watching it.
///
/// `set` replaces the value and notifies every subscriber with the new
/// one, synchronously, in subscription order.
pub struct StateCell<T> {
    value: T,
    subscribers: Vec<(SubscriberId, Box<dyn FnMut(&T)>)>,
    next_subscriber: u64,
}

impl<T> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify all subscribers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
    }

    /// Replace the value with a pure function of the current one.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Register a callback invoked with every new value.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Drop a subscription. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }
}

/// Where the registry's blob lives, if anywhere.
///
/// Resolved once at construction. Environments with no addressable state
/// directory (no home directory, nothing configured) run ephemeral:
/// hydration and saves are both skipped rather than attempted and failed.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageMode {
    /// Blob persisted under this directory.
    Disk(PathBuf),
    /// In-memory only.
    Ephemeral,
}

/// The registry's single write path: a [`StateCell`] with write-through
/// persistence.
///
/// Every mutation funnels through [`RegistryCell::replace`] or
/// [`RegistryCell::update`], so a committed registry is always the one
/// subscribers were notified with and (in disk mode) the one saved under
/// [`WINDOWS_FEATURE_KEY`]. Persistence is fire-and-forget: a failed save
/// is logged and the in-memory update stands - there is no rollback path.
pub struct RegistryCell {
    base: StateCell<WindowRegistry>,
    mode: StorageMode,
}

impl RegistryCell {
    /// Create a cell for the given mode, hydrating from disk when backed.
    ///
    /// A missing or unreadable blob hydrates to the empty registry; first
    /// run and corrupted state look the same from here.
    pub fn load(mode: StorageMode) -> Self {
        let initial = match &mode {
            StorageMode::Disk(dir) => {
                match storage::load_feature_state::<WindowRegistry>(dir, WINDOWS_FEATURE_KEY) {
                    Some(registry) => {
                        info!(
                            event = "core.state.registry_hydrated",
                            window_count = registry.len()
                        );
                        registry
                    }
                    None => WindowRegistry::new(),
                }
            }
            StorageMode::Ephemeral => {
                info!(
                    event = "core.state.registry_ephemeral",
                    "No state directory available - window registry will not persist"
                );
                WindowRegistry::new()
            }
        };

        Self {
            base: StateCell::new(initial),
            mode,
        }
    }

    /// Create an in-memory cell that never touches disk.
    pub fn ephemeral() -> Self {
        Self::load(StorageMode::Ephemeral)
    }

    pub fn mode(&self) -> &StorageMode {
        &self.mode
    }

    /// Current registry snapshot.
    pub fn get(&self) -> &WindowRegistry {
        self.base.get()
    }

    /// Replace the registry wholesale: persist, then notify subscribers.
    pub fn replace(&mut self, registry: WindowRegistry) {
        self.persist(&registry);
        self.base.set(registry);
    }

    /// Replace the registry with a pure function of the current one.
    pub fn update(&mut self, f: impl FnOnce(&WindowRegistry) -> WindowRegistry) {
        let next = f(self.base.get());
        self.replace(next);
    }

    /// Watch every committed write.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&WindowRegistry) + 'static,
    ) -> SubscriberId {
        self.base.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.base.unsubscribe(id)
    }

    fn persist(&self, registry: &WindowRegistry) {
        let StorageMode::Disk(dir) = &self.mode else {
            return;
        };
        if let Err(e) = storage::save_feature_state(dir, WINDOWS_FEATURE_KEY, registry) {
            warn!(
                event = "core.state.registry_save_failed",
                error = %e,
                "Failed to persist window registry - in-memory state unaffected"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windows::operations::open_or_focus;
    use crate::windows::types::{OpenWindowRequest, Size};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn open_request(id: &str) -> OpenWindowRequest {
        OpenWindowRequest::with_id(
            id.to_string(),
            "notes".to_string(),
            "Notes".to_string(),
            Size {
                width: 400.0,
                height: 300.0,
            },
        )
    }

    #[test]
    fn test_state_cell_get_set() {
        let mut cell = StateCell::new(1);
        assert_eq!(*cell.get(), 1);
        cell.set(2);
        assert_eq!(*cell.get(), 2);
    }

    #[test]
    fn test_state_cell_update() {
        let mut cell = StateCell::new(10);
        cell.update(|v| v + 5);
        assert_eq!(*cell.get(), 15);
    }

    #[test]
    fn test_state_cell_notifies_subscribers() {
        let mut cell = StateCell::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        cell.subscribe(move |v: &i32| sink.borrow_mut().push(*v));

        cell.set(1);
        cell.update(|v| v + 1);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_state_cell_unsubscribe() {
        let mut cell = StateCell::new(0);
        let seen = Rc::new(RefCell::new(0u32));

        let sink = Rc::clone(&seen);
        let id = cell.subscribe(move |_: &i32| *sink.borrow_mut() += 1);

        cell.set(1);
        assert!(cell.unsubscribe(id));
        cell.set(2);

        assert_eq!(*seen.borrow(), 1);
        // Second unsubscribe finds nothing
        assert!(!cell.unsubscribe(id));
    }

    #[test]
    fn test_state_cell_multiple_subscribers() {
        let mut cell = StateCell::new(0);
        let first = Rc::new(RefCell::new(0u32));
        let second = Rc::new(RefCell::new(0u32));

        let sink = Rc::clone(&first);
        cell.subscribe(move |_: &i32| *sink.borrow_mut() += 1);
        let sink = Rc::clone(&second);
        cell.subscribe(move |_: &i32| *sink.borrow_mut() += 1);

        cell.set(1);
        assert_eq!(*first.borrow(), 1);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn test_registry_cell_ephemeral_starts_empty() {
        let cell = RegistryCell::ephemeral();
        assert!(cell.get().is_empty());
        assert_eq!(cell.mode(), &StorageMode::Ephemeral);
    }

    #[test]
    fn test_registry_cell_hydrates_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let mode = StorageMode::Disk(temp_dir.path().to_path_buf());

        {
            let mut cell = RegistryCell::load(mode.clone());
            cell.update(|registry| {
                let mut next = registry.clone();
                open_or_focus(&mut next, open_request("win-1"));
                next
            });
        }

        let rehydrated = RegistryCell::load(mode);
        assert_eq!(rehydrated.get().len(), 1);
        assert!(rehydrated.get().contains("win-1"));
    }

    #[test]
    fn test_registry_cell_missing_blob_hydrates_empty() {
        let temp_dir = TempDir::new().unwrap();
        let cell = RegistryCell::load(StorageMode::Disk(temp_dir.path().to_path_buf()));
        assert!(cell.get().is_empty());
    }

    #[test]
    fn test_registry_cell_corrupted_blob_hydrates_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("windows.json"), "not json").unwrap();

        let cell = RegistryCell::load(StorageMode::Disk(temp_dir.path().to_path_buf()));
        assert!(cell.get().is_empty());
    }

    #[test]
    fn test_registry_cell_replace_persists_and_notifies() {
        let temp_dir = TempDir::new().unwrap();
        let mut cell = RegistryCell::load(StorageMode::Disk(temp_dir.path().to_path_buf()));

        let notified = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&notified);
        cell.subscribe(move |registry: &WindowRegistry| {
            *sink.borrow_mut() = registry.len();
        });

        let mut next = WindowRegistry::new();
        open_or_focus(&mut next, open_request("win-1"));
        cell.replace(next);

        assert_eq!(*notified.borrow(), 1);
        assert!(temp_dir.path().join("windows.json").exists());
    }

    #[test]
    fn test_registry_cell_ephemeral_never_writes() {
        let mut cell = RegistryCell::ephemeral();
        cell.update(|registry| {
            let mut next = registry.clone();
            open_or_focus(&mut next, open_request("win-1"));
            next
        });
        // Nothing observable on disk; the in-memory value still advanced
        assert_eq!(cell.get().len(), 1);
    }

    #[test]
    fn test_registry_cell_save_failure_keeps_memory_state() {
        let temp_dir = TempDir::new().unwrap();
        // Turn the blob path into a directory so every save fails
        std::fs::create_dir_all(temp_dir.path().join("windows.json")).unwrap();

        let mut cell = RegistryCell::load(StorageMode::Disk(temp_dir.path().to_path_buf()));
        cell.update(|registry| {
            let mut next = registry.clone();
            open_or_focus(&mut next, open_request("win-1"));
            next
        });

        assert_eq!(cell.get().len(), 1);
    }
}
