use tracing::{debug, info};

use crate::config::Config;
use crate::state::cell::{RegistryCell, StorageMode, SubscriberId};
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;
use crate::windows::operations::{self, OpenOutcome};
use crate::windows::registry::WindowRegistry;
use crate::windows::types::WindowRecord;

/// Default [`Store`] implementation: the single controller owning the
/// window registry.
///
/// Commands route through the pure operations in
/// [`crate::windows::operations`] as atomic read-modify-write steps: the
/// current snapshot is cloned, mutated, and committed through the
/// [`RegistryCell`] write path only when something actually changed. A
/// no-op command therefore costs no persistence write and no subscriber
/// notification.
pub struct RegistryStore {
    cell: RegistryCell,
}

impl RegistryStore {
    /// Create a store using the configured state directory, hydrating any
    /// previously persisted registry. Without an addressable state
    /// directory the store runs ephemeral.
    pub fn new(config: &Config) -> Self {
        let mode = match &config.state_dir {
            Some(dir) => StorageMode::Disk(dir.clone()),
            None => StorageMode::Ephemeral,
        };
        Self {
            cell: RegistryCell::load(mode),
        }
    }

    /// Create an in-memory store that never touches disk.
    pub fn ephemeral() -> Self {
        Self {
            cell: RegistryCell::ephemeral(),
        }
    }

    /// The full registry: open and closed records alike.
    pub fn registry(&self) -> &WindowRegistry {
        self.cell.get()
    }

    /// Open windows in back-to-front render order.
    pub fn open_windows(&self) -> Vec<&WindowRecord> {
        self.cell.get().open_windows()
    }

    /// Watch every committed registry write.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&WindowRegistry) + 'static,
    ) -> SubscriberId {
        self.cell.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.cell.unsubscribe(id)
    }
}

impl Store for RegistryStore {
    fn dispatch(&mut self, cmd: Command) -> Vec<Event> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let mut next = self.cell.get().clone();
        let events = match cmd {
            Command::OpenWindow { request } => {
                let id = request.id.clone();
                let created =
                    operations::open_or_focus(&mut next, request) == OpenOutcome::Created;
                vec![Event::WindowOpened { id, created }]
            }
            Command::CloseWindow { id } => {
                if operations::close_window(&mut next, &id) {
                    vec![Event::WindowClosed { id }]
                } else {
                    Vec::new()
                }
            }
            Command::FocusWindow { id } => match operations::focus_window(&mut next, &id) {
                Some(z_index) => vec![Event::WindowFocused { id, z_index }],
                None => Vec::new(),
            },
            Command::SetWindowBounds { id, position, size } => {
                if operations::set_window_bounds(&mut next, &id, position, size) {
                    vec![Event::WindowBoundsChanged { id }]
                } else {
                    Vec::new()
                }
            }
            Command::CompactZOrder => {
                if operations::compact_z_order(&mut next) {
                    vec![Event::ZOrderCompacted {
                        window_count: next.len(),
                    }]
                } else {
                    Vec::new()
                }
            }
        };

        if events.is_empty() {
            debug!(event = "core.state.dispatch_noop");
        } else {
            self.cell.replace(next);
            info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            );
        }

        events
    }
}
