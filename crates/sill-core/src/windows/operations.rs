//! Registry mutations.
//!
//! Pure functions over a mutable registry snapshot. All of them are
//! infallible: references to unknown windows degrade to no-ops. The return
//! values say what changed so the dispatch layer can emit events without
//! the operations knowing about them.

use tracing::{debug, info};

use super::placement;
use super::registry::{INITIAL_Z_INDEX, WindowRegistry};
use super::types::{OpenWindowRequest, Position, Size, WindowRecord};

/// What [`open_or_focus`] did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new record was created and opened.
    Created,
    /// An existing record was reopened and raised; geometry untouched.
    Refocused,
}

/// Open a window: create its record on first sight, raise it to the top of
/// the stack either way.
///
/// Matching is strictly by `id` - a request with an unseen id always
/// creates a new record, even when another window of the same `app_id`
/// exists. The `app_id` equality check mirrors the historical contract; it
/// can never reject a record the id lookup accepted since ids are unique.
///
/// Reopening keeps the stored `position`/`size`, so a window comes back
/// where the user left it. Creation takes `initial_position` when supplied
/// and a cascade position otherwise.
pub fn open_or_focus(registry: &mut WindowRegistry, request: OpenWindowRequest) -> OpenOutcome {
    let next_z = registry.next_z_index();

    let existing = registry
        .get(&request.id)
        .is_some_and(|w| w.app_id == request.app_id);

    if existing {
        if let Some(window) = registry.get_mut(&request.id) {
            window.is_open = true;
            window.is_minimized = false;
            window.z_index = next_z;
        }
        info!(
            event = "core.windows.window_reopened",
            id = %request.id,
            z_index = next_z
        );
        return OpenOutcome::Refocused;
    }

    let position = request
        .initial_position
        .unwrap_or_else(placement::cascade_position);
    let record = WindowRecord {
        id: request.id,
        app_id: request.app_id,
        title: request.title,
        position,
        size: request.initial_size,
        min_size: request.min_size,
        is_open: true,
        is_minimized: false,
        z_index: next_z,
    };
    info!(
        event = "core.windows.window_created",
        id = %record.id,
        app_id = %record.app_id,
        z_index = next_z
    );
    registry.insert(record);
    OpenOutcome::Created
}

/// Close a window in place.
///
/// Only `is_open` flips; geometry and stacking key are retained so a later
/// open restores the window where it was. Returns `false` (no-op) for
/// unknown ids.
pub fn close_window(registry: &mut WindowRegistry, id: &str) -> bool {
    match registry.get_mut(id) {
        Some(window) => {
            window.is_open = false;
            info!(event = "core.windows.window_closed", id = id);
            true
        }
        None => {
            debug!(event = "core.windows.close_unknown_id", id = id);
            false
        }
    }
}

/// Raise a window to the top of the stack.
///
/// Returns the newly assigned stacking key, or `None` when nothing
/// changed: unknown id, closed window, or already topmost. Skipping the
/// already-topmost write keeps a click on the focused window from
/// triggering a persistence cycle.
pub fn focus_window(registry: &mut WindowRegistry, id: &str) -> Option<u64> {
    let max_z = registry.next_z_index() - 1;

    let Some(window) = registry.get_mut(id) else {
        debug!(event = "core.windows.focus_unknown_id", id = id);
        return None;
    };
    if !window.is_open {
        debug!(event = "core.windows.focus_closed_window", id = id);
        return None;
    }
    if window.z_index >= max_z {
        return None;
    }

    window.z_index = max_z + 1;
    info!(
        event = "core.windows.window_focused",
        id = id,
        z_index = max_z + 1
    );
    Some(max_z + 1)
}

/// Replace a window's position and size after a move or resize gesture.
///
/// Stacking is untouched - a caller wanting raise-on-drag dispatches focus
/// separately. Returns `false` (no-op) for unknown ids.
pub fn set_window_bounds(
    registry: &mut WindowRegistry,
    id: &str,
    position: Position,
    size: Size,
) -> bool {
    match registry.get_mut(id) {
        Some(window) => {
            window.position = position;
            window.size = size;
            debug!(event = "core.windows.window_bounds_changed", id = id);
            true
        }
        None => {
            debug!(event = "core.windows.bounds_unknown_id", id = id);
            false
        }
    }
}

/// Renumber every record to a dense ascending run starting at
/// [`INITIAL_Z_INDEX`], preserving relative stacking.
///
/// The counter behind [`WindowRegistry::next_z_index`] scans closed
/// records too and therefore only ever grows; a long-lived shell can run
/// this between sessions to pull the values back down. Ties are broken by
/// id so the result is deterministic. Returns `false` when the registry
/// was already compact.
pub fn compact_z_order(registry: &mut WindowRegistry) -> bool {
    let mut order: Vec<(String, u64)> = registry
        .iter()
        .map(|w| (w.id.clone(), w.z_index))
        .collect();
    order.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    let mut changed = false;
    for (slot, (id, _)) in order.into_iter().enumerate() {
        let next = INITIAL_Z_INDEX + slot as u64;
        if let Some(window) = registry.get_mut(&id)
            && window.z_index != next
        {
            window.z_index = next;
            changed = true;
        }
    }

    if changed {
        info!(
            event = "core.windows.z_order_compacted",
            window_count = registry.len()
        );
    }
    changed
}
