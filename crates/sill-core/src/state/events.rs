use serde::{Deserialize, Serialize};

/// All state changes that can result from a dispatched command.
///
/// Each variant describes _what happened_, not what should happen. A no-op
/// dispatch (unknown id, focusing the topmost window) produces no events
/// at all - there is no failure variant because the registry has no error
/// channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A window was opened; `created` distinguishes a brand-new record
    /// from a reopened one.
    WindowOpened { id: String, created: bool },
    /// A window was closed (record retained).
    WindowClosed { id: String },
    /// A window was raised to the top with a fresh stacking key.
    WindowFocused { id: String, z_index: u64 },
    /// A window's position and size were replaced.
    WindowBoundsChanged { id: String },
    /// Stacking keys were renumbered into a dense run.
    ZOrderCompacted { window_count: usize },
}
