use super::events::Event;
use super::types::Command;

/// Trait for dispatching window registry commands.
///
/// Decouples command definitions from their execution so interfaces (the
/// compositor shell, tests, a session replayer) can wrap execution with
/// their own concerns.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received, each running to
///   completion before the next - the execution model is single-threaded
///   with no suspension points, so no cross-command locking exists.
/// - **Atomicity**: One dispatch is one read-modify-write against the
///   registry; no caller can observe a partially applied command.
/// - **Infallibility**: There is no error channel. References to unknown
///   windows degrade to no-ops and return an empty event vec; persistence
///   failures are logged by the write path without affecting the
///   in-memory result.
/// - **Events**: A dispatch that changed state returns the events
///   describing what changed, in order. Callers react to these instead of
///   polling or re-reading disk.
pub trait Store {
    fn dispatch(&mut self, cmd: Command) -> Vec<Event>;
}
