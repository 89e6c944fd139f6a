use serde::{Deserialize, Serialize};

use crate::windows::types::{OpenWindowRequest, Position, Size};

/// All registry operations that can be dispatched through the store.
///
/// Each variant captures the parameters needed to execute the operation.
/// Commands use owned, serde-friendly types so they can be stored and sent
/// across boundaries (session replay, test fixtures built from JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Open a window: create its record on first sight, raise it to the
    /// top of the stack either way.
    OpenWindow { request: OpenWindowRequest },
    /// Close a window, retaining its record for a later reopen.
    CloseWindow { id: String },
    /// Raise an open window to the top of the stack.
    FocusWindow { id: String },
    /// Replace a window's position and size after a move/resize gesture.
    /// Does not raise the window; dispatch `FocusWindow` separately.
    SetWindowBounds {
        id: String,
        position: Position,
        size: Size,
    },
    /// Renumber stacking keys into a dense ascending run. Maintenance
    /// command; never triggered implicitly.
    CompactZOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_commands() -> Vec<Command> {
        vec![
            Command::OpenWindow {
                request: OpenWindowRequest::with_id(
                    "win-1".to_string(),
                    "notes".to_string(),
                    "Notes".to_string(),
                    Size {
                        width: 400.0,
                        height: 300.0,
                    },
                ),
            },
            Command::CloseWindow {
                id: "win-1".to_string(),
            },
            Command::FocusWindow {
                id: "win-1".to_string(),
            },
            Command::SetWindowBounds {
                id: "win-1".to_string(),
                position: Position { x: 10.0, y: 20.0 },
                size: Size {
                    width: 640.0,
                    height: 480.0,
                },
            },
            Command::CompactZOrder,
        ]
    }

    #[test]
    fn test_command_serde_roundtrip() {
        for cmd in all_commands() {
            let json = serde_json::to_string(&cmd).unwrap();
            let roundtripped: Command = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, roundtripped);
        }
    }

    #[test]
    fn test_open_window_command_carries_optional_fields() {
        let cmd = Command::OpenWindow {
            request: OpenWindowRequest::with_id(
                "win-1".to_string(),
                "notes".to_string(),
                "Notes".to_string(),
                Size {
                    width: 400.0,
                    height: 300.0,
                },
            )
            .with_initial_position(Position { x: 60.0, y: 60.0 }),
        };

        let json = serde_json::to_string(&cmd).unwrap();
        let roundtripped: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, roundtripped);
    }
}
