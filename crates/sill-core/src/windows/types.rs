use serde::{Deserialize, Serialize};

/// Screen-space coordinates of a window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Pixel dimensions of a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// One window instance, open or previously open.
///
/// Closing a window never deletes its record: geometry and stacking key
/// survive so a later open restores the window where the user left it,
/// including across process restarts via the persisted registry blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    /// Unique key, stable for the lifetime of the window instance.
    pub id: String,

    /// Content type identifier (e.g. "notes", "timer"). Not unique -
    /// several windows may share one.
    pub app_id: String,

    pub title: String,

    pub position: Position,

    pub size: Size,

    /// Floor on `size`. Data only: the resize gesture layer (out of scope
    /// here) enforces it; no registry operation clamps against it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<Size>,

    /// Whether the window is currently rendered.
    pub is_open: bool,

    /// Reserved for minimize support. Open-or-focus clears it; nothing
    /// reads it yet.
    ///
    /// `#[serde(default)]` so blobs written before the field existed still
    /// deserialize.
    #[serde(default)]
    pub is_minimized: bool,

    /// Stacking key; higher draws on top.
    pub z_index: u64,
}

/// Descriptor for open-or-focus: everything needed to create a window,
/// nothing the registry derives itself (open flag, stacking key, live
/// geometry).
///
/// `initial_position` and `initial_size` only apply when the request
/// creates a record; reopening an existing id keeps its stored geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub id: String,
    pub app_id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<Size>,

    /// Spawn position. `None` picks a cascade position (see
    /// [`crate::windows::placement`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_position: Option<Position>,

    pub initial_size: Size,
}

impl OpenWindowRequest {
    /// Create a request with a freshly generated window id.
    pub fn new(app_id: String, title: String, initial_size: Size) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            app_id,
            title,
            min_size: None,
            initial_position: None,
            initial_size,
        }
    }

    /// Create a request for a known window id (the reopen path).
    pub fn with_id(id: String, app_id: String, title: String, initial_size: Size) -> Self {
        Self {
            id,
            app_id,
            title,
            min_size: None,
            initial_position: None,
            initial_size,
        }
    }

    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn with_initial_position(mut self, position: Position) -> Self {
        self.initial_position = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> WindowRecord {
        WindowRecord {
            id: "win-1".to_string(),
            app_id: "notes".to_string(),
            title: "Notes".to_string(),
            position: Position { x: 80.0, y: 120.0 },
            size: Size {
                width: 400.0,
                height: 300.0,
            },
            min_size: Some(Size {
                width: 200.0,
                height: 150.0,
            }),
            is_open: true,
            is_minimized: false,
            z_index: 1000,
        }
    }

    #[test]
    fn test_window_record_serde_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string_pretty(&record).unwrap();
        let loaded: WindowRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_window_record_backward_compatibility() {
        // Blobs written before min_size/is_minimized existed must still load
        let json = r#"{
            "id": "win-1",
            "app_id": "notes",
            "title": "Notes",
            "position": { "x": 80.0, "y": 120.0 },
            "size": { "width": 400.0, "height": 300.0 },
            "is_open": true,
            "z_index": 1000
        }"#;

        let record: WindowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.min_size, None);
        assert!(!record.is_minimized);
        assert_eq!(record.z_index, 1000);
    }

    #[test]
    fn test_window_record_omits_absent_min_size() {
        let record = WindowRecord {
            min_size: None,
            ..sample_record()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("min_size"));
    }

    #[test]
    fn test_open_window_request_generates_unique_ids() {
        let size = Size {
            width: 400.0,
            height: 300.0,
        };
        let a = OpenWindowRequest::new("notes".to_string(), "Notes".to_string(), size);
        let b = OpenWindowRequest::new("notes".to_string(), "Notes".to_string(), size);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_open_window_request_with_id() {
        let request = OpenWindowRequest::with_id(
            "win-7".to_string(),
            "timer".to_string(),
            "Timer".to_string(),
            Size {
                width: 200.0,
                height: 200.0,
            },
        );
        assert_eq!(request.id, "win-7");
        assert_eq!(request.min_size, None);
        assert_eq!(request.initial_position, None);
    }

    #[test]
    fn test_open_window_request_builders() {
        let request = OpenWindowRequest::new(
            "notes".to_string(),
            "Notes".to_string(),
            Size {
                width: 400.0,
                height: 300.0,
            },
        )
        .with_min_size(Size {
            width: 100.0,
            height: 100.0,
        })
        .with_initial_position(Position { x: 10.0, y: 20.0 });

        assert_eq!(
            request.min_size,
            Some(Size {
                width: 100.0,
                height: 100.0
            })
        );
        assert_eq!(
            request.initial_position,
            Some(Position { x: 10.0, y: 20.0 })
        );
    }

    #[test]
    fn test_open_window_request_serde_roundtrip() {
        let request = OpenWindowRequest::with_id(
            "win-1".to_string(),
            "notes".to_string(),
            "Notes".to_string(),
            Size {
                width: 400.0,
                height: 300.0,
            },
        )
        .with_initial_position(Position { x: 60.0, y: 60.0 });

        let json = serde_json::to_string(&request).unwrap();
        let loaded: OpenWindowRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, request);
    }
}
