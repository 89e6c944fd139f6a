//! sill-core: window registry and shell state for Sill
//!
//! This library provides the state layer for a desktop-style shell: a
//! persisted registry of windows (open and closed), their geometry, and
//! their stacking order. It is consumed by a rendering layer, which is out
//! of scope here - there is no drawing, gesture handling, or UI surface in
//! this crate.
//!
//! # Main Entry Points
//!
//! - [`state::RegistryStore`] - dispatch window commands, query open windows
//! - [`windows`] - the data model and pure registry operations
//! - [`storage`] - feature-keyed state persistence
//! - [`config`] - configuration management

pub mod config;
pub mod errors;
pub mod logging;
pub mod state;
pub mod storage;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use config::Config;
pub use state::{Command, Event, RegistryStore, StateCell, StorageMode, Store, SubscriberId};
pub use windows::{OpenOutcome, OpenWindowRequest, Position, Size, WindowRecord, WindowRegistry};

// Re-export logging initialization
pub use logging::init_logging;
