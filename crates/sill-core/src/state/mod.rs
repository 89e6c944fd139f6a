//! Reactive state layer.
//!
//! The registry lives in a [`cell::RegistryCell`]: one write path,
//! write-through persistence, subscriber notification. Commands are
//! dispatched through the [`store::Store`] trait;
//! [`dispatch::RegistryStore`] is the default implementation and the only
//! owner of the registry.

pub mod cell;
pub mod dispatch;
pub mod events;
pub mod store;
pub mod types;

pub use cell::{RegistryCell, StateCell, StorageMode, SubscriberId, WINDOWS_FEATURE_KEY};
pub use dispatch::RegistryStore;
pub use events::Event;
pub use store::Store;
pub use types::Command;
