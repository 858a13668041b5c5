//! gsmon-settings: the persisted configuration for the gsocket monitor.
//!
//! A single flat [`Settings`] record is loaded from (and created at) a
//! fixed JSON path. Settings are immutable for the life of a run; the only
//! reload mechanism is a process restart.

pub mod error;
pub mod record;
pub mod store;

pub use error::{SettingsError, SettingsResult};
pub use record::Settings;
pub use store::SettingsStore;
