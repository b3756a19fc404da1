//! Core model for Namewürfel.
//!
//! Six-sided dice whose faces carry user-assigned names. This crate owns the
//! persisted settings (active die count plus six face names) and the rules that
//! repair malformed stored data, the roll engine that turns random faces into
//! named results, and the bounded, most-recent-first roll history.

pub mod error;
pub mod history;
pub mod roll;
pub mod settings;
pub mod source;

pub use error::{CoreError, CoreResult, StorageError};
pub use history::{HISTORY_LIMIT, HistoryEntry, HistoryLog};
pub use roll::{RollBatch, RollEngine, RollResult};
pub use settings::store::{DirStore, KeyValueStore, MemoryStore, SETTINGS_KEY, SettingsStore};
pub use settings::{DEFAULT_DIE_COUNT, MAX_DICE, Settings, default_face_name};
pub use source::{FACES, RollSource, ScriptedRolls, StdRollSource};
