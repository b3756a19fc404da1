//! Dice session for Namewürfel.
//!
//! A `DiceSession` owns the settings store, the current settings, the roll
//! history and the roll engine. Rolls complete after a short delay; while one
//! is pending further roll requests are rejected. Settings are edited through
//! a `SettingsForm` and the dice are presented as per-slot `DieView`s.

pub mod config;
pub mod error;
pub mod form;
pub mod session;
pub mod view;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use form::SettingsForm;
pub use session::DiceSession;
pub use view::{DieFace, DieView};
