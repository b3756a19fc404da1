//! The settings-edit form.

use nw_core::{MAX_DICE, Settings};

use crate::error::{SessionError, SessionResult};

/// Longest face name the form accepts, in characters.
pub const MAX_NAME_LEN: usize = 15;

/// Editable copy of the settings.
///
/// Populated from the current settings, edited field by field, then
/// submitted as a whole. Blank names become `"Die {n}"` on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    num_dice: usize,
    names: [String; MAX_DICE],
}

impl SettingsForm {
    /// Fill the form from `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            num_dice: settings.active_die_count(),
            names: settings.face_names().clone(),
        }
    }

    /// The selected die count.
    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    /// The name fields as entered.
    pub fn names(&self) -> &[String; MAX_DICE] {
        &self.names
    }

    /// Select how many dice are active.
    pub fn set_num_dice(&mut self, count: usize) -> SessionResult<()> {
        if !(1..=MAX_DICE).contains(&count) {
            return Err(SessionError::InvalidCount(count.to_string()));
        }
        self.num_dice = count;
        Ok(())
    }

    /// Enter the name for the face at 0-based `position`.
    ///
    /// Input longer than [`MAX_NAME_LEN`] characters is cut off.
    pub fn set_name(&mut self, position: usize, name: &str) -> SessionResult<()> {
        let field = self
            .names
            .get_mut(position)
            .ok_or_else(|| SessionError::InvalidPosition(position.saturating_add(1).to_string()))?;
        *field = name.chars().take(MAX_NAME_LEN).collect();
        Ok(())
    }

    /// Turn the form into settings, filling blank names with defaults.
    pub fn submit(self) -> Settings {
        Settings::new(self.num_dice, self.names)
    }
}
