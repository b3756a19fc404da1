//! Die count and face-name settings.
//!
//! A [`Settings`] value always holds between 1 and [`MAX_DICE`] active dice
//! and exactly six non-blank face names. Every way of building one repairs
//! its input rather than rejecting it.

pub mod repair;
pub mod store;

use serde::Serialize;

/// Most dice that can be active at once, and the number of faces named.
pub const MAX_DICE: usize = 6;

/// Active die count used when nothing usable is stored.
pub const DEFAULT_DIE_COUNT: usize = 3;

/// The fallback name for the face at 0-based `index`.
pub fn default_face_name(index: usize) -> String {
    format!("Die {}", index + 1)
}

/// Active die count plus the display name of each face.
///
/// Serializes to the stored blob layout: `{"numDice": 3, "diceNames": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(rename = "numDice")]
    active_die_count: usize,
    #[serde(rename = "diceNames")]
    face_names: [String; MAX_DICE],
}

impl Settings {
    /// Build settings, clamping the count into `1..=MAX_DICE` and replacing
    /// blank names with their defaults. Names are trimmed.
    pub fn new(active_die_count: usize, face_names: [String; MAX_DICE]) -> Self {
        let mut index = 0;
        let face_names = face_names.map(|name| {
            let trimmed = name.trim();
            let name = if trimmed.is_empty() {
                default_face_name(index)
            } else {
                trimmed.to_string()
            };
            index += 1;
            name
        });
        Self {
            active_die_count: active_die_count.clamp(1, MAX_DICE),
            face_names,
        }
    }

    /// Repair settings from a stored JSON blob. See [`repair::decode`].
    pub fn from_json(raw: &str) -> Self {
        repair::decode(raw)
    }

    /// Number of dice taking part in each roll.
    pub fn active_die_count(&self) -> usize {
        self.active_die_count
    }

    /// All six face names, index `i` naming face `i + 1`.
    pub fn face_names(&self) -> &[String; MAX_DICE] {
        &self.face_names
    }

    /// The name shown for a rolled `face` (1-based), if it is a valid face.
    pub fn face_name(&self, face: u32) -> Option<&str> {
        let index = usize::try_from(face).ok()?.checked_sub(1)?;
        self.face_names.get(index).map(String::as_str)
    }

    /// Encode as the stored JSON blob.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_DIE_COUNT, Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: [&str; MAX_DICE]) -> [String; MAX_DICE] {
        raw.map(str::to_string)
    }

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.active_die_count(), 3);
        assert_eq!(
            s.face_names(),
            &names(["Die 1", "Die 2", "Die 3", "Die 4", "Die 5", "Die 6"])
        );
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(Settings::new(0, Default::default()).active_die_count(), 1);
        assert_eq!(Settings::new(9, Default::default()).active_die_count(), 6);
        assert_eq!(Settings::new(4, Default::default()).active_die_count(), 4);
    }

    #[test]
    fn blank_names_become_defaults() {
        let s = Settings::new(2, names(["", "Two", "  ", "Four", "", "Six"]));
        assert_eq!(
            s.face_names(),
            &names(["Die 1", "Two", "Die 3", "Four", "Die 5", "Six"])
        );
    }

    #[test]
    fn names_are_trimmed() {
        let s = Settings::new(1, names([" Skull ", "a", "b", "c", "d", "e"]));
        assert_eq!(s.face_names()[0], "Skull");
    }

    #[test]
    fn face_name_lookup() {
        let s = Settings::default();
        assert_eq!(s.face_name(1), Some("Die 1"));
        assert_eq!(s.face_name(6), Some("Die 6"));
        assert_eq!(s.face_name(0), None);
        assert_eq!(s.face_name(7), None);
    }

    #[test]
    fn json_layout() {
        let json = Settings::new(2, names(["a", "b", "c", "d", "e", "f"]))
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            r#"{"numDice":2,"diceNames":["a","b","c","d","e","f"]}"#
        );
    }

    #[test]
    fn json_round_trip() {
        let s = Settings::new(5, names(["Sun", "Moon", "", "Star", "Comet", "Void"]));
        let back = Settings::from_json(&s.to_json().unwrap());
        assert_eq!(back, s);
    }
}
