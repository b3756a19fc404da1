//! Per-slot die view models.

use std::fmt;

/// What a die slot currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DieFace {
    /// Never rolled.
    #[default]
    Placeholder,
    /// A roll is pending for this slot.
    Rolling,
    /// The name of the last face rolled.
    Named(String),
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder | Self::Rolling => write!(f, "?"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// One die slot as presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DieView {
    /// Slot index (0-based).
    pub position: usize,
    /// Whether the slot is among the active dice.
    pub visible: bool,
    /// What the slot shows.
    pub face: DieFace,
}
