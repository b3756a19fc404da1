//! Rolling the active dice and naming the results.

use tracing::warn;

use crate::settings::Settings;
use crate::source::RollSource;

/// The result of rolling a single die.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    /// Slot of the die among the active dice (0-based).
    pub position: usize,
    /// The face rolled (1 to 6).
    pub value: u32,
    /// The face's name at the time of the roll.
    pub display_name: String,
}

/// Every die rolled by one roll action, in position order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollBatch {
    results: Vec<RollResult>,
}

impl RollBatch {
    /// The individual results.
    pub fn results(&self) -> &[RollResult] {
        &self.results
    }

    /// The rolled faces.
    pub fn values(&self) -> Vec<u32> {
        self.results.iter().map(|r| r.value).collect()
    }

    /// The display names, one per die.
    pub fn names(&self) -> Vec<String> {
        self.results.iter().map(|r| r.display_name.clone()).collect()
    }

    /// Number of dice rolled.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no dice were rolled.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl std::fmt::Display for RollBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names().join(", "))
    }
}

/// Rolls one die per active position and names each face.
#[derive(Debug, Clone)]
pub struct RollEngine<R> {
    source: R,
}

impl<R: RollSource> RollEngine<R> {
    /// Create an engine drawing faces from `source`.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Roll the dice active in `settings`.
    ///
    /// A face the settings cannot name is shown as its number and logged;
    /// the roll itself never fails.
    pub fn roll(&mut self, settings: &Settings) -> RollBatch {
        let results = (0..settings.active_die_count())
            .map(|position| {
                let value = self.source.next_face();
                let display_name = match settings.face_name(value) {
                    Some(name) => name.to_string(),
                    None => {
                        warn!("could not find name for result {value}, displaying number");
                        value.to_string()
                    }
                };
                RollResult {
                    position,
                    value,
                    display_name,
                }
            })
            .collect();
        RollBatch { results }
    }
}
