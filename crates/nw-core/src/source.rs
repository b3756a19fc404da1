//! Random face sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of faces on every die.
pub const FACES: u32 = 6;

/// Produces one die face per call.
pub trait RollSource {
    /// Draw the next face, expected in `1..=FACES`.
    fn next_face(&mut self) -> u32;
}

impl<R: RollSource + ?Sized> RollSource for Box<R> {
    fn next_face(&mut self) -> u32 {
        (**self).next_face()
    }
}

/// Uniform faces from a standard PRNG.
#[derive(Debug, Clone)]
pub struct StdRollSource {
    rng: StdRng,
}

impl StdRollSource {
    /// A reproducible source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A source seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RollSource for StdRollSource {
    fn next_face(&mut self) -> u32 {
        self.rng.random_range(1..=FACES)
    }
}

/// Replays a fixed list of faces, cycling when it runs out.
///
/// An empty script always yields 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedRolls {
    /// Create a source that replays `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl RollSource for ScriptedRolls {
    fn next_face(&mut self) -> u32 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
