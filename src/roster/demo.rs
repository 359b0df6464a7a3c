use rand::Rng;
use tracing::info;

use super::{Entry, Roster};

pub const DEMO_FILMS: [&str; 10] = [
    "Oppenheimer",
    "Killers of the Flower Moon",
    "Poor Things",
    "The Holdovers",
    "Barbie",
    "Past Lives",
    "Anatomy of a Fall",
    "American Fiction",
    "The Zone of Interest",
    "Maestro",
];

const DEMO_MIN_SCORE: f64 = 10.0;
const DEMO_MAX_SCORE: f64 = 20.0;

/// Uniform score in [10, 20] rounded to one decimal.
pub fn random_demo_score<R: Rng>(rng: &mut R) -> f64 {
    let raw: f64 = rng.random_range(DEMO_MIN_SCORE..=DEMO_MAX_SCORE);
    (raw * 10.0).round() / 10.0
}

impl Roster {
    /// Replaces the roster with the demo nominees and random scores.
    pub fn populate_demo<R: Rng>(&mut self, rng: &mut R) {
        self.entries = DEMO_FILMS
            .iter()
            .map(|name| Entry::new(*name, random_demo_score(rng)))
            .collect();
        info!(count = self.entries.len(), "Demo roster generated");
    }
}
