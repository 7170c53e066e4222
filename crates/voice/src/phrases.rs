//! Example utterances for prompting users.

use rand::Rng;
use rand::seq::SliceRandom;

pub const SAMPLE_PHRASES: &[&str] = &[
    "add 3 tomatoes",
    "remove 2 onions",
    "set milk to 2 litres",
    "add 500 g ginger",
    "add 6 eggs and remove 1 bottle olive oil",
    "set rice to 5 kg",
    "remove 250 ml cream",
    "add a loaf of bread",
];

/// Uniformly pick one of [`SAMPLE_PHRASES`].
pub fn random_sample_phrase<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SAMPLE_PHRASES.choose(rng).copied().unwrap_or(SAMPLE_PHRASES[0])
}
