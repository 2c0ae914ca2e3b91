//! Random display sampling.
//!
//! Shuffles the full input, keeps the first `target` records, then orders the
//! survivors by their string id. Inputs shorter than `target` are returned in
//! full (still shuffled, then sorted).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::DISPLAY_SAMPLE_SIZE;
use crate::models::EnrichedCard;

/// Sample [`DISPLAY_SAMPLE_SIZE`] cards using a freshly seeded RNG.
pub fn sample_for_display(cards: Vec<EnrichedCard>) -> Vec<EnrichedCard> {
    let mut rng = StdRng::from_entropy();
    sample_with_rng(cards, DISPLAY_SAMPLE_SIZE, &mut rng)
}

/// Sample up to `target` cards with the caller's RNG.
///
/// The result holds `min(target, cards.len())` records, stably sorted in
/// ascending lexical order of `id` (so `"100"` sorts before `"42"`).
pub fn sample_with_rng<R: Rng + ?Sized>(
    mut cards: Vec<EnrichedCard>,
    target: usize,
    rng: &mut R,
) -> Vec<EnrichedCard> {
    cards.shuffle(rng);
    cards.truncate(target);
    cards.sort_by(|a, b| a.id.cmp(&b.id));
    cards
}
