//! Criterion score generation.

use dropsight_core::{CriterionScore, CRITERIA};
use rand::Rng;

/// Per-criterion offsets applied to the seed, in canonical criterion order.
/// Fixed constants inherited from the source scoring function; changing them
/// changes every seeded score.
const OFFSETS: [usize; 10] = [7, 13, 19, 31, 37, 41, 53, 61, 67, 73];

/// Generates ten scores drawn uniformly from `[1, 10]`, independent across
/// criteria and calls.
///
/// The RNG is injected so callers can pass `rand::rng()` in production and a
/// seeded `StdRng` in tests to assert exact fallback scores.
pub fn random_scores<R: Rng + ?Sized>(rng: &mut R) -> Vec<CriterionScore> {
    CRITERIA
        .iter()
        .map(|name| CriterionScore::new(*name, rng.random_range(1..=10)))
        .collect()
}

/// Generates ten pseudo-deterministic scores from the input identifiers.
///
/// `seed = (len(video_link) * len(product_link) + index) % 100`, then each
/// criterion `i` scores `clamp(((seed + offset_i) % 10) + 1, 1, 10)`.
/// Bit-reproducible: the same inputs always yield the same ten scores.
/// Never fails, including for empty strings.
#[must_use]
pub fn seeded_scores(video_link: &str, product_link: &str, index: usize) -> Vec<CriterionScore> {
    // Wrapping ops keep this total even for absurd input lengths.
    let seed = video_link
        .len()
        .wrapping_mul(product_link.len())
        .wrapping_add(index)
        % 100;

    CRITERIA
        .iter()
        .zip(OFFSETS)
        .map(|(name, offset)| {
            let score = ((seed + offset) % 10) + 1;
            CriterionScore::new(*name, u8::try_from(score.clamp(1, 10)).unwrap_or(10))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn random_scores_cover_all_criteria_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let scores = random_scores(&mut rng);
        assert_eq!(scores.len(), 10);
        for (score, name) in scores.iter().zip(CRITERIA) {
            assert_eq!(score.name, name);
        }
    }

    #[test]
    fn random_scores_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            for score in random_scores(&mut rng) {
                assert!((1..=10).contains(&score.score), "out of range: {score:?}");
            }
        }
    }

    #[test]
    fn random_scores_reproducible_with_fixed_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(random_scores(&mut a), random_scores(&mut b));
    }

    #[test]
    fn seeded_scores_are_deterministic() {
        let a = seeded_scores("https://drive.google.com/folder/abc", "https://shop.example/p/1", 3);
        let b = seeded_scores("https://drive.google.com/folder/abc", "https://shop.example/p/1", 3);
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_scores_match_hand_computed_values() {
        // len("abc") * len("de") + 4 = 10; ((10 + offset) % 10) + 1 per criterion.
        let scores = seeded_scores("abc", "de", 4);
        let expected = [8, 4, 10, 2, 8, 2, 4, 2, 8, 4];
        for (score, want) in scores.iter().zip(expected) {
            assert_eq!(score.score, want, "criterion {}", score.name);
        }
    }

    #[test]
    fn seeded_scores_accept_empty_strings() {
        let scores = seeded_scores("", "", 0);
        assert_eq!(scores.len(), 10);
        for score in &scores {
            assert!((1..=10).contains(&score.score));
        }
    }

    #[test]
    fn seeded_scores_vary_with_index() {
        let a = seeded_scores("abc", "de", 0);
        let b = seeded_scores("abc", "de", 1);
        assert_ne!(a, b);
    }
}
