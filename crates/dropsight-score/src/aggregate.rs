//! Total-score aggregation and insight tiering.

use dropsight_core::CriterionScore;

/// Total score used when no criterion scores are available. A documented
/// neutral default rather than zero, so missing data is not penalized.
pub const DEFAULT_TOTAL_SCORE: u8 = 50;

/// Insight shown for totals of 80 and above.
pub const INSIGHT_EXCELLENT: &str =
    "This product has excellent potential for the Indian market with strong trend status and market fit.";

/// Insight shown for totals in `[60, 79]`.
pub const INSIGHT_MODERATE: &str =
    "Good product with moderate potential. Consider optimizing ad creative and targeting.";

/// Insight shown for totals below 60.
pub const INSIGHT_LIMITED: &str =
    "Limited potential for the Indian market. Consider alternatives with better market fit and higher urgency scores.";

/// Computes the 0–100 opportunity score from a set of criterion scores.
///
/// Empty input returns [`DEFAULT_TOTAL_SCORE`]. Otherwise the result is
/// `floor(average * 10)`, capped at 100. Since each criterion is in `[1, 10]`
/// the natural range is `[10, 100]`; the cap is a safety bound, not a normal
/// code path.
#[must_use]
pub fn compute_total_score(scores: &[CriterionScore]) -> u8 {
    if scores.is_empty() {
        return DEFAULT_TOTAL_SCORE;
    }

    let sum: u32 = scores.iter().map(|s| u32::from(s.score)).sum();
    let count = u32::try_from(scores.len()).unwrap_or(u32::MAX);
    // floor((sum / count) * 10) over the reals equals integer (sum * 10) / count.
    let total = (sum * 10) / count;
    u8::try_from(total.min(100)).unwrap_or(100)
}

/// Maps a total score to its fixed insight text. Tier lower bounds are
/// inclusive: 80 is "excellent", 60 is "moderate", 59 is "limited".
#[must_use]
pub fn insight_for_total(total: u8) -> &'static str {
    if total >= 80 {
        INSIGHT_EXCELLENT
    } else if total >= 60 {
        INSIGHT_MODERATE
    } else {
        INSIGHT_LIMITED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_of(values: &[u8]) -> Vec<CriterionScore> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| CriterionScore::new(format!("c{i}"), *v))
            .collect()
    }

    #[test]
    fn empty_scores_default_to_fifty() {
        assert_eq!(compute_total_score(&[]), DEFAULT_TOTAL_SCORE);
    }

    #[test]
    fn average_times_ten_floored() {
        // floor((15 / 3) * 10) = 50
        assert_eq!(compute_total_score(&scores_of(&[3, 5, 7])), 50);
        // floor((7 / 3) * 10) = 23
        assert_eq!(compute_total_score(&scores_of(&[1, 2, 4])), 23);
    }

    #[test]
    fn all_tens_hit_the_cap_exactly() {
        assert_eq!(compute_total_score(&scores_of(&[10; 10])), 100);
    }

    #[test]
    fn all_ones_score_ten() {
        assert_eq!(compute_total_score(&scores_of(&[1; 10])), 10);
    }

    #[test]
    fn tier_boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(insight_for_total(59), INSIGHT_LIMITED);
        assert_eq!(insight_for_total(60), INSIGHT_MODERATE);
        assert_eq!(insight_for_total(79), INSIGHT_MODERATE);
        assert_eq!(insight_for_total(80), INSIGHT_EXCELLENT);
        assert_eq!(insight_for_total(100), INSIGHT_EXCELLENT);
        assert_eq!(insight_for_total(0), INSIGHT_LIMITED);
    }
}
