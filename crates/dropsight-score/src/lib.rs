//! Heuristic criterion scoring and aggregation for dropsight.
//!
//! Produces the ten canonical criterion scores per product — either uniformly
//! at random (fallback mode) or pseudo-deterministically seeded from the
//! input links — and folds them into a single 0–100 opportunity score with a
//! canned insight tier. Deliberately not real market analysis: the scoring
//! function reproduces the source system's heuristic behavior exactly.

pub mod aggregate;
pub mod generator;

pub use aggregate::{compute_total_score, insight_for_total, DEFAULT_TOTAL_SCORE};
pub use generator::{random_scores, seeded_scores};
