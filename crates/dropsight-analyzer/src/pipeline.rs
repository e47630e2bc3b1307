//! Batch analysis orchestration.
//!
//! `analyze_one` settles exactly one product and never fails: service errors
//! and transport errors both degrade to estimated scores with a fixed insight
//! string. `analyze_all` runs the whole stub list in consecutive chunks,
//! strictly sequential between chunks and fully concurrent within one,
//! placing each result by its precomputed absolute index so output order
//! always equals input order regardless of completion timing.

use futures::future::join_all;
use thiserror::Error;

use dropsight_core::{AnalyzedProduct, CriterionScore, ProductStub};
use dropsight_score::{compute_total_score, insight_for_total, random_scores};

use crate::backend::AnalysisBackend;
use crate::error::AnalyzerError;
use crate::types::AnalysisRequest;

/// Insight used when the service reports a structured error for one product.
pub const FALLBACK_INSIGHT_SERVICE: &str =
    "Could not analyze video content. Using estimated scores.";

/// Insight used when the analysis call itself fails (network, timeout, parse).
pub const FALLBACK_INSIGHT_TRANSPORT: &str = "Error analyzing video. Using estimated scores.";

/// Insight used when the batch loop fails structurally and every stub is
/// coerced to estimated scores.
pub const FALLBACK_INSIGHT_PIPELINE: &str = "Error in analysis pipeline. Using estimated scores.";

/// Source of fallback criterion scores.
///
/// Abstracted so tests can supply fixed scores and assert exact fallback
/// output; production uses [`ThreadRngScores`].
pub trait ScoreSource {
    fn fallback_scores(&self) -> Vec<CriterionScore>;
}

/// Draws fallback scores uniformly from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngScores;

impl ScoreSource for ThreadRngScores {
    fn fallback_scores(&self) -> Vec<CriterionScore> {
        random_scores(&mut rand::rng())
    }
}

/// Structural failures of the batch loop. Per-item failures never produce
/// these; they are recovered inside [`analyze_one`].
#[derive(Debug, Error)]
enum PipelineError {
    #[error("result index {index} out of bounds for {len} stubs")]
    Placement { index: usize, len: usize },

    #[error("no result settled for stub index {index}")]
    MissingResult { index: usize },
}

/// Analyzes a single product. Never fails.
///
/// - Service success: the returned scores and insight are used as-is (an
///   empty insight is replaced by the tier text so records always explain
///   themselves).
/// - Structured service error: estimated scores, [`FALLBACK_INSIGHT_SERVICE`].
/// - Any other failure: estimated scores, [`FALLBACK_INSIGHT_TRANSPORT`].
///
/// The total score is always computed from whichever scores were settled on,
/// and the returned record is always `Complete`.
pub async fn analyze_one<B, S>(
    backend: &B,
    score_source: &S,
    stub: &ProductStub,
    index: usize,
) -> AnalyzedProduct
where
    B: AnalysisBackend,
    S: ScoreSource,
{
    let request = AnalysisRequest {
        video_url: stub.video_creative_folder_link.clone(),
        product_url: stub.product_url().to_owned(),
        product_index: index,
    };

    match backend.analyze(request).await {
        Ok(response) => {
            let total = compute_total_score(&response.scores);
            let insights = if response.insights.trim().is_empty() {
                insight_for_total(total).to_owned()
            } else {
                response.insights
            };
            AnalyzedProduct::from_stub(stub, response.scores, total, insights)
        }
        Err(AnalyzerError::Service(message)) => {
            tracing::warn!(
                product = %stub.product_name,
                index,
                error = %message,
                "analysis service reported an error, using estimated scores"
            );
            estimated(score_source, stub, FALLBACK_INSIGHT_SERVICE)
        }
        Err(e) => {
            tracing::warn!(
                product = %stub.product_name,
                index,
                error = %e,
                "analysis call failed, using estimated scores"
            );
            estimated(score_source, stub, FALLBACK_INSIGHT_TRANSPORT)
        }
    }
}

/// Analyzes all stubs in consecutive chunks of `batch_size`.
///
/// Chunk `k + 1` does not start until every call in chunk `k` has settled;
/// within a chunk all calls run concurrently. The output has the same length
/// and index alignment as the input.
///
/// If the batch loop itself fails structurally, every stub is coerced to a
/// `Complete` record with estimated scores and [`FALLBACK_INSIGHT_PIPELINE`];
/// the caller always receives a full result set.
pub async fn analyze_all<B, S>(
    backend: &B,
    score_source: &S,
    stubs: &[ProductStub],
    batch_size: usize,
) -> Vec<AnalyzedProduct>
where
    B: AnalysisBackend,
    S: ScoreSource,
{
    match run_batches(backend, score_source, stubs, batch_size).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "batch analysis failed structurally, estimating all scores");
            pipeline_fallback(score_source, stubs)
        }
    }
}

async fn run_batches<B, S>(
    backend: &B,
    score_source: &S,
    stubs: &[ProductStub],
    batch_size: usize,
) -> Result<Vec<AnalyzedProduct>, PipelineError>
where
    B: AnalysisBackend,
    S: ScoreSource,
{
    let batch_size = batch_size.max(1);
    let mut slots: Vec<Option<AnalyzedProduct>> = (0..stubs.len()).map(|_| None).collect();

    for (chunk_number, chunk) in stubs.chunks(batch_size).enumerate() {
        let chunk_start = chunk_number * batch_size;

        tracing::debug!(
            chunk = chunk_number,
            size = chunk.len(),
            "analyzing product batch"
        );

        // Each task owns exactly one absolute index, so placement below has
        // no contention and completion order cannot reorder results.
        let results = join_all(chunk.iter().enumerate().map(|(offset, stub)| {
            let index = chunk_start + offset;
            async move { (index, analyze_one(backend, score_source, stub, index).await) }
        }))
        .await;

        for (index, record) in results {
            let len = slots.len();
            let slot = slots
                .get_mut(index)
                .ok_or(PipelineError::Placement { index, len })?;
            *slot = Some(record);
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(PipelineError::MissingResult { index }))
        .collect()
}

/// Coerces every stub to a `Complete` record with estimated scores when
/// batching fails structurally.
fn pipeline_fallback<S: ScoreSource>(
    score_source: &S,
    stubs: &[ProductStub],
) -> Vec<AnalyzedProduct> {
    stubs
        .iter()
        .map(|stub| estimated(score_source, stub, FALLBACK_INSIGHT_PIPELINE))
        .collect()
}

fn estimated<S: ScoreSource>(
    score_source: &S,
    stub: &ProductStub,
    insight: &str,
) -> AnalyzedProduct {
    let scores = score_source.fallback_scores();
    let total = compute_total_score(&scores);
    AnalyzedProduct::from_stub(stub, scores, total, insight.to_owned())
}

#[cfg(test)]
mod tests {
    use dropsight_core::AnalysisStatus;

    use super::*;

    /// Fixed [5; 10] fallback scores: total = 50.
    struct FixedScores;

    impl ScoreSource for FixedScores {
        fn fallback_scores(&self) -> Vec<CriterionScore> {
            dropsight_core::canonical_criteria()
                .map(|name| CriterionScore::new(name, 5))
                .collect()
        }
    }

    fn stubs(n: usize) -> Vec<ProductStub> {
        (0..n)
            .map(|i| ProductStub::new(format!("Product {i}"), format!("https://drive/{i}")))
            .collect()
    }

    #[test]
    fn pipeline_fallback_coerces_every_stub_to_complete() {
        let stubs = stubs(7);
        let records = pipeline_fallback(&FixedScores, &stubs);

        assert_eq!(records.len(), 7);
        for (record, stub) in records.iter().zip(&stubs) {
            assert_eq!(record.status, AnalysisStatus::Complete);
            assert_eq!(record.product_name, stub.product_name);
            assert_eq!(record.scores.len(), 10);
            assert_eq!(record.insights, FALLBACK_INSIGHT_PIPELINE);
            assert_eq!(record.total_score, 50);
        }
    }

    #[test]
    fn pipeline_fallback_on_empty_input_is_empty() {
        assert!(pipeline_fallback(&FixedScores, &[]).is_empty());
    }

    #[test]
    fn estimated_record_totals_follow_the_fallback_scores() {
        let stub = ProductStub::new("Widget".into(), "https://drive/x".into());
        let record = estimated(&FixedScores, &stub, FALLBACK_INSIGHT_SERVICE);
        assert_eq!(record.total_score, 50);
        assert_eq!(record.insights, FALLBACK_INSIGHT_SERVICE);
    }
}
