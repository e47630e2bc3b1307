//! Video-creative analysis pipeline for dropsight.
//!
//! Wraps the external analysis service behind [`AnalysisBackend`], applies
//! per-item fallback scoring so a single product can never fail the run, and
//! orchestrates the whole stub list in fixed-size concurrent batches with
//! order-preserving, index-keyed result placement.

pub mod backend;
pub mod error;
pub mod pipeline;
pub mod types;

pub use backend::{AnalysisBackend, HttpBackend, LocalBackend};
pub use error::AnalyzerError;
pub use pipeline::{
    analyze_all, analyze_one, ScoreSource, ThreadRngScores, FALLBACK_INSIGHT_PIPELINE,
    FALLBACK_INSIGHT_SERVICE, FALLBACK_INSIGHT_TRANSPORT,
};
pub use types::{AnalysisRequest, AnalysisResponse};
