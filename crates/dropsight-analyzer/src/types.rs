use dropsight_core::CriterionScore;
use serde::{Deserialize, Serialize};

/// Request body sent to the analysis service, one per product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub video_url: String,
    pub product_url: String,
    pub product_index: usize,
}

/// Successful analysis service response: a set of named criterion scores and
/// an insight sentence.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub scores: Vec<CriterionScore>,
    pub insights: String,
}
