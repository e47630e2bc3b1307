use serde::{Deserialize, Serialize};

/// The ten fixed criteria every product is scored on, in canonical order.
///
/// This order is a display and export contract: score sequences are never
/// reordered once generated, and the CSV header lists these names verbatim.
pub const CRITERIA: [&str; 10] = [
    "Trend Status",
    "Seasonality",
    "Market Fit",
    "Urgency",
    "Impulse Buy",
    "Solution Value",
    "Wow Factor",
    "Virality",
    "Ad Creative",
    "Target Clarity",
];

/// Returns the canonical criterion names in fixed order.
#[must_use]
pub fn canonical_criteria() -> impl Iterator<Item = &'static str> {
    CRITERIA.iter().copied()
}

/// Lifecycle state of a product record in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// Parsed from the sheet, not yet analyzed.
    Analyzing,
    /// Analysis settled (real, seeded, or fallback scores).
    Complete,
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisStatus::Analyzing => write!(f, "analyzing"),
            AnalysisStatus::Complete => write!(f, "complete"),
        }
    }
}

/// One validated spreadsheet row, waiting to be analyzed.
///
/// Only constructed for rows where both the product name and the creative
/// folder link are non-empty after trimming; malformed rows never become
/// stubs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductStub {
    /// Product display name. Non-empty after trim.
    pub product_name: String,
    /// Storefront URL for the product, when the sheet layout carries one.
    pub product_link: Option<String>,
    /// Google Drive folder holding the video ad creatives. Non-empty after trim.
    pub video_creative_folder_link: String,
    /// Always `Analyzing` at construction.
    pub status: AnalysisStatus,
}

impl ProductStub {
    /// Builds a stub in the initial `Analyzing` state.
    #[must_use]
    pub fn new(product_name: String, video_creative_folder_link: String) -> Self {
        Self {
            product_name,
            product_link: None,
            video_creative_folder_link,
            status: AnalysisStatus::Analyzing,
        }
    }

    /// The product URL as sent to the analysis service; empty when the sheet
    /// layout has no product-link column.
    #[must_use]
    pub fn product_url(&self) -> &str {
        self.product_link.as_deref().unwrap_or("")
    }
}

/// One named criterion score in `[1, 10]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub name: String,
    pub score: u8,
}

impl CriterionScore {
    #[must_use]
    pub fn new(name: impl Into<String>, score: u8) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// A fully analyzed product: the stub plus its settled scores, aggregate,
/// and insight text. Immutable once produced; presentation-layer views
/// (search, sort, pagination) never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedProduct {
    pub product_name: String,
    pub product_link: Option<String>,
    pub video_creative_folder_link: String,
    /// Ten scores in canonical criterion order, never reordered.
    pub scores: Vec<CriterionScore>,
    /// Aggregate opportunity score in `[0, 100]`.
    pub total_score: u8,
    /// Human-readable explanation. Never empty.
    pub insights: String,
    /// Always `Complete`.
    pub status: AnalysisStatus,
}

impl AnalyzedProduct {
    /// Assembles a complete record from a stub and its settled scores.
    #[must_use]
    pub fn from_stub(
        stub: &ProductStub,
        scores: Vec<CriterionScore>,
        total_score: u8,
        insights: String,
    ) -> Self {
        Self {
            product_name: stub.product_name.clone(),
            product_link: stub.product_link.clone(),
            video_creative_folder_link: stub.video_creative_folder_link.clone(),
            scores,
            total_score,
            insights,
            status: AnalysisStatus::Complete,
        }
    }
}
