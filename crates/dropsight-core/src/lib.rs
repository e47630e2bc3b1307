//! Shared domain types and configuration for dropsight.
//!
//! Defines the product records flowing through the analysis pipeline
//! (`ProductStub` → `AnalyzedProduct`), the canonical ten-criterion table,
//! and the env-based application configuration.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod records;

pub use app_config::{AppConfig, ColumnOrder};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{
    canonical_criteria, AnalysisStatus, AnalyzedProduct, CriterionScore, ProductStub, CRITERIA,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
