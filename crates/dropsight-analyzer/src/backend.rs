//! Analysis backends: the raw, fallible service call.
//!
//! [`HttpBackend`] talks to the remote analysis service. [`LocalBackend`]
//! reproduces that service's no-credentials path — seeded pseudo-deterministic
//! scores and a rotating insight message — so the pipeline works without any
//! service configured. Tests implement [`AnalysisBackend`] directly to
//! control completion order and failures.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::AnalyzerError;
use crate::types::{AnalysisRequest, AnalysisResponse};

/// One raw analysis call. Failures here are recovered by the pipeline's
/// per-item fallback; backends never need to degrade gracefully themselves.
pub trait AnalysisBackend {
    fn analyze(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResponse, AnalyzerError>>;
}

/// HTTP client for the remote video-analysis service.
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// Creates a backend posting to `endpoint`.
    ///
    /// The request timeout doubles as the per-call analysis timeout: a hung
    /// call surfaces as a transport error and takes the fallback path.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dropsight/0.1 (product-analysis)")
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_owned(),
        })
    }

    async fn post_analysis(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResponse, AnalyzerError> {
        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        // Any non-2xx status is a structured refusal from the service, with
        // or without a readable `{ "error": ... }` body.
        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .as_ref()
                .and_then(|v| v.get("error"))
                .and_then(Value::as_str)
                .map_or_else(|| format!("unexpected HTTP status {status}"), str::to_owned);
            return Err(AnalyzerError::Service(message));
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| AnalyzerError::Deserialize {
                context: format!("analyze(productIndex={})", request.product_index),
                source: e,
            })?;

        // Some deployments return 200 with an error body.
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(AnalyzerError::Service(message.to_owned()));
        }

        serde_json::from_value(value).map_err(|e| AnalyzerError::Deserialize {
            context: format!("analyze(productIndex={})", request.product_index),
            source: e,
        })
    }
}

impl AnalysisBackend for HttpBackend {
    fn analyze(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResponse, AnalyzerError>> {
        self.post_analysis(request)
    }
}

/// Rotating insight messages for locally generated analyses, selected by
/// `product_index % 10`.
const LOCAL_INSIGHTS: [&str; 10] = [
    "This product shows excellent potential for the Indian market with strong trend status and engaging video creatives.",
    "Good product with moderate potential. The video creative conveys clear value proposition and targets the right audience.",
    "Limited potential based on video analysis. Consider improving production quality and emphasizing unique selling points.",
    "Strong market fit detected in video content. Emotional triggers and clear problem-solution demonstration present.",
    "Video creative lacks urgency triggers. Consider adding time-limited offers or scarcity elements to improve performance.",
    "High virality potential detected. Video creative includes shareable moments and relatable scenarios.",
    "Product demonstrates good solution value in video. Clear before/after scenarios resonate well with target audience.",
    "Video creative analysis indicates seasonality alignment. Perfect timing for current market trends in India.",
    "Target audience clarity is strong in this video. Specific demographic targeting evident in creative approach.",
    "Impulse buy potential is high. Video creative creates immediate desire through effective emotional triggers.",
];

/// In-process backend: seeded pseudo-deterministic scores derived from the
/// input links plus a rotating insight message. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalBackend;

impl AnalysisBackend for LocalBackend {
    fn analyze(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResponse, AnalyzerError>> {
        let scores = dropsight_score::seeded_scores(
            &request.video_url,
            &request.product_url,
            request.product_index,
        );
        let insights = LOCAL_INSIGHTS[request.product_index % LOCAL_INSIGHTS.len()].to_owned();

        std::future::ready(Ok(AnalysisResponse { scores, insights }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_backend_is_deterministic() {
        let request = AnalysisRequest {
            video_url: "https://drive.google.com/folder/abc".to_owned(),
            product_url: String::new(),
            product_index: 2,
        };

        let a = LocalBackend.analyze(request.clone()).await.unwrap();
        let b = LocalBackend.analyze(request).await.unwrap();
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.insights, b.insights);
    }

    #[tokio::test]
    async fn local_backend_rotates_insights_by_index() {
        let mk = |product_index| AnalysisRequest {
            video_url: "v".to_owned(),
            product_url: "p".to_owned(),
            product_index,
        };

        let first = LocalBackend.analyze(mk(0)).await.unwrap();
        let wrapped = LocalBackend.analyze(mk(10)).await.unwrap();
        assert_eq!(first.insights, wrapped.insights);
        assert_eq!(first.insights, LOCAL_INSIGHTS[0]);

        let third = LocalBackend.analyze(mk(2)).await.unwrap();
        assert_eq!(third.insights, LOCAL_INSIGHTS[2]);
    }

    #[tokio::test]
    async fn local_backend_scores_stay_in_range() {
        for index in 0..25 {
            let response = LocalBackend
                .analyze(AnalysisRequest {
                    video_url: "https://drive.google.com/folder/abc".to_owned(),
                    product_url: "https://shop.example/p/1".to_owned(),
                    product_index: index,
                })
                .await
                .unwrap();
            assert_eq!(response.scores.len(), 10);
            for score in &response.scores {
                assert!((1..=10).contains(&score.score));
            }
        }
    }
}
