//! Enrichment collaborator boundary.
//!
//! The collaborator is untrusted and fallible: it either returns a JSON
//! payload or errors. The payload is decoded exactly once here into a tagged
//! [`EnrichmentOutcome`], so stage code downstream never re-validates shape.
//! Exhausting the retry budget, timing out, or returning a malformed payload
//! all land in `Failed` and the stage keeps its rule-based baseline.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tokio::time::{sleep, timeout};
use tracing::warn;

use crate::config::EnrichmentConfig;

use super::domain::{
    ApplicationId, GrowthPotential, Recommendation, RiskLevel, TrainingProgram,
};

/// Which stage is asking for enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Financial,
    Career,
}

impl StageKind {
    pub const fn label(self) -> &'static str {
        match self {
            StageKind::Financial => "financial",
            StageKind::Career => "career",
        }
    }
}

/// Prompt payload handed to the collaborator.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EnrichmentRequest {
    pub stage: StageKind,
    pub application_id: ApplicationId,
    pub payload: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("enrichment transport failed: {0}")]
    Transport(String),
    #[error("enrichment collaborator rejected the request: {0}")]
    Rejected(String),
}

/// External collaborator that may refine a stage's rule-based output.
#[async_trait]
pub trait EnrichmentClient: Send + Sync {
    async fn analyze(&self, request: EnrichmentRequest) -> Result<Value, EnrichmentError>;
}

/// Tagged result of one enrichment attempt, decoded at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentOutcome<T> {
    Enriched(T),
    Failed(String),
}

/// Collaborator payload refining the financial stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FinancialEnrichment {
    pub success: bool,
    #[serde(default)]
    pub eligibility_score: Option<f64>,
    #[serde(default)]
    pub decision_recommendation: Option<Recommendation>,
    #[serde(default)]
    pub recommended_support_amount: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub risk_factors: Option<Vec<String>>,
    #[serde(default)]
    pub analysis_reasoning: Option<String>,
}

/// Collaborator payload refining the career stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CareerEnrichment {
    pub success: bool,
    #[serde(default)]
    pub eligibility_score: Option<f64>,
    #[serde(default)]
    pub growth_potential: Option<GrowthPotential>,
    #[serde(default)]
    pub skill_gaps: Option<Vec<String>>,
    #[serde(default)]
    pub training_recommendations: Option<Vec<TrainingProgram>>,
    #[serde(default)]
    pub job_opportunities: Option<Vec<String>>,
    #[serde(default)]
    pub career_progression_path: Option<Vec<String>>,
    #[serde(default)]
    pub recommended_timeline: Option<String>,
}

/// Marker for payloads carrying the collaborator's explicit success flag.
pub(crate) trait EnrichmentPayload: DeserializeOwned {
    fn succeeded(&self) -> bool;
}

impl EnrichmentPayload for FinancialEnrichment {
    fn succeeded(&self) -> bool {
        self.success
    }
}

impl EnrichmentPayload for CareerEnrichment {
    fn succeeded(&self) -> bool {
        self.success
    }
}

/// Call the collaborator with the configured timeout and retry budget, then
/// decode once. Never errors: every failure mode maps to `Failed`.
pub(crate) async fn attempt<T: EnrichmentPayload>(
    client: &dyn EnrichmentClient,
    settings: &EnrichmentConfig,
    request: EnrichmentRequest,
) -> EnrichmentOutcome<T> {
    let stage = request.stage;
    let mut last_failure = String::new();

    for attempt_number in 1..=settings.max_attempts {
        let call = client.analyze(request.clone());
        match timeout(settings.call_timeout, call).await {
            Ok(Ok(value)) => return decode(stage, value),
            Ok(Err(err)) => {
                last_failure = err.to_string();
                warn!(
                    stage = stage.label(),
                    attempt = attempt_number,
                    error = %err,
                    "enrichment call failed"
                );
            }
            Err(_) => {
                last_failure = format!("timed out after {:?}", settings.call_timeout);
                warn!(
                    stage = stage.label(),
                    attempt = attempt_number,
                    timeout = ?settings.call_timeout,
                    "enrichment call timed out"
                );
            }
        }

        if attempt_number < settings.max_attempts {
            sleep(settings.retry_backoff).await;
        }
    }

    EnrichmentOutcome::Failed(format!(
        "all {} enrichment attempts failed: {last_failure}",
        settings.max_attempts
    ))
}

fn decode<T: EnrichmentPayload>(stage: StageKind, value: Value) -> EnrichmentOutcome<T> {
    match serde_json::from_value::<T>(value) {
        Ok(payload) if payload.succeeded() => EnrichmentOutcome::Enriched(payload),
        Ok(_) => {
            warn!(stage = stage.label(), "enrichment payload reported failure");
            EnrichmentOutcome::Failed("collaborator reported success=false".to_string())
        }
        Err(err) => {
            warn!(stage = stage.label(), error = %err, "malformed enrichment payload");
            EnrichmentOutcome::Failed(format!("malformed payload: {err}"))
        }
    }
}
