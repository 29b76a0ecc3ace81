use serde_json::json;
use tracing::info;

use crate::config::EnrichmentConfig;

use super::super::domain::{AnalysisSource, ApplicationRecord, AssessmentResult};
use super::super::enrichment::{
    self, EnrichmentClient, EnrichmentOutcome, EnrichmentRequest, FinancialEnrichment, StageKind,
};
use super::super::scoring::{Assessor, NoiseSource};
use super::{StageProgress, StageReport, StageState};

/// Financial viability assessment.
///
/// Scores under the rule profile of the requested support category, where
/// income carries the heaviest weight.
pub struct FinancialStage;

impl FinancialStage {
    pub(crate) async fn run(
        assessor: &Assessor,
        record: &ApplicationRecord,
        enrichment: Option<&dyn EnrichmentClient>,
        settings: &EnrichmentConfig,
        noise: &dyn NoiseSource,
    ) -> StageReport {
        let mut progress = StageProgress::start();

        let mut result = assessor.assess(record, record.request.category, noise);
        progress.advance(StageState::RuleBasedComputed);

        match enrichment {
            Some(client) if settings.enabled => {
                progress.advance(StageState::EnrichmentAttempted);
                let request = EnrichmentRequest {
                    stage: StageKind::Financial,
                    application_id: record.application_id.clone(),
                    payload: prompt_payload(record),
                };
                match enrichment::attempt::<FinancialEnrichment>(client, settings, request).await {
                    EnrichmentOutcome::Enriched(payload) => {
                        apply(&mut result, payload);
                        progress.advance(StageState::Enriched);
                    }
                    EnrichmentOutcome::Failed(reason) => {
                        info!(stage = "financial", reason, "retaining rule-based baseline");
                        progress.advance(StageState::RuleBasedRetained);
                    }
                }
            }
            _ => {}
        }

        progress.advance(StageState::Done);

        StageReport {
            stage: StageKind::Financial,
            provenance: result.analysis_source,
            result,
            enablement: None,
            state: progress.state(),
        }
    }
}

fn prompt_payload(record: &ApplicationRecord) -> serde_json::Value {
    json!({
        "emirate": record.personal.emirate,
        "family_size": record.personal.family_size,
        "dependents": record.personal.dependents,
        "nationality": record.personal.nationality,
        "employment_status": record.employment.status.label(),
        "monthly_salary": record.employment.monthly_salary,
        "support_type": record.request.category.label(),
        "amount_requested": record.request.amount_requested,
        "urgency_level": record.request.urgency.label(),
        "reason_for_support": record.request.justification,
    })
}

/// Overwrite baseline fields with whatever the collaborator supplied.
/// Unspecified fields keep their rule-based values.
fn apply(baseline: &mut AssessmentResult, payload: FinancialEnrichment) {
    if let Some(score) = payload.eligibility_score {
        baseline.score = score.clamp(0.0, 100.0);
    }
    if let Some(recommendation) = payload.decision_recommendation {
        baseline.recommendation = recommendation;
    }
    if let Some(amount) = payload.recommended_support_amount {
        baseline.recommended_amount = amount.max(0.0);
    }
    if let Some(risk) = payload.risk_level {
        baseline.risk_level = risk;
    }
    if let Some(factors) = payload.risk_factors {
        baseline.risk_factors = factors;
    }
    if let Some(reasoning) = payload.analysis_reasoning {
        baseline.processing_notes = reasoning;
    }
    baseline.analysis_source = AnalysisSource::Llm;
}
