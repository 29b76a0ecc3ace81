//! Pipeline coordinator.
//!
//! Sequencing contract: the document gate must pass before either scoring
//! stage starts; the financial and career stages are independent of one
//! another and run concurrently; decision synthesis joins on both. Each run
//! owns its context, the rule set is the only shared (read-only) state.

use std::sync::Arc;

use tracing::info;

use crate::config::{AppConfig, EnrichmentConfig};

use super::decision;
use super::documents::{DocumentCheck, DocumentStore, DocumentStoreError, SubmittedDocument};
use super::domain::{ApplicationId, ApplicationRecord, FinalDecision};
use super::enrichment::EnrichmentClient;
use super::scoring::{Assessor, NoiseSource, ScoringRuleSet, SeededNoise};
use super::stages::{CareerStage, FinancialStage, StageReport};

/// Per-run context accumulated by the coordinator; the terminal artifact of
/// one application's assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub application_id: ApplicationId,
    pub documents: super::documents::DocumentReview,
    /// `None` when the document gate short-circuited the run.
    pub financial: Option<StageReport>,
    /// `None` when the document gate short-circuited the run.
    pub career: Option<StageReport>,
    pub decision: FinalDecision,
}

/// Coordinator owning the assessor, the document gate, and the optional
/// enrichment collaborator. Cheap to share; safe for concurrent runs.
pub struct EligibilityPipeline {
    assessor: Assessor,
    documents: DocumentCheck,
    enrichment: Option<Arc<dyn EnrichmentClient>>,
    enrichment_settings: EnrichmentConfig,
    noise: Arc<dyn NoiseSource>,
}

impl EligibilityPipeline {
    pub fn new(rules: ScoringRuleSet, required_documents: impl IntoIterator<Item = String>) -> Self {
        Self {
            assessor: Assessor::new(rules),
            documents: DocumentCheck::new(required_documents),
            enrichment: None,
            enrichment_settings: EnrichmentConfig::default(),
            noise: Arc::new(SeededNoise::from_time()),
        }
    }

    /// Build a pipeline from process configuration: the default rule set with
    /// the configured citizen nationality, document set, and enrichment knobs.
    pub fn from_config(config: &AppConfig) -> Self {
        let rules = ScoringRuleSet::default()
            .with_citizen_nationality(config.assessment.citizen_nationality.clone());
        let mut pipeline = Self::new(rules, config.assessment.required_documents.clone());
        pipeline.enrichment_settings = config.enrichment.clone();
        pipeline
    }

    pub fn with_enrichment(
        mut self,
        client: Arc<dyn EnrichmentClient>,
        settings: EnrichmentConfig,
    ) -> Self {
        self.enrichment = Some(client);
        self.enrichment_settings = settings;
        self
    }

    /// Replace the perturbation source; tests inject
    /// [`super::scoring::ZeroNoise`] for reproducible runs.
    pub fn with_noise(mut self, noise: Arc<dyn NoiseSource>) -> Self {
        self.noise = noise;
        self
    }

    /// Run the full assessment for one application.
    ///
    /// Never fails: input defects degrade to defaults, collaborator failures
    /// degrade to rule-based output, and incomplete documents are a
    /// first-class terminal state rather than an error.
    pub async fn assess(
        &self,
        record: &ApplicationRecord,
        submitted: &[SubmittedDocument],
    ) -> PipelineRun {
        let review = self.documents.review(submitted);

        if !review.passed() {
            info!(
                application_id = %record.application_id.0,
                missing = ?review.missing_documents,
                invalid = ?review.invalid_documents,
                "document gate failed, short-circuiting assessment"
            );
            let decision = decision::synthesize(&review, None, None);
            return PipelineRun {
                application_id: record.application_id.clone(),
                documents: review,
                financial: None,
                career: None,
                decision,
            };
        }

        let client = self.enrichment.as_deref();

        let (financial, career) = tokio::join!(
            FinancialStage::run(
                &self.assessor,
                record,
                client,
                &self.enrichment_settings,
                self.noise.as_ref(),
            ),
            CareerStage::run(
                &self.assessor,
                record,
                client,
                &self.enrichment_settings,
                self.noise.as_ref(),
            ),
        );

        let decision = decision::synthesize(&review, Some(&financial), Some(&career));

        info!(
            application_id = %record.application_id.0,
            status = decision.status.label(),
            financial_score = financial.result.score,
            career_score = career.result.score,
            "assessment complete"
        );

        PipelineRun {
            application_id: record.application_id.clone(),
            documents: review,
            financial: Some(financial),
            career: Some(career),
            decision,
        }
    }

    /// Fetch the submitted documents through the store, then assess.
    pub async fn assess_from_store(
        &self,
        record: &ApplicationRecord,
        store: &dyn DocumentStore,
    ) -> Result<PipelineRun, DocumentStoreError> {
        let submitted = store.submitted_documents(&record.application_id).await?;
        Ok(self.assess(record, &submitted).await)
    }
}
