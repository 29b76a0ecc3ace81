//! Multi-stage eligibility assessment for social-support applications.
//!
//! A run flows through a fixed sequence: document completeness gate →
//! financial and career assessment stages (concurrent, independent) →
//! decision synthesis. Every stage produces a structured, versioned result
//! consumed by the synthesizer and returned to the caller for audit.

pub(crate) mod decision;
pub mod documents;
pub mod domain;
pub mod enrichment;
pub mod pipeline;
pub mod scoring;
pub mod stages;

#[cfg(test)]
mod tests;

pub use documents::{
    DocumentCheck, DocumentReview, DocumentStore, DocumentStoreError, SubmittedDocument,
};
pub use domain::{
    AnalysisSource, ApplicationId, ApplicationRecord, AssessmentResult, CareerSector,
    DecisionStatus, EconomicEnablement, EmploymentProfile, EmploymentStatus, EnablementPlan,
    FactorBreakdown, FinalDecision, FinancialSupport, GrowthPotential, PersonalProfile,
    Recommendation, RiskLevel, SupportCategory, SupportRequest, TrainingProgram, UrgencyLevel,
};
pub use enrichment::{
    CareerEnrichment, EnrichmentClient, EnrichmentError, EnrichmentOutcome, EnrichmentRequest,
    FinancialEnrichment, StageKind,
};
pub use pipeline::{EligibilityPipeline, PipelineRun};
pub use scoring::{
    Assessor, NoiseSource, RuleProfile, ScoringRuleSet, SeededNoise, WeightFactors, ZeroNoise,
};
pub use stages::{CareerStage, FinancialStage, StageReport, StageState};
