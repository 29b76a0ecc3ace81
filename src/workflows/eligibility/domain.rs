use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Normalized application record consumed by the pipeline.
///
/// Immutable input; the caller is responsible for the `dependents <
/// family_size` intake invariant, the pipeline only degrades gracefully when
/// it is broken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub personal: PersonalProfile,
    pub employment: EmploymentProfile,
    pub request: SupportRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalProfile {
    pub family_size: u8,
    pub dependents: u8,
    pub nationality: String,
    pub emirate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentProfile {
    pub status: EmploymentStatus,
    pub monthly_salary: f64,
    pub years_of_experience: u8,
    pub job_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportRequest {
    pub category: SupportCategory,
    pub amount_requested: f64,
    pub urgency: UrgencyLevel,
    pub justification: Option<String>,
    pub career_goals: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Unemployed,
    Retired,
    SelfEmployed,
    Employed,
    /// Anything the intake layer could not map onto a known status.
    #[serde(other)]
    Unknown,
}

impl EmploymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Unemployed => "unemployed",
            EmploymentStatus::Retired => "retired",
            EmploymentStatus::SelfEmployed => "self_employed",
            EmploymentStatus::Employed => "employed",
            EmploymentStatus::Unknown => "unknown",
        }
    }
}

/// Support categories, each carrying its own rule profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportCategory {
    EmergencySupport,
    FinancialAssistance,
    EconomicEnablement,
    CareerDevelopment,
    Both,
    /// Unrecognized category; scoring degrades to the emergency profile.
    #[serde(other)]
    Unknown,
}

impl SupportCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SupportCategory::EmergencySupport => "emergency_support",
            SupportCategory::FinancialAssistance => "financial_assistance",
            SupportCategory::EconomicEnablement => "economic_enablement",
            SupportCategory::CareerDevelopment => "career_development",
            SupportCategory::Both => "both",
            SupportCategory::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }
}

/// Categorical output of a scoring stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Approve,
    ConditionalApprove,
    DocumentsRequired,
    Assessment,
    UnderReview,
    Declined,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Approve => "approve",
            Recommendation::ConditionalApprove => "conditional_approve",
            Recommendation::DocumentsRequired => "documents_required",
            Recommendation::Assessment => "assessment",
            Recommendation::UnderReview => "under_review",
            Recommendation::Declined => "declined",
        }
    }

    /// Ordinal position on the recommendation ladder, higher is better.
    pub const fn tier(self) -> u8 {
        match self {
            Recommendation::Approve => 5,
            Recommendation::ConditionalApprove => 4,
            Recommendation::DocumentsRequired => 3,
            Recommendation::Assessment => 2,
            Recommendation::UnderReview => 1,
            Recommendation::Declined => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    MediumHigh,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::MediumHigh => "medium_high",
            RiskLevel::High => "high",
        }
    }
}

/// Provenance of a stage result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    RuleBased,
    Llm,
}

impl AnalysisSource {
    pub const fn label(self) -> &'static str {
        match self {
            AnalysisSource::RuleBased => "rule_based",
            AnalysisSource::Llm => "llm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStability {
    Stable,
    Moderate,
    Variable,
    Developing,
    Unstable,
    Unknown,
}

/// Per-factor audit trail attached to every assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub income: IncomeAssessment,
    pub family: FamilyAssessment,
    pub employment: EmploymentAssessment,
    pub urgency: UrgencyAssessment,
    pub amount: AmountAssessment,
    pub nationality_bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeAssessment {
    pub score: f64,
    pub monthly_salary: f64,
    pub threshold: f64,
    pub meets_threshold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyAssessment {
    pub score: f64,
    pub family_size: u8,
    pub dependents: u8,
    pub dependency_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentAssessment {
    pub score: f64,
    pub status: EmploymentStatus,
    pub experience_years: u8,
    pub stability: EmploymentStability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyAssessment {
    pub score: f64,
    pub level: UrgencyLevel,
    pub priority_processing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountAssessment {
    pub score: f64,
    pub amount_requested: f64,
    pub max_allowed: f64,
    pub within_limits: bool,
}

/// Structured, versioned output of one assessment stage.
///
/// Immutable once produced; the decision synthesizer and external persistence
/// only ever read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Final weighted score, clamped to [0, 100].
    pub score: f64,
    pub recommendation: Recommendation,
    /// Confidence estimate, clamped to [0.3, 0.98].
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    /// Support amount the stage proposes; the synthesizer applies its own
    /// haircuts on top.
    pub recommended_amount: f64,
    pub factors: FactorBreakdown,
    pub processing_notes: String,
    pub required_documents: Vec<String>,
    pub next_steps: Vec<String>,
    pub estimated_processing_days: u8,
    pub analysis_source: AnalysisSource,
    pub assessed_at: DateTime<Utc>,
    pub assessment_version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerSector {
    Technology,
    Healthcare,
    Finance,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPotential {
    High,
    Medium,
    Emerging,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingProgram {
    pub name: String,
    pub provider: String,
    pub duration_months: u8,
}

/// Economic-enablement plan produced by the career stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnablementPlan {
    pub sector: CareerSector,
    pub growth_potential: GrowthPotential,
    pub training_programs: Vec<TrainingProgram>,
    pub job_matching: Vec<String>,
    pub progression_path: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub timeline: String,
}

/// Terminal status of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Approved,
    ConditionalApproval,
    ReviewRequired,
    DocumentsRequired,
    SoftDecline,
}

impl DecisionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DecisionStatus::Approved => "approved",
            DecisionStatus::ConditionalApproval => "conditional_approval",
            DecisionStatus::ReviewRequired => "review_required",
            DecisionStatus::DocumentsRequired => "documents_required",
            DecisionStatus::SoftDecline => "soft_decline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSupport {
    pub approved_amount: f64,
    pub duration_months: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicEnablement {
    pub training_programs: Vec<TrainingProgram>,
    pub job_matching: Vec<String>,
}

/// Terminal artifact of a pipeline run, created exactly once per application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDecision {
    pub status: DecisionStatus,
    pub financial_support: FinancialSupport,
    pub economic_enablement: EconomicEnablement,
    pub next_steps: Vec<String>,
    /// Populated verbatim on the documents-required path, empty otherwise.
    pub missing_documents: Vec<String>,
}
