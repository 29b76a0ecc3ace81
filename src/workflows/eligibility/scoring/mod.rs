//! Weighted multi-factor eligibility scoring.

pub mod config;
pub(crate) mod factors;
pub mod noise;
pub(crate) mod policy;

pub use config::{RuleProfile, ScoringRuleSet, WeightFactors};
pub use noise::{NoiseSource, SeededNoise, ZeroNoise};

use chrono::Utc;
use tracing::debug;

use super::domain::{
    AmountAssessment, AnalysisSource, ApplicationRecord, AssessmentResult, EmploymentAssessment,
    FactorBreakdown, FamilyAssessment, IncomeAssessment, Recommendation, SupportCategory,
    UrgencyAssessment, UrgencyLevel,
};

pub(crate) const ASSESSMENT_VERSION: &str = "1.0.0";

/// Stateless engine applying the rule set to an application record.
///
/// Shared read-only across concurrent pipeline runs; every call produces an
/// independent [`AssessmentResult`].
pub struct Assessor {
    rules: ScoringRuleSet,
}

impl Assessor {
    pub fn new(rules: ScoringRuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoringRuleSet {
        &self.rules
    }

    /// Score `record` under the rule profile for `category`.
    ///
    /// Stages pass their own category here: the financial stage scores under
    /// the requested category, the career stage under career development.
    pub fn assess(
        &self,
        record: &ApplicationRecord,
        category: SupportCategory,
        noise: &dyn NoiseSource,
    ) -> AssessmentResult {
        let (profile, effective_category) = self.rules.profile_or_default(category);

        let weight_sum = profile.weights.sum();
        if (weight_sum - 1.0).abs() > 1e-6 {
            debug!(
                category = effective_category.label(),
                weight_sum, "weight factors do not sum to 1.0"
            );
        }

        let salary = record.employment.monthly_salary;
        let family_size = record.personal.family_size;
        let dependents = record.personal.dependents;
        let requested = record.request.amount_requested;

        let income = factors::income_score(salary, profile.income_threshold);
        let family = factors::family_score(family_size, dependents);
        let employment = factors::employment_score(
            record.employment.status,
            record.employment.years_of_experience,
        );
        let urgency = factors::urgency_score(record.request.urgency);
        let penalty = factors::amount_penalty(requested, profile.max_amount);
        let bonus = factors::nationality_bonus(
            &record.personal.nationality,
            self.rules.citizen_nationality(),
        );

        let weighted = income * profile.weights.income
            + family * profile.weights.family
            + employment * profile.weights.employment
            + urgency * profile.weights.urgency;

        let final_score = (weighted + penalty + bonus + noise.score_noise()).clamp(0.0, 100.0);

        let recommendation = policy::recommend(final_score, category);
        let confidence = policy::confidence(final_score, recommendation, noise.confidence_noise());

        let breakdown = FactorBreakdown {
            income: IncomeAssessment {
                score: income,
                monthly_salary: salary,
                threshold: profile.income_threshold,
                meets_threshold: salary <= profile.income_threshold,
            },
            family: FamilyAssessment {
                score: family,
                family_size,
                dependents,
                dependency_ratio: factors::dependency_ratio(family_size, dependents),
            },
            employment: EmploymentAssessment {
                score: employment,
                status: record.employment.status,
                experience_years: record.employment.years_of_experience,
                stability: policy::employment_stability(
                    record.employment.status,
                    record.employment.years_of_experience,
                ),
            },
            urgency: UrgencyAssessment {
                score: urgency,
                level: record.request.urgency,
                priority_processing: matches!(
                    record.request.urgency,
                    UrgencyLevel::High | UrgencyLevel::Critical
                ),
            },
            amount: AmountAssessment {
                score: penalty,
                amount_requested: requested,
                max_allowed: profile.max_amount,
                within_limits: requested <= profile.max_amount,
            },
            nationality_bonus: bonus,
        };

        let recommended_amount = if recommendation == Recommendation::Declined {
            0.0
        } else {
            requested.clamp(0.0, profile.max_amount)
        };

        let notes = policy::processing_notes(
            category,
            final_score,
            confidence,
            recommendation,
            &breakdown,
        );

        AssessmentResult {
            score: final_score,
            recommendation,
            confidence,
            risk_level: policy::risk_level(final_score, requested),
            risk_factors: policy::risk_factors(salary, family_size),
            recommended_amount,
            factors: breakdown,
            processing_notes: notes,
            required_documents: policy::required_documents(category, recommendation),
            next_steps: policy::next_steps(recommendation),
            estimated_processing_days: policy::estimated_processing_days(
                record.request.urgency,
                recommendation,
            ),
            analysis_source: AnalysisSource::RuleBased,
            assessed_at: Utc::now(),
            assessment_version: ASSESSMENT_VERSION.to_string(),
        }
    }
}
