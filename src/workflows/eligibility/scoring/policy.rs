//! Score-to-recommendation mapping and the fixed advisory tables that dress
//! an assessment for case workers.

use super::super::domain::{
    EmploymentStability, EmploymentStatus, FactorBreakdown, Recommendation, RiskLevel,
    SupportCategory, UrgencyLevel,
};

pub(crate) struct ThresholdProfile {
    pub approve: f64,
    pub conditional: f64,
    pub documents: f64,
    pub assess: f64,
}

/// Recommendation thresholds keyed off the requested category. Unrecognized
/// categories use the default profile, matching the published rule book.
pub(crate) fn thresholds_for(category: SupportCategory) -> ThresholdProfile {
    match category {
        SupportCategory::CareerDevelopment => ThresholdProfile {
            approve: 70.0,
            conditional: 55.0,
            documents: 40.0,
            assess: 30.0,
        },
        SupportCategory::EmergencySupport => ThresholdProfile {
            approve: 75.0,
            conditional: 60.0,
            documents: 45.0,
            assess: 35.0,
        },
        _ => ThresholdProfile {
            approve: 72.0,
            conditional: 58.0,
            documents: 42.0,
            assess: 32.0,
        },
    }
}

pub(crate) fn recommend(score: f64, category: SupportCategory) -> Recommendation {
    let thresholds = thresholds_for(category);
    if score >= thresholds.approve {
        Recommendation::Approve
    } else if score >= thresholds.conditional {
        Recommendation::ConditionalApprove
    } else if score >= thresholds.documents {
        Recommendation::DocumentsRequired
    } else if score >= thresholds.assess {
        Recommendation::Assessment
    } else if score >= 25.0 {
        Recommendation::UnderReview
    } else {
        Recommendation::Declined
    }
}

/// Confidence in the recommendation, clamped to [0.3, 0.98]. Extreme scores
/// read as clear-cut; middle-band recommendations lose confidence.
pub(crate) fn confidence(score: f64, recommendation: Recommendation, jitter: f64) -> f64 {
    let mut value = 0.6;

    if score > 80.0 || score < 20.0 {
        value += 0.25;
    } else if score > 70.0 || score < 30.0 {
        value += 0.15;
    }

    value += match recommendation {
        Recommendation::Approve | Recommendation::Declined => 0.1,
        Recommendation::ConditionalApprove => 0.05,
        Recommendation::DocumentsRequired => -0.05,
        Recommendation::Assessment => -0.1,
        Recommendation::UnderReview => -0.15,
    };

    value += jitter;
    value.clamp(0.3, 0.98)
}

pub(crate) fn risk_level(score: f64, amount_requested: f64) -> RiskLevel {
    if score > 75.0 && amount_requested < 30_000.0 {
        RiskLevel::Low
    } else if score > 60.0 && amount_requested < 40_000.0 {
        RiskLevel::Medium
    } else if score > 45.0 {
        RiskLevel::MediumHigh
    } else {
        RiskLevel::High
    }
}

pub(crate) fn risk_factors(monthly_salary: f64, family_size: u8) -> Vec<String> {
    let mut factors = Vec::new();
    if monthly_salary <= 0.0 {
        factors.push("No current income".to_string());
    } else if monthly_salary < 3_000.0 {
        factors.push("Very low income level".to_string());
    }
    if family_size > 5 {
        factors.push("Large family size".to_string());
    }
    factors
}

pub(crate) fn employment_stability(
    status: EmploymentStatus,
    experience_years: u8,
) -> EmploymentStability {
    match status {
        EmploymentStatus::Unemployed => EmploymentStability::Unstable,
        EmploymentStatus::Retired => EmploymentStability::Stable,
        EmploymentStatus::SelfEmployed => {
            if experience_years > 3 {
                EmploymentStability::Moderate
            } else {
                EmploymentStability::Variable
            }
        }
        EmploymentStatus::Employed => {
            if experience_years > 2 {
                EmploymentStability::Stable
            } else {
                EmploymentStability::Developing
            }
        }
        EmploymentStatus::Unknown => EmploymentStability::Unknown,
    }
}

/// Expected handling time in working days for the recommendation, adjusted
/// for urgency.
pub(crate) fn estimated_processing_days(
    urgency: UrgencyLevel,
    recommendation: Recommendation,
) -> u8 {
    let base: i16 = match recommendation {
        Recommendation::Approve => 5,
        Recommendation::ConditionalApprove => 7,
        Recommendation::DocumentsRequired => 10,
        Recommendation::Assessment => 14,
        Recommendation::UnderReview => 18,
        Recommendation::Declined => 3,
    };

    let adjusted = match urgency {
        UrgencyLevel::Critical => (base - 3).max(1),
        UrgencyLevel::High => (base - 2).max(2),
        UrgencyLevel::Medium => base,
        UrgencyLevel::Low => base + 3,
    };

    adjusted as u8
}

pub(crate) fn required_documents(
    category: SupportCategory,
    recommendation: Recommendation,
) -> Vec<String> {
    let mut documents: Vec<&str> = vec!["emirates_id", "salary_certificate", "bank_statement"];

    documents.extend(match category {
        SupportCategory::EmergencySupport => &["medical_report", "emergency_justification"][..],
        SupportCategory::FinancialAssistance => &["utility_bills", "rent_agreement"][..],
        SupportCategory::EconomicEnablement => &["business_plan", "market_study"][..],
        SupportCategory::CareerDevelopment => {
            &["training_application", "cv", "educational_certificates"][..]
        }
        SupportCategory::Both => &["comprehensive_support_plan"][..],
        SupportCategory::Unknown => &[][..],
    });

    if matches!(
        recommendation,
        Recommendation::DocumentsRequired | Recommendation::Assessment
    ) {
        documents.extend(["additional_income_proof", "family_certificate"]);
    }

    documents.into_iter().map(str::to_string).collect()
}

pub(crate) fn next_steps(recommendation: Recommendation) -> Vec<String> {
    let steps: &[&str] = match recommendation {
        Recommendation::Approve => &[
            "Application approved for processing",
            "Support amount will be processed within 5 working days",
            "You will receive SMS and email confirmation",
            "Case worker will contact you for final details",
        ],
        Recommendation::ConditionalApprove => &[
            "Application conditionally approved",
            "Please provide additional documentation within 7 days",
            "Case worker will review submitted documents",
            "Final approval expected within 10 working days",
        ],
        Recommendation::DocumentsRequired => &[
            "Additional documents needed for processing",
            "Please submit required documents within 14 days",
            "Use the online portal or visit nearest service center",
            "Application will be re-assessed upon document submission",
        ],
        Recommendation::Assessment => &[
            "Application requires detailed assessment",
            "Case worker will contact you within 3 working days",
            "Prepare for potential interview or site visit",
            "Assessment process may take up to 21 days",
        ],
        Recommendation::UnderReview => &[
            "Application under comprehensive review",
            "Additional information may be requested",
            "Review process typically takes 15-20 working days",
            "Please ensure contact information is current",
        ],
        Recommendation::Declined => &[
            "Application does not meet current eligibility criteria",
            "You may reapply after 6 months if circumstances change",
            "Consider applying for alternative support programs",
            "Contact support team for detailed explanation",
        ],
    };
    steps.iter().map(|step| step.to_string()).collect()
}

/// Assemble the human-readable rationale from fixed phrases. Deterministic by
/// construction so repeated assessments of the same record read identically.
pub(crate) fn processing_notes(
    category: SupportCategory,
    score: f64,
    confidence: f64,
    recommendation: Recommendation,
    factors: &FactorBreakdown,
) -> String {
    let mut parts = Vec::with_capacity(6);

    parts.push(format!(
        "Assessment completed for {} application.",
        category.label()
    ));
    parts.push(format!(
        "Overall eligibility score: {score:.1}/100 with {confidence:.2} confidence level."
    ));
    parts.push(format!(
        "Income threshold requirement {}.",
        if factors.income.meets_threshold {
            "met"
        } else {
            "not met"
        }
    ));

    if factors.family.score > 15.0 {
        parts.push("Family situation indicates high support need due to dependents.".to_string());
    }

    parts.push(format!(
        "Employment stability assessed as: {:?}.",
        factors.employment.stability
    ));

    let reason = match recommendation {
        Recommendation::Approve => "All eligibility criteria met with strong supporting indicators.",
        Recommendation::ConditionalApprove => {
            "Meets basic criteria but requires verification of specific conditions."
        }
        Recommendation::DocumentsRequired => {
            "Eligible but needs additional documentation for final assessment."
        }
        Recommendation::Assessment => {
            "Requires detailed case worker evaluation due to complex circumstances."
        }
        Recommendation::UnderReview => {
            "Application needs comprehensive review by assessment committee."
        }
        Recommendation::Declined => "Does not meet minimum eligibility requirements at this time.",
    };
    parts.push(reason.to_string());

    parts.join(" ")
}
