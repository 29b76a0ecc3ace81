//! Decision synthesis.
//!
//! The last pipeline step combines the document review and the two stage
//! reports into one final decision. The rules are deterministic: the
//! financial stage drives the money, the career stage always contributes the
//! enablement plan, and a failed document gate pre-empts both.

use super::documents::DocumentReview;
use super::domain::{
    DecisionStatus, EconomicEnablement, FinalDecision, FinancialSupport, Recommendation,
};
use super::stages::StageReport;

/// Approved amount is cut to this fraction on conditional approvals.
const CONDITIONAL_HAIRCUT: f64 = 0.7;
/// Fixed disbursement window whenever any amount is approved.
const SUPPORT_DURATION_MONTHS: u8 = 6;

pub(crate) fn synthesize(
    documents: &DocumentReview,
    financial: Option<&StageReport>,
    career: Option<&StageReport>,
) -> FinalDecision {
    if !documents.passed() {
        return FinalDecision {
            status: DecisionStatus::DocumentsRequired,
            financial_support: FinancialSupport {
                approved_amount: 0.0,
                duration_months: 0,
            },
            economic_enablement: EconomicEnablement {
                training_programs: Vec::new(),
                job_matching: Vec::new(),
            },
            next_steps: next_steps_for(DecisionStatus::DocumentsRequired),
            missing_documents: documents.missing_documents.clone(),
        };
    }

    let (status, approved_amount) = match financial {
        Some(report) => {
            let result = &report.result;
            if result.recommendation == Recommendation::Approve && result.score >= 75.0 {
                (DecisionStatus::Approved, result.recommended_amount)
            } else if result.recommendation == Recommendation::ConditionalApprove
                && result.score >= 50.0
            {
                (
                    DecisionStatus::ConditionalApproval,
                    result.recommended_amount * CONDITIONAL_HAIRCUT,
                )
            } else {
                (DecisionStatus::ReviewRequired, 0.0)
            }
        }
        None => (DecisionStatus::ReviewRequired, 0.0),
    };

    let duration_months = if approved_amount > 0.0 {
        SUPPORT_DURATION_MONTHS
    } else {
        0
    };

    // Enablement support is offered regardless of the financial outcome.
    let economic_enablement = match career.and_then(|report| report.enablement.as_ref()) {
        Some(plan) => EconomicEnablement {
            training_programs: plan.training_programs.clone(),
            job_matching: plan.job_matching.clone(),
        },
        None => EconomicEnablement {
            training_programs: Vec::new(),
            job_matching: Vec::new(),
        },
    };

    FinalDecision {
        status,
        financial_support: FinancialSupport {
            approved_amount,
            duration_months,
        },
        economic_enablement,
        next_steps: next_steps_for(status),
        missing_documents: Vec::new(),
    }
}

fn next_steps_for(status: DecisionStatus) -> Vec<String> {
    let steps: &[&str] = match status {
        DecisionStatus::Approved => &[
            "Support disbursement",
            "Training enrollment",
            "Progress monitoring",
        ],
        DecisionStatus::ConditionalApproval => &[
            "Complete requirements",
            "Attend counseling",
            "Begin training",
        ],
        DecisionStatus::ReviewRequired | DecisionStatus::SoftDecline => &[
            "Case worker review",
            "Additional information",
            "Alternative programs",
        ],
        DecisionStatus::DocumentsRequired => &[
            "Upload missing documents",
            "Ensure quality",
            "Resubmit",
        ],
    };
    steps.iter().map(|step| step.to_string()).collect()
}
