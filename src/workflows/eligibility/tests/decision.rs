use crate::workflows::eligibility::decision::synthesize;
use crate::workflows::eligibility::documents::DocumentReview;
use crate::workflows::eligibility::domain::{
    AnalysisSource, DecisionStatus, Recommendation,
};
use crate::workflows::eligibility::enrichment::StageKind;
use crate::workflows::eligibility::scoring::ZeroNoise;
use crate::workflows::eligibility::stages::{StageReport, StageState};

use super::common::{assessor, career_record, emergency_record};

fn passing_review() -> DocumentReview {
    DocumentReview {
        missing_documents: Vec::new(),
        invalid_documents: Vec::new(),
    }
}

fn financial_report(
    score: f64,
    recommendation: Recommendation,
    recommended_amount: f64,
) -> StageReport {
    let mut result = assessor().assess(
        &emergency_record(),
        emergency_record().request.category,
        &ZeroNoise,
    );
    result.score = score;
    result.recommendation = recommendation;
    result.recommended_amount = recommended_amount;

    StageReport {
        stage: StageKind::Financial,
        provenance: result.analysis_source,
        result,
        enablement: None,
        state: StageState::Done,
    }
}

fn career_report() -> StageReport {
    let record = career_record();
    let result = assessor().assess(
        &record,
        crate::workflows::eligibility::domain::SupportCategory::CareerDevelopment,
        &ZeroNoise,
    );
    StageReport {
        stage: StageKind::Career,
        provenance: AnalysisSource::RuleBased,
        result,
        enablement: Some(crate::workflows::eligibility::domain::EnablementPlan {
            sector: crate::workflows::eligibility::domain::CareerSector::Technology,
            growth_potential: crate::workflows::eligibility::domain::GrowthPotential::High,
            training_programs: vec![crate::workflows::eligibility::domain::TrainingProgram {
                name: "Data Analysis Bootcamp".to_string(),
                provider: "ADEK Training".to_string(),
                duration_months: 4,
            }],
            job_matching: vec!["Project Coordinator".to_string()],
            progression_path: vec!["Complete skills assessment".to_string()],
            skill_gaps: vec!["Data analysis".to_string()],
            timeline: "6-12 months".to_string(),
        }),
        state: StageState::Done,
    }
}

#[test]
fn failed_document_gate_preempts_everything() {
    let review = DocumentReview {
        missing_documents: vec!["bank_statement".to_string()],
        invalid_documents: Vec::new(),
    };

    let decision = synthesize(&review, None, None);

    assert_eq!(decision.status, DecisionStatus::DocumentsRequired);
    assert_eq!(decision.financial_support.approved_amount, 0.0);
    assert_eq!(decision.financial_support.duration_months, 0);
    assert_eq!(decision.missing_documents, vec!["bank_statement".to_string()]);
    assert_eq!(decision.next_steps[0], "Upload missing documents");
    assert!(decision.economic_enablement.training_programs.is_empty());
}

#[test]
fn strong_approval_disburses_the_recommended_amount() {
    let financial = financial_report(80.0, Recommendation::Approve, 15_000.0);
    let career = career_report();

    let decision = synthesize(&passing_review(), Some(&financial), Some(&career));

    assert_eq!(decision.status, DecisionStatus::Approved);
    assert_eq!(decision.financial_support.approved_amount, 15_000.0);
    assert_eq!(decision.financial_support.duration_months, 6);
    assert!(decision.missing_documents.is_empty());
}

#[test]
fn approval_below_score_floor_falls_to_review() {
    let financial = financial_report(74.0, Recommendation::Approve, 15_000.0);

    let decision = synthesize(&passing_review(), Some(&financial), None);

    assert_eq!(decision.status, DecisionStatus::ReviewRequired);
    assert_eq!(decision.financial_support.approved_amount, 0.0);
}

#[test]
fn conditional_approval_takes_the_haircut() {
    let financial = financial_report(60.0, Recommendation::ConditionalApprove, 10_000.0);

    let decision = synthesize(&passing_review(), Some(&financial), None);

    assert_eq!(decision.status, DecisionStatus::ConditionalApproval);
    assert!((decision.financial_support.approved_amount - 7_000.0).abs() < 1e-9);
    assert_eq!(decision.financial_support.duration_months, 6);
    assert_eq!(decision.next_steps[0], "Complete requirements");
}

#[test]
fn conditional_below_score_floor_falls_to_review() {
    let financial = financial_report(49.0, Recommendation::ConditionalApprove, 10_000.0);

    let decision = synthesize(&passing_review(), Some(&financial), None);

    assert_eq!(decision.status, DecisionStatus::ReviewRequired);
    assert_eq!(decision.financial_support.approved_amount, 0.0);
    assert_eq!(decision.financial_support.duration_months, 0);
}

#[test]
fn enablement_is_offered_even_when_financial_support_is_not() {
    let financial = financial_report(24.25, Recommendation::Declined, 0.0);
    let career = career_report();

    let decision = synthesize(&passing_review(), Some(&financial), Some(&career));

    assert_eq!(decision.status, DecisionStatus::ReviewRequired);
    assert_eq!(decision.financial_support.approved_amount, 0.0);
    assert_eq!(
        decision.economic_enablement.training_programs[0].name,
        "Data Analysis Bootcamp"
    );
    assert_eq!(
        decision.economic_enablement.job_matching,
        vec!["Project Coordinator".to_string()]
    );
}
