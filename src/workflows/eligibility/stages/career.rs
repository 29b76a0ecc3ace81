use serde_json::json;
use tracing::info;

use crate::config::EnrichmentConfig;

use super::super::domain::{
    AnalysisSource, ApplicationRecord, AssessmentResult, CareerSector, EnablementPlan,
    GrowthPotential, SupportCategory, TrainingProgram,
};
use super::super::enrichment::{
    self, CareerEnrichment, EnrichmentClient, EnrichmentOutcome, EnrichmentRequest, StageKind,
};
use super::super::scoring::{Assessor, NoiseSource};
use super::{StageProgress, StageReport, StageState};

/// Career enablement assessment.
///
/// Always scores under the career-development profile (employment-weighted)
/// and produces the enablement plan the decision synthesizer publishes
/// regardless of financial outcome.
pub struct CareerStage;

impl CareerStage {
    pub(crate) async fn run(
        assessor: &Assessor,
        record: &ApplicationRecord,
        enrichment: Option<&dyn EnrichmentClient>,
        settings: &EnrichmentConfig,
        noise: &dyn NoiseSource,
    ) -> StageReport {
        let mut progress = StageProgress::start();

        let mut result = assessor.assess(record, SupportCategory::CareerDevelopment, noise);
        let mut plan = rule_based_plan(record);
        progress.advance(StageState::RuleBasedComputed);

        match enrichment {
            Some(client) if settings.enabled => {
                progress.advance(StageState::EnrichmentAttempted);
                let request = EnrichmentRequest {
                    stage: StageKind::Career,
                    application_id: record.application_id.clone(),
                    payload: prompt_payload(record),
                };
                match enrichment::attempt::<CareerEnrichment>(client, settings, request).await {
                    EnrichmentOutcome::Enriched(payload) => {
                        apply(&mut result, &mut plan, payload);
                        progress.advance(StageState::Enriched);
                    }
                    EnrichmentOutcome::Failed(reason) => {
                        info!(stage = "career", reason, "retaining rule-based baseline");
                        progress.advance(StageState::RuleBasedRetained);
                    }
                }
            }
            _ => {}
        }

        progress.advance(StageState::Done);

        StageReport {
            stage: StageKind::Career,
            provenance: result.analysis_source,
            result,
            enablement: Some(plan),
            state: progress.state(),
        }
    }
}

fn prompt_payload(record: &ApplicationRecord) -> serde_json::Value {
    json!({
        "emirate": record.personal.emirate,
        "job_title": record.employment.job_title,
        "employment_status": record.employment.status.label(),
        "years_of_experience": record.employment.years_of_experience,
        "career_goals": record.request.career_goals,
        "support_type": record.request.category.label(),
    })
}

fn rule_based_plan(record: &ApplicationRecord) -> EnablementPlan {
    let sector = identify_sector(
        record.employment.job_title.as_deref(),
        record.request.career_goals.as_deref(),
    );

    EnablementPlan {
        sector,
        growth_potential: growth_potential(sector),
        training_programs: training_catalog(sector),
        job_matching: job_opportunities(&record.personal.emirate),
        progression_path: vec![
            "Complete skills assessment".to_string(),
            "Enroll in training program".to_string(),
            "Gain certifications".to_string(),
            "Apply for positions".to_string(),
            "Achieve career advancement".to_string(),
        ],
        skill_gaps: skill_gaps(record.request.career_goals.as_deref()),
        timeline: "6-12 months".to_string(),
    }
}

fn identify_sector(job_title: Option<&str>, career_goals: Option<&str>) -> CareerSector {
    let text = format!(
        "{} {}",
        job_title.unwrap_or_default(),
        career_goals.unwrap_or_default()
    )
    .to_lowercase();

    if ["technology", "digital", "data"]
        .iter()
        .any(|keyword| text.contains(keyword))
    {
        CareerSector::Technology
    } else if ["healthcare", "medical"]
        .iter()
        .any(|keyword| text.contains(keyword))
    {
        CareerSector::Healthcare
    } else if ["bank", "finance"]
        .iter()
        .any(|keyword| text.contains(keyword))
    {
        CareerSector::Finance
    } else {
        CareerSector::General
    }
}

fn growth_potential(sector: CareerSector) -> GrowthPotential {
    match sector {
        CareerSector::Technology | CareerSector::Healthcare => GrowthPotential::High,
        CareerSector::Finance | CareerSector::General => GrowthPotential::Medium,
    }
}

fn training_catalog(sector: CareerSector) -> Vec<TrainingProgram> {
    let programs: &[(&str, &str, u8)] = match sector {
        CareerSector::Healthcare => &[("Healthcare Administration", "UAE Health Authority", 6)],
        CareerSector::Finance => &[("Banking Excellence Program", "Emirates Institute", 5)],
        // General applicants are routed into the technology track, the
        // largest program catalog.
        CareerSector::Technology | CareerSector::General => &[
            ("Digital Marketing Certificate", "Dubai Future Academy", 3),
            ("Data Analysis Bootcamp", "ADEK Training", 4),
        ],
    };

    programs
        .iter()
        .map(|(name, provider, duration_months)| TrainingProgram {
            name: name.to_string(),
            provider: provider.to_string(),
            duration_months: *duration_months,
        })
        .collect()
}

fn job_opportunities(emirate: &str) -> Vec<String> {
    let openings: &[&str] = match emirate.to_lowercase().as_str() {
        "abu_dhabi" => &[
            "Government Affairs Officer",
            "Banking Specialist",
            "Project Coordinator",
        ],
        _ => &[
            "Digital Marketing Specialist",
            "Customer Service Manager",
            "Healthcare Administrator",
        ],
    };
    openings.iter().take(3).map(|role| role.to_string()).collect()
}

fn skill_gaps(career_goals: Option<&str>) -> Vec<String> {
    let goals = career_goals.unwrap_or_default().to_lowercase();
    let gaps: &[&str] = if goals.contains("digital") {
        &["Digital marketing", "Data analysis"]
    } else if goals.contains("management") {
        &["Leadership skills", "Project management"]
    } else {
        &["Professional development", "Communication skills"]
    };
    gaps.iter().map(|gap| gap.to_string()).collect()
}

/// Field-by-field override from the collaborator payload; missing fields keep
/// their rule-based values.
fn apply(result: &mut AssessmentResult, plan: &mut EnablementPlan, payload: CareerEnrichment) {
    if let Some(score) = payload.eligibility_score {
        result.score = score.clamp(0.0, 100.0);
    }
    if let Some(growth) = payload.growth_potential {
        plan.growth_potential = growth;
    }
    if let Some(gaps) = payload.skill_gaps {
        plan.skill_gaps = gaps;
    }
    if let Some(programs) = payload.training_recommendations {
        plan.training_programs = programs;
    }
    if let Some(jobs) = payload.job_opportunities {
        plan.job_matching = jobs;
    }
    if let Some(path) = payload.career_progression_path {
        plan.progression_path = path;
    }
    if let Some(timeline) = payload.recommended_timeline {
        plan.timeline = timeline;
    }
    result.analysis_source = AnalysisSource::Llm;
}
