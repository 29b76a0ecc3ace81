use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::EnrichmentConfig;
use crate::workflows::eligibility::domain::{
    ApplicationId, ApplicationRecord, EmploymentProfile, EmploymentStatus, PersonalProfile,
    SupportCategory, SupportRequest, UrgencyLevel,
};
use crate::workflows::eligibility::enrichment::{
    EnrichmentClient, EnrichmentError, EnrichmentRequest, StageKind,
};
use crate::workflows::eligibility::scoring::{Assessor, ScoringRuleSet};

/// Scenario fixture: unemployed citizen, family of four with two dependents,
/// requesting 15k emergency support at high urgency.
pub(super) fn emergency_record() -> ApplicationRecord {
    ApplicationRecord {
        application_id: ApplicationId("APP-0001".to_string()),
        personal: PersonalProfile {
            family_size: 4,
            dependents: 2,
            nationality: "UAE".to_string(),
            emirate: "dubai".to_string(),
        },
        employment: EmploymentProfile {
            status: EmploymentStatus::Unemployed,
            monthly_salary: 0.0,
            years_of_experience: 5,
            job_title: None,
        },
        request: SupportRequest {
            category: SupportCategory::EmergencySupport,
            amount_requested: 15_000.0,
            urgency: UrgencyLevel::High,
            justification: Some("Loss of household income".to_string()),
            career_goals: None,
        },
    }
}

/// Employed applicant with digital career goals, used for the career stage.
pub(super) fn career_record() -> ApplicationRecord {
    ApplicationRecord {
        application_id: ApplicationId("APP-0002".to_string()),
        personal: PersonalProfile {
            family_size: 3,
            dependents: 1,
            nationality: "IN".to_string(),
            emirate: "abu_dhabi".to_string(),
        },
        employment: EmploymentProfile {
            status: EmploymentStatus::Employed,
            monthly_salary: 8_000.0,
            years_of_experience: 1,
            job_title: Some("Sales Associate".to_string()),
        },
        request: SupportRequest {
            category: SupportCategory::CareerDevelopment,
            amount_requested: 10_000.0,
            urgency: UrgencyLevel::Medium,
            justification: None,
            career_goals: Some("Move into digital marketing".to_string()),
        },
    }
}

pub(super) fn assessor() -> Assessor {
    Assessor::new(ScoringRuleSet::default())
}

/// Enrichment settings tuned for tests: a single attempt and no backoff so
/// failure paths resolve immediately.
pub(super) fn fast_settings() -> EnrichmentConfig {
    EnrichmentConfig {
        enabled: true,
        call_timeout: std::time::Duration::from_millis(250),
        max_attempts: 1,
        retry_backoff: std::time::Duration::from_millis(0),
    }
}

/// Scripted collaborator returning a fixed payload per stage and counting
/// invocations.
pub(super) struct ScriptedEnrichment {
    responses: Mutex<HashMap<StageKind, Value>>,
    pub(super) calls: AtomicUsize,
}

impl ScriptedEnrichment {
    pub(super) fn new(responses: HashMap<StageKind, Value>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnrichmentClient for ScriptedEnrichment {
    async fn analyze(&self, request: EnrichmentRequest) -> Result<Value, EnrichmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let responses = self.responses.lock().expect("responses mutex poisoned");
        responses
            .get(&request.stage)
            .cloned()
            .ok_or_else(|| EnrichmentError::Rejected("no scripted response".to_string()))
    }
}

/// Collaborator that never answers within any reasonable deadline.
pub(super) struct StalledEnrichment {
    pub(super) calls: AtomicUsize,
}

impl StalledEnrichment {
    pub(super) fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EnrichmentClient for StalledEnrichment {
    async fn analyze(&self, _request: EnrichmentRequest) -> Result<Value, EnrichmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        Ok(Value::Null)
    }
}

/// Collaborator that always fails at the transport layer.
pub(super) struct FailingEnrichment {
    pub(super) calls: AtomicUsize,
}

impl FailingEnrichment {
    pub(super) fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnrichmentClient for FailingEnrichment {
    async fn analyze(&self, _request: EnrichmentRequest) -> Result<Value, EnrichmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(EnrichmentError::Transport("connection refused".to_string()))
    }
}
