//! Financial and career assessment stages.
//!
//! Both stages share the same contract: compute a rule-based baseline first,
//! then optionally let the enrichment collaborator overwrite individual
//! fields. A stage report is always produced; collaborator failure can only
//! ever downgrade the provenance back to rule-based.

mod career;
mod financial;

pub use career::CareerStage;
pub use financial::FinancialStage;

use serde::{Deserialize, Serialize};

use super::domain::{AnalysisSource, AssessmentResult, EnablementPlan};
use super::enrichment::StageKind;

/// Stage lifecycle. Transitions only move forward; a stage never re-enters
/// `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    NotStarted,
    RuleBasedComputed,
    EnrichmentAttempted,
    Enriched,
    RuleBasedRetained,
    Done,
}

impl StageState {
    fn may_advance_to(self, next: StageState) -> bool {
        use StageState::*;
        matches!(
            (self, next),
            (NotStarted, RuleBasedComputed)
                | (RuleBasedComputed, EnrichmentAttempted)
                | (RuleBasedComputed, Done)
                | (EnrichmentAttempted, Enriched)
                | (EnrichmentAttempted, RuleBasedRetained)
                | (Enriched, Done)
                | (RuleBasedRetained, Done)
        )
    }
}

/// Forward-only state tracker used while a stage runs.
#[derive(Debug)]
pub(crate) struct StageProgress {
    state: StageState,
}

impl StageProgress {
    pub(crate) fn start() -> Self {
        Self {
            state: StageState::NotStarted,
        }
    }

    pub(crate) fn advance(&mut self, next: StageState) {
        debug_assert!(
            self.state.may_advance_to(next),
            "illegal stage transition {:?} -> {next:?}",
            self.state
        );
        self.state = next;
    }

    pub(crate) fn state(&self) -> StageState {
        self.state
    }
}

/// Output of one stage invocation, consumed by the decision synthesizer and
/// surfaced to callers for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageReport {
    pub stage: StageKind,
    pub result: AssessmentResult,
    /// Present only on the career stage.
    pub enablement: Option<EnablementPlan>,
    /// Terminal lifecycle state, `Done` for every completed run.
    pub state: StageState,
    /// Which path produced the final fields.
    pub provenance: AnalysisSource,
}
