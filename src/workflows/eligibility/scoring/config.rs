use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::SupportCategory;

/// Relative weight of each factor when combining sub-scores.
///
/// Sums to 1.0 by convention; the crate does not enforce this, unbalanced
/// weights are a legitimate tuning knob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightFactors {
    pub income: f64,
    pub family: f64,
    pub urgency: f64,
    pub employment: f64,
}

impl WeightFactors {
    pub fn sum(&self) -> f64 {
        self.income + self.family + self.urgency + self.employment
    }
}

/// Rule profile for one support category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleProfile {
    pub max_amount: f64,
    pub income_threshold: f64,
    pub weights: WeightFactors,
}

/// Static, versioned scoring configuration keyed by support category.
///
/// Loaded once at construction and shared read-only across concurrent runs;
/// never ambient global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRuleSet {
    profiles: BTreeMap<SupportCategory, RuleProfile>,
    fallback: RuleProfile,
    citizen_nationality: String,
}

impl ScoringRuleSet {
    /// Build a rule set from explicit profiles. The emergency profile (or the
    /// built-in default when absent) backs the unrecognized-category fallback.
    pub fn new(
        profiles: BTreeMap<SupportCategory, RuleProfile>,
        citizen_nationality: impl Into<String>,
    ) -> Self {
        let fallback = profiles
            .get(&SupportCategory::EmergencySupport)
            .cloned()
            .unwrap_or_else(default_emergency_profile);
        Self {
            profiles,
            fallback,
            citizen_nationality: citizen_nationality.into(),
        }
    }

    pub fn profile(&self, category: SupportCategory) -> Option<&RuleProfile> {
        self.profiles.get(&category)
    }

    /// Resolve the profile for a category, degrading to the emergency profile
    /// for unrecognized categories. The substitution is logged so upstream
    /// validation gaps stay visible.
    pub fn profile_or_default(&self, category: SupportCategory) -> (&RuleProfile, SupportCategory) {
        match self.profiles.get(&category) {
            Some(profile) => (profile, category),
            None => {
                tracing::warn!(
                    category = category.label(),
                    "unrecognized support category, falling back to emergency profile"
                );
                (&self.fallback, SupportCategory::EmergencySupport)
            }
        }
    }

    /// Replace the nationality string granted the citizen priority bonus.
    pub fn with_citizen_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.citizen_nationality = nationality.into();
        self
    }

    pub fn citizen_nationality(&self) -> &str {
        &self.citizen_nationality
    }
}

impl Default for ScoringRuleSet {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            SupportCategory::EmergencySupport,
            default_emergency_profile(),
        );
        profiles.insert(
            SupportCategory::FinancialAssistance,
            RuleProfile {
                max_amount: 40_000.0,
                income_threshold: 20_000.0,
                weights: WeightFactors {
                    income: 0.35,
                    family: 0.2,
                    urgency: 0.2,
                    employment: 0.25,
                },
            },
        );
        profiles.insert(
            SupportCategory::EconomicEnablement,
            RuleProfile {
                max_amount: 45_000.0,
                income_threshold: 25_000.0,
                weights: WeightFactors {
                    income: 0.25,
                    family: 0.15,
                    urgency: 0.15,
                    employment: 0.45,
                },
            },
        );
        profiles.insert(
            SupportCategory::CareerDevelopment,
            RuleProfile {
                max_amount: 35_000.0,
                income_threshold: 30_000.0,
                weights: WeightFactors {
                    income: 0.2,
                    family: 0.1,
                    urgency: 0.1,
                    employment: 0.6,
                },
            },
        );
        profiles.insert(
            SupportCategory::Both,
            RuleProfile {
                max_amount: 50_000.0,
                income_threshold: 20_000.0,
                weights: WeightFactors {
                    income: 0.3,
                    family: 0.2,
                    urgency: 0.2,
                    employment: 0.3,
                },
            },
        );
        Self::new(profiles, "UAE")
    }
}

fn default_emergency_profile() -> RuleProfile {
    RuleProfile {
        max_amount: 50_000.0,
        income_threshold: 15_000.0,
        weights: WeightFactors {
            income: 0.3,
            family: 0.25,
            urgency: 0.25,
            employment: 0.2,
        },
    }
}
