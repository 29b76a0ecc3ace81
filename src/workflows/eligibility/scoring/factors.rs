//! Pure factor scorers producing bounded sub-scores.
//!
//! The income curve is piecewise linear and intentionally discontinuous at
//! its segment boundaries; the jumps are part of the published rule set, not
//! an artifact to smooth over.

use super::super::domain::{EmploymentStatus, UrgencyLevel};

/// Treat malformed numeric inputs as "no value" rather than failing the run.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Income need score in [0, 25]. Zero salary reads as unemployed and scores
/// maximum need.
pub(crate) fn income_score(salary: f64, threshold: f64) -> f64 {
    let salary = sanitize(salary);
    if !(threshold > 0.0) || salary == 0.0 {
        return if salary == 0.0 { 25.0 } else { 0.0 };
    }

    let ratio = salary / threshold;
    if ratio <= 0.5 {
        25.0
    } else if ratio <= 1.0 {
        20.0 - ratio * 5.0
    } else if ratio <= 1.5 {
        15.0 - (ratio - 1.0) * 15.0
    } else {
        (5.0 - (ratio - 1.5) * 2.0).max(0.0)
    }
}

/// Family burden score in [0, 25].
pub(crate) fn family_score(family_size: u8, dependents: u8) -> f64 {
    let mut score = (f64::from(dependents) * 3.0).min(15.0);

    if family_size > 6 {
        score += 5.0;
    } else if family_size > 4 {
        score += 3.0;
    }

    if family_size > 0 {
        let ratio = f64::from(dependents) / f64::from(family_size);
        if ratio > 0.7 {
            score += 5.0;
        } else if ratio >= 0.5 {
            score += 3.0;
        }
    }

    score.min(25.0)
}

pub(crate) fn dependency_ratio(family_size: u8, dependents: u8) -> f64 {
    if family_size > 0 {
        f64::from(dependents) / f64::from(family_size)
    } else {
        0.0
    }
}

/// Employment need score in [0, 25].
pub(crate) fn employment_score(status: EmploymentStatus, experience_years: u8) -> f64 {
    let base = match status {
        EmploymentStatus::Unemployed => 25.0,
        EmploymentStatus::Retired => 20.0,
        EmploymentStatus::SelfEmployed => 15.0,
        EmploymentStatus::Employed => 5.0,
        EmploymentStatus::Unknown => 10.0,
    };

    match status {
        EmploymentStatus::SelfEmployed if experience_years > 5 => base + 5.0,
        EmploymentStatus::Employed if experience_years < 2 => base + 5.0,
        _ => base,
    }
}

pub(crate) fn urgency_score(level: UrgencyLevel) -> f64 {
    match level {
        UrgencyLevel::Low => 5.0,
        UrgencyLevel::Medium => 10.0,
        UrgencyLevel::High => 18.0,
        UrgencyLevel::Critical => 25.0,
    }
}

/// Penalty in [-15, 0] for requesting close to or above the category cap.
pub(crate) fn amount_penalty(requested: f64, max_amount: f64) -> f64 {
    let requested = sanitize(requested);
    if !(max_amount > 0.0) {
        return if requested > 0.0 { -15.0 } else { 0.0 };
    }

    if requested > max_amount {
        -15.0
    } else if requested > max_amount * 0.8 {
        -8.0
    } else if requested > max_amount * 0.5 {
        -3.0
    } else {
        0.0
    }
}

/// Citizen priority bonus, 5 or 0.
pub(crate) fn nationality_bonus(nationality: &str, citizen_nationality: &str) -> f64 {
    if nationality == citizen_nationality {
        5.0
    } else {
        0.0
    }
}
