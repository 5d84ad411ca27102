use std::collections::BTreeMap;

use jiff::civil::Date;
use jiff::Span;

use praxia_core::models::compliance::{
    ComplianceDashboard, ComplianceRequirement, ComplianceState, ComplianceStatus,
    GroupCompliance, UpcomingReview,
};
use praxia_core::models::recommendation::RiskLevel;

const REVIEW_WINDOW_DAYS: i32 = 30;

/// Aggregate the dashboard figures for one evaluation run.
pub fn dashboard(
    statuses: &[ComplianceStatus],
    requirements: &[ComplianceRequirement],
    today: Date,
) -> ComplianceDashboard {
    let joined: Vec<(&ComplianceStatus, &ComplianceRequirement)> = statuses
        .iter()
        .filter_map(|s| {
            requirements
                .iter()
                .find(|r| r.id == s.requirement_id)
                .map(|r| (s, r))
        })
        .collect();

    let overall_pct = weighted_pct(joined.iter().map(|(s, _)| s.status));

    let mut frameworks: BTreeMap<&str, Vec<ComplianceState>> = BTreeMap::new();
    for (status, req) in &joined {
        frameworks
            .entry(req.framework_type.label())
            .or_default()
            .push(status.status);
    }
    let by_framework = frameworks
        .into_iter()
        .map(|(label, states)| group(label, &states))
        .collect();

    let mut by_risk = Vec::new();
    for (risk, label) in [
        (RiskLevel::High, "High risk"),
        (RiskLevel::Medium, "Medium risk"),
        (RiskLevel::Low, "Low risk"),
    ] {
        let states: Vec<ComplianceState> = joined
            .iter()
            .filter(|(_, r)| r.risk_level == risk)
            .map(|(s, _)| s.status)
            .collect();
        if !states.is_empty() {
            by_risk.push(group(label, &states));
        }
    }

    let window_end = today.saturating_add(Span::new().days(REVIEW_WINDOW_DAYS));
    let mut upcoming_reviews: Vec<UpcomingReview> = joined
        .iter()
        .filter(|(s, _)| s.status != ComplianceState::NotApplicable)
        .filter(|(s, _)| s.next_review_date >= today && s.next_review_date <= window_end)
        .map(|(s, r)| UpcomingReview {
            requirement_id: r.id.clone(),
            title: r.title.clone(),
            due: s.next_review_date,
        })
        .collect();
    upcoming_reviews.sort_by_key(|r| r.due);

    ComplianceDashboard {
        overall_pct,
        by_framework,
        by_risk,
        upcoming_reviews,
    }
}

fn group(label: &str, states: &[ComplianceState]) -> GroupCompliance {
    GroupCompliance {
        label: label.to_string(),
        compliance_pct: weighted_pct(states.iter().copied()),
        applicable_count: states
            .iter()
            .filter(|s| **s != ComplianceState::NotApplicable)
            .count(),
    }
}

/// (compliant + 0.5 × partially compliant) / applicable × 100, with
/// not-applicable entries out of the denominator. An all-not-applicable
/// group reads as fully compliant.
fn weighted_pct(states: impl Iterator<Item = ComplianceState>) -> f64 {
    let mut compliant = 0usize;
    let mut partial = 0usize;
    let mut applicable = 0usize;
    for state in states {
        match state {
            ComplianceState::Compliant => {
                compliant += 1;
                applicable += 1;
            }
            ComplianceState::PartiallyCompliant => {
                partial += 1;
                applicable += 1;
            }
            ComplianceState::NonCompliant => applicable += 1,
            ComplianceState::NotApplicable => {}
        }
    }
    if applicable == 0 {
        100.0
    } else {
        (compliant as f64 + 0.5 * partial as f64) / applicable as f64 * 100.0
    }
}
