use std::collections::BTreeMap;

use jiff::civil::Date;
use jiff::Span;
use tracing::debug;

use praxia_core::models::compliance::{ComplianceRequirement, ComplianceState, ComplianceStatus};
use praxia_core::models::response::ResponseValue;

/// Classify each requirement from the practice's flat flag map.
///
/// Three flags drive the decision: `not_applicable_<id>` overrides
/// everything, then `implemented_<id>` and `evidence_<id>` together mean
/// compliant, implementation alone partial, and neither non-compliant.
/// Missing flags simply read as false; evaluation never fails.
pub fn evaluate(
    practice_data: &BTreeMap<String, ResponseValue>,
    requirements: &[ComplianceRequirement],
    today: Date,
) -> Vec<ComplianceStatus> {
    debug!(requirements = requirements.len(), "evaluating compliance");

    requirements
        .iter()
        .map(|req| {
            let status = classify(practice_data, &req.id);
            ComplianceStatus {
                requirement_id: req.id.clone(),
                status,
                last_verified: today,
                next_review_date: today
                    .saturating_add(Span::new().months(req.review_frequency.months())),
            }
        })
        .collect()
}

fn classify(practice_data: &BTreeMap<String, ResponseValue>, id: &str) -> ComplianceState {
    if flag(practice_data, "not_applicable", id) {
        return ComplianceState::NotApplicable;
    }
    let implemented = flag(practice_data, "implemented", id);
    let evidence = flag(practice_data, "evidence", id);
    match (implemented, evidence) {
        (true, true) => ComplianceState::Compliant,
        (true, false) => ComplianceState::PartiallyCompliant,
        _ => ComplianceState::NonCompliant,
    }
}

fn flag(practice_data: &BTreeMap<String, ResponseValue>, prefix: &str, id: &str) -> bool {
    practice_data
        .get(&format!("{prefix}_{id}"))
        .is_some_and(ResponseValue::is_truthy)
}
