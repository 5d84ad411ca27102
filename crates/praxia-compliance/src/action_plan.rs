use praxia_core::models::compliance::{
    ActionPlanItem, ComplianceRequirement, ComplianceState, ComplianceStatus,
};
use praxia_core::models::recommendation::RiskLevel;

/// Build the remediation plan: every non-compliant or partially compliant
/// requirement, most urgent first. Rank 1 is a high-risk gap with nothing
/// in place; rank 6 a low-risk control that only lacks evidence.
pub fn action_plan(
    statuses: &[ComplianceStatus],
    requirements: &[ComplianceRequirement],
) -> Vec<ActionPlanItem> {
    let mut items: Vec<ActionPlanItem> = statuses
        .iter()
        .filter(|s| {
            matches!(
                s.status,
                ComplianceState::NonCompliant | ComplianceState::PartiallyCompliant
            )
        })
        .filter_map(|s| {
            let req = requirements.iter().find(|r| r.id == s.requirement_id)?;
            Some(ActionPlanItem {
                requirement_id: req.id.clone(),
                title: req.title.clone(),
                risk_level: req.risk_level,
                status: s.status,
                priority_rank: priority_rank(req.risk_level, s.status),
                implementation_steps: req.implementation_steps.clone(),
            })
        })
        .collect();

    // Stable sort: equal ranks keep requirement order.
    items.sort_by_key(|item| item.priority_rank);
    items
}

/// The fixed rank table. Risk dominates; within a risk tier a missing
/// control outranks a control that is merely unevidenced.
fn priority_rank(risk: RiskLevel, status: ComplianceState) -> u8 {
    let base = match risk {
        RiskLevel::High => 1,
        RiskLevel::Medium => 3,
        RiskLevel::Low => 5,
    };
    match status {
        ComplianceState::NonCompliant => base,
        _ => base + 1,
    }
}
