use std::collections::BTreeMap;

use jiff::civil::{date, Date};

use praxia_compliance::{action_plan, dashboard, evaluate};
use praxia_core::models::compliance::{ComplianceRequirement, ComplianceState, FrameworkType};
use praxia_core::models::recommendation::RiskLevel;
use praxia_core::models::response::ResponseValue;
use praxia_core::models::sop::ReviewFrequency;

fn today() -> Date {
    date(2026, 3, 1)
}

fn requirement(id: &str, risk: RiskLevel, frequency: ReviewFrequency) -> ComplianceRequirement {
    ComplianceRequirement {
        id: id.to_string(),
        title: format!("Requirement {id}"),
        description: String::new(),
        framework_type: FrameworkType::ClinicalGovernance,
        risk_level: risk,
        implementation_steps: vec!["do the thing".to_string()],
        review_frequency: frequency,
    }
}

fn flags(pairs: &[(&str, bool)]) -> BTreeMap<String, ResponseValue> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ResponseValue::Bool(*v)))
        .collect()
}

#[test]
fn statuses_follow_the_flag_table() {
    let requirements = vec![
        requirement("a", RiskLevel::High, ReviewFrequency::Annually),
        requirement("b", RiskLevel::High, ReviewFrequency::Annually),
        requirement("c", RiskLevel::High, ReviewFrequency::Annually),
        requirement("d", RiskLevel::High, ReviewFrequency::Annually),
    ];
    let data = flags(&[
        ("implemented_a", true),
        ("evidence_a", true),
        ("implemented_b", true),
        ("not_applicable_c", true),
    ]);

    let statuses = evaluate(&data, &requirements, today());
    assert_eq!(statuses[0].status, ComplianceState::Compliant);
    assert_eq!(statuses[1].status, ComplianceState::PartiallyCompliant);
    assert_eq!(statuses[2].status, ComplianceState::NotApplicable);
    assert_eq!(statuses[3].status, ComplianceState::NonCompliant);
}

#[test]
fn not_applicable_overrides_implementation_flags() {
    let requirements = vec![requirement("a", RiskLevel::Low, ReviewFrequency::Annually)];
    let data = flags(&[
        ("implemented_a", true),
        ("evidence_a", true),
        ("not_applicable_a", true),
    ]);
    let statuses = evaluate(&data, &requirements, today());
    assert_eq!(statuses[0].status, ComplianceState::NotApplicable);
}

#[test]
fn non_boolean_flags_use_truthiness() {
    let requirements = vec![requirement("a", RiskLevel::Low, ReviewFrequency::Annually)];
    let mut data = BTreeMap::new();
    data.insert("implemented_a".to_string(), ResponseValue::Text("yes".to_string()));
    data.insert("evidence_a".to_string(), ResponseValue::Text(String::new()));

    let statuses = evaluate(&data, &requirements, today());
    assert_eq!(statuses[0].status, ComplianceState::PartiallyCompliant);
}

#[test]
fn review_dates_follow_requirement_frequency() {
    let requirements = vec![
        requirement("m", RiskLevel::Low, ReviewFrequency::Monthly),
        requirement("q", RiskLevel::Low, ReviewFrequency::Quarterly),
    ];
    let statuses = evaluate(&BTreeMap::new(), &requirements, today());
    assert_eq!(statuses[0].next_review_date, date(2026, 4, 1));
    assert_eq!(statuses[1].next_review_date, date(2026, 6, 1));
    assert_eq!(statuses[0].last_verified, today());
}

#[test]
fn overall_percentage_excludes_not_applicable() {
    // 4 compliant, 2 partial, 1 not applicable, 1 non-compliant:
    // (4 + 0.5*2) / 7 * 100 = 71.43%.
    let ids = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let requirements: Vec<_> = ids
        .iter()
        .map(|id| requirement(id, RiskLevel::Medium, ReviewFrequency::Annually))
        .collect();
    let data = flags(&[
        ("implemented_a", true),
        ("evidence_a", true),
        ("implemented_b", true),
        ("evidence_b", true),
        ("implemented_c", true),
        ("evidence_c", true),
        ("implemented_d", true),
        ("evidence_d", true),
        ("implemented_e", true),
        ("implemented_f", true),
        ("not_applicable_g", true),
    ]);

    let statuses = evaluate(&data, &requirements, today());
    let board = dashboard(&statuses, &requirements, today());
    assert!((board.overall_pct - 500.0 / 7.0).abs() < 1e-9, "got {}", board.overall_pct);
}

#[test]
fn action_plan_rank_table_orders_by_risk_then_status() {
    let requirements = vec![
        requirement("low-partial", RiskLevel::Low, ReviewFrequency::Annually),
        requirement("high-partial", RiskLevel::High, ReviewFrequency::Annually),
        requirement("medium-non", RiskLevel::Medium, ReviewFrequency::Annually),
        requirement("high-non", RiskLevel::High, ReviewFrequency::Annually),
        requirement("compliant", RiskLevel::High, ReviewFrequency::Annually),
    ];
    let data = flags(&[
        ("implemented_low-partial", true),
        ("implemented_high-partial", true),
        ("implemented_compliant", true),
        ("evidence_compliant", true),
    ]);

    let statuses = evaluate(&data, &requirements, today());
    let plan = action_plan(&statuses, &requirements);

    let order: Vec<&str> = plan.iter().map(|i| i.requirement_id.as_str()).collect();
    assert_eq!(order, ["high-non", "high-partial", "medium-non", "low-partial"]);
    assert_eq!(plan[0].priority_rank, 1);
    assert_eq!(plan[1].priority_rank, 2);
    assert_eq!(plan[2].priority_rank, 3);
    assert_eq!(plan[3].priority_rank, 6);
}

#[test]
fn dashboard_groups_by_framework_and_risk() {
    let requirements = praxia_catalog::requirements::all();
    let data = flags(&[
        ("implemented_privacy-policy", true),
        ("evidence_privacy-policy", true),
        ("implemented_breach-response-plan", true),
    ]);

    let statuses = evaluate(&data, requirements, today());
    let board = dashboard(&statuses, requirements, today());

    let privacy = board
        .by_framework
        .iter()
        .find(|g| g.label == "Privacy")
        .expect("privacy group");
    // 1 compliant + 0.5 partial of 3 applicable privacy requirements.
    assert!((privacy.compliance_pct - 50.0).abs() < 1e-9);
    assert_eq!(privacy.applicable_count, 3);

    assert!(board.by_risk.iter().any(|g| g.label == "High risk"));
}

#[test]
fn upcoming_reviews_are_windowed_and_sorted() {
    let requirements = vec![
        requirement("monthly", RiskLevel::Low, ReviewFrequency::Monthly),
        requirement("quarterly", RiskLevel::Low, ReviewFrequency::Quarterly),
        requirement("na-monthly", RiskLevel::Low, ReviewFrequency::Monthly),
    ];
    let data = flags(&[("not_applicable_na-monthly", true)]);

    // April has 30 days, so the monthly review lands exactly on the
    // window boundary and the quarterly one falls well outside it.
    let start = date(2026, 4, 1);
    let statuses = evaluate(&data, &requirements, start);
    let board = dashboard(&statuses, &requirements, start);

    assert_eq!(board.upcoming_reviews.len(), 1);
    assert_eq!(board.upcoming_reviews[0].requirement_id, "monthly");
    assert_eq!(board.upcoming_reviews[0].due, date(2026, 5, 1));
}