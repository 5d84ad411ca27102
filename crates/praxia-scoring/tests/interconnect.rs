use std::collections::BTreeMap;

use praxia_core::models::category::{Category, DisciplineType, PracticeSize};
use praxia_core::models::connection::ImpactDirection;
use praxia_core::models::practice::PracticeProfile;
use praxia_core::models::response::{QuestionResponse, ResponseValue};
use praxia_scoring::analyze;

fn profile(size: PracticeSize) -> PracticeProfile {
    PracticeProfile {
        practice_name: "Coastline Physio".to_string(),
        discipline: DisciplineType::Physiotherapy,
        practice_size: size,
        country: None,
    }
}

fn answers(prefix: &str, n: usize) -> Vec<QuestionResponse> {
    (0..n)
        .map(|i| QuestionResponse {
            question_id: format!("{prefix}_q{i}"),
            value: ResponseValue::Bool(true),
            timestamp: jiff::Timestamp::UNIX_EPOCH,
        })
        .collect()
}

fn full_coverage(n: usize) -> BTreeMap<Category, Vec<QuestionResponse>> {
    Category::ALL
        .iter()
        .map(|c| (*c, answers("area", n)))
        .collect()
}

#[test]
fn strengths_stay_clamped_for_every_size_and_volume() {
    for size in [
        PracticeSize::Solo,
        PracticeSize::Small,
        PracticeSize::Medium,
        PracticeSize::Large,
        PracticeSize::Enterprise,
    ] {
        for n in [0, 1, 5, 12] {
            let report = analyze(&full_coverage(n), &profile(size));
            for c in &report.connections {
                assert!(
                    (0.0..=1.0).contains(&c.strength),
                    "{:?} -> {:?} strength {} out of range (size {:?}, n {n})",
                    c.source,
                    c.target,
                    c.strength,
                    size,
                );
            }
        }
    }
}

#[test]
fn missing_data_halves_strength_and_neutralizes_direction() {
    let report = analyze(&BTreeMap::new(), &profile(PracticeSize::Small));

    let edge = report
        .connections
        .iter()
        .find(|c| c.source == Category::Staffing && c.target == Category::PatientCare)
        .expect("edge exists");

    // Base 0.90, no size offset, halved for zero responses on both sides.
    assert_eq!(edge.strength, 0.45);
    assert_eq!(edge.impact_direction, ImpactDirection::Neutral);
}

#[test]
fn sparse_data_softens_strength() {
    let mut responses = BTreeMap::new();
    responses.insert(Category::Financial, answers("billing", 2));
    responses.insert(Category::Technology, answers("systems", 2));

    let report = analyze(&responses, &profile(PracticeSize::Small));
    let edge = report
        .connections
        .iter()
        .find(|c| c.source == Category::Financial && c.target == Category::Technology)
        .expect("edge exists");

    // Base 0.75 × 0.8 under-three softening.
    assert_eq!(edge.strength, 0.60);
    assert_eq!(edge.impact_direction, ImpactDirection::Positive);
}

#[test]
fn rich_data_boosts_strength_but_never_past_one() {
    let report = analyze(&full_coverage(12), &profile(PracticeSize::Enterprise));
    let edge = report
        .connections
        .iter()
        .find(|c| c.source == Category::Staffing && c.target == Category::PatientCare)
        .expect("edge exists");

    // Base 0.90 + 0.05 enterprise offset, ×1.05 capped at 1.0.
    assert_eq!(edge.strength, 1.0);
}

#[test]
fn connections_are_sorted_descending_by_strength() {
    let report = analyze(&full_coverage(5), &profile(PracticeSize::Medium));
    for pair in report.connections.windows(2) {
        assert!(pair[0].strength >= pair[1].strength);
    }
}

#[test]
fn extremal_categories_are_deterministic() {
    let report = analyze(&full_coverage(5), &profile(PracticeSize::Small));
    // Financial has the largest total outgoing base strength in the table;
    // PatientCare the largest incoming.
    assert_eq!(report.most_influential, Category::Financial);
    assert_eq!(report.most_dependent, Category::PatientCare);

    let again = analyze(&full_coverage(5), &profile(PracticeSize::Small));
    assert_eq!(report.most_influential, again.most_influential);
    assert_eq!(report.most_dependent, again.most_dependent);
}

#[test]
fn insights_mention_extremes_size_tier_and_strong_links() {
    let report = analyze(&full_coverage(12), &profile(PracticeSize::Solo));

    assert!(report.key_insights[0].contains(report.most_influential.label()));
    assert!(report.key_insights[1].contains(report.most_dependent.label()));
    assert!(report.key_insights[2].contains("solo practice"));

    let strong_links = report
        .key_insights
        .iter()
        .filter(|i| i.contains("critical link"))
        .count();
    assert!(strong_links <= 3);
    assert!(strong_links >= 1);
}
