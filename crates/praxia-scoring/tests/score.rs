use std::collections::BTreeMap;

use praxia_core::models::category::{Category, DisciplineType, PracticeSize};
use praxia_core::models::practice::PracticeProfile;
use praxia_core::models::response::{QuestionResponse, ResponseValue};
use praxia_core::models::score::ScorePosition;
use praxia_scoring::calculate_score;

fn profile(country: Option<&str>) -> PracticeProfile {
    PracticeProfile {
        practice_name: "Coastline Physio".to_string(),
        discipline: DisciplineType::Physiotherapy,
        practice_size: PracticeSize::Small,
        country: country.map(str::to_string),
    }
}

fn answer(question_id: &str, value: ResponseValue) -> QuestionResponse {
    QuestionResponse {
        question_id: question_id.to_string(),
        value,
        timestamp: jiff::Timestamp::UNIX_EPOCH,
    }
}

fn bools(prefix: &str, values: &[bool]) -> Vec<QuestionResponse> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| answer(&format!("{prefix}_q{i}"), ResponseValue::Bool(*v)))
        .collect()
}

#[test]
fn overall_renormalizes_weights_over_present_categories() {
    // Financial 80 (weight .20), Operations 60 (weight .15):
    // round((80*.20 + 60*.15) / .35) = round(71.43) = 71.
    let mut responses = BTreeMap::new();
    responses.insert(Category::Financial, bools("billing", &[true, true, true, true, false]));
    responses.insert(Category::Operations, bools("roster", &[true, true, true, false, false]));

    let health = calculate_score(&responses, &profile(None));
    assert_eq!(health.category_score(Category::Financial), Some(80));
    assert_eq!(health.category_score(Category::Operations), Some(60));
    assert_eq!(health.overall, 71);
}

#[test]
fn empty_assessment_scores_zero_without_failing() {
    let health = calculate_score(&BTreeMap::new(), &profile(None));
    assert_eq!(health.overall, 0);
    assert_eq!(health.position, ScorePosition::Critical);
    assert!(health.categories.is_empty());
}

#[test]
fn category_with_no_responses_scores_zero() {
    let mut responses = BTreeMap::new();
    responses.insert(Category::Marketing, Vec::new());
    let health = calculate_score(&responses, &profile(None));
    assert_eq!(health.category_score(Category::Marketing), Some(0));
}

#[test]
fn position_thresholds_are_inclusive_and_contiguous() {
    let expected = [
        (85, ScorePosition::Exceptional),
        (84, ScorePosition::Strong),
        (75, ScorePosition::Strong),
        (74, ScorePosition::Stable),
        (65, ScorePosition::Stable),
        (64, ScorePosition::Concerning),
        (50, ScorePosition::Concerning),
        (49, ScorePosition::Critical),
        (0, ScorePosition::Critical),
    ];
    for (score, position) in expected {
        assert_eq!(ScorePosition::from_score(score), position, "score {score}");
    }
}

#[test]
fn each_response_shape_earns_its_own_points() {
    let mut responses = BTreeMap::new();
    // A numeric answer above the 0-5 scale is capped, not rejected.
    responses.insert(
        Category::Financial,
        vec![answer("billing_scale", ResponseValue::Number(7.0))],
    );
    // Three selections earn 6 of the fixed 10-point ceiling.
    responses.insert(
        Category::Technology,
        vec![answer(
            "systems_in_use",
            ResponseValue::List(vec!["pms".into(), "telehealth".into(), "sms".into()]),
        )],
    );
    // Free text earns a neutral 3 of 5.
    responses.insert(
        Category::Marketing,
        vec![answer("channels_notes", ResponseValue::Text("word of mouth".into()))],
    );

    let health = calculate_score(&responses, &profile(None));
    assert_eq!(health.category_score(Category::Financial), Some(100));
    assert_eq!(health.category_score(Category::Technology), Some(60));
    assert_eq!(health.category_score(Category::Marketing), Some(60));
}

#[test]
fn geographic_adjustment_matches_region_tokens() {
    let cases = [("AU", -2.5), ("NZ", -2.5), ("UK", -1.5), ("EU", -1.5), ("US", 0.0), ("CA", -1.0)];
    for (region, expected) in cases {
        let health = calculate_score(&BTreeMap::new(), &profile(Some(region)));
        let adjustment = health.geographic_adjustment.expect("region supplied");
        assert_eq!(adjustment.margin_offset_pct, expected, "region {region}");
    }

    let health = calculate_score(&BTreeMap::new(), &profile(None));
    assert!(health.geographic_adjustment.is_none());
}

#[test]
fn topic_breakdown_is_deterministic_and_content_driven() {
    let mut responses = BTreeMap::new();
    responses.insert(
        Category::Operations,
        vec![
            answer("booking_online", ResponseValue::Bool(true)),
            answer("booking_reminders", ResponseValue::Bool(true)),
            answer("waitlist_managed", ResponseValue::Bool(false)),
        ],
    );

    let first = calculate_score(&responses, &profile(None));
    let second = calculate_score(&responses, &profile(None));

    let ops = &first.categories[0];
    assert!(ops.strengths.iter().any(|s| s.contains("Booking")));
    assert!(ops.weaknesses.iter().any(|w| w.contains("Waitlist")));
    assert_eq!(ops.strengths, second.categories[0].strengths);
    assert_eq!(ops.weaknesses, second.categories[0].weaknesses);
}

#[test]
fn unknown_discipline_and_size_fall_back_for_benchmarks() {
    let mut p = profile(None);
    p.discipline = DisciplineType::Podiatry;
    let fallback = calculate_score(&BTreeMap::new(), &p);
    let physio = calculate_score(&BTreeMap::new(), &profile(None));
    assert_eq!(fallback.benchmarks.industry, physio.benchmarks.industry);
    assert_eq!(fallback.benchmarks.similar_size, physio.benchmarks.similar_size);
}
