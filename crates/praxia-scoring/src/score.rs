use std::collections::BTreeMap;

use tracing::debug;

use praxia_catalog::{benchmarks, weights};
use praxia_core::models::category::Category;
use praxia_core::models::practice::PracticeProfile;
use praxia_core::models::response::{QuestionResponse, ResponseValue};
use praxia_core::models::score::{
    BusinessHealthScore, CategoryScore, GeographicAdjustment, ScorePosition,
};

use crate::topics;

/// Compute the business health score from the practice's responses.
///
/// Missing data never fails: a category with no responses scores 0, an
/// empty response map yields an overall score of 0, and benchmark lookups
/// fall back to the physiotherapy/small rows. A partially completed
/// assessment always produces a usable (lower) score.
pub fn calculate_score(
    responses: &BTreeMap<Category, Vec<QuestionResponse>>,
    profile: &PracticeProfile,
) -> BusinessHealthScore {
    debug!(
        categories = responses.len(),
        discipline = ?profile.discipline,
        size = ?profile.practice_size,
        "calculating business health score"
    );

    let categories: Vec<CategoryScore> = responses
        .iter()
        .map(|(category, answers)| score_category(*category, answers))
        .collect();

    let overall = overall_score(&categories);

    BusinessHealthScore {
        overall,
        position: ScorePosition::from_score(overall),
        categories,
        benchmarks: benchmarks::benchmark(profile.discipline, profile.practice_size),
        geographic_adjustment: profile.country.as_deref().map(|region| {
            GeographicAdjustment {
                region: region.to_string(),
                margin_offset_pct: margin_offset(region),
            }
        }),
    }
}

fn score_category(category: Category, answers: &[QuestionResponse]) -> CategoryScore {
    let (points, max_points) = answers.iter().fold((0.0, 0.0), |(p, m), answer| {
        let (earned, max) = response_points(&answer.value);
        (p + earned, m + max)
    });

    let score = if max_points == 0.0 {
        0
    } else {
        (points / max_points * 100.0).round() as u8
    };

    let (strengths, weaknesses) = topics::breakdown(answers);

    CategoryScore {
        category,
        score,
        position: ScorePosition::from_score(score),
        strengths,
        weaknesses,
    }
}

/// Points earned and the maximum available for one response value.
///
/// Numeric answers are assumed to be on a 0–5 scale and are clamped to it;
/// multi-select answers earn 2 points per selection against a fixed
/// 10-point ceiling; free text earns a neutral 3 of 5.
pub(crate) fn response_points(value: &ResponseValue) -> (f64, f64) {
    match value {
        ResponseValue::Number(n) => (n.clamp(0.0, 5.0), 5.0),
        ResponseValue::Bool(true) => (5.0, 5.0),
        ResponseValue::Bool(false) => (0.0, 5.0),
        ResponseValue::List(items) => ((2.0 * items.len() as f64).min(10.0), 10.0),
        ResponseValue::Text(_) => (3.0, 5.0),
    }
}

/// Weight-normalized average over only the categories that were assessed.
fn overall_score(categories: &[CategoryScore]) -> u8 {
    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    for cat in categories {
        let weight = weights::category_weight(cat.category);
        weighted += f64::from(cat.score) * weight;
        weight_sum += weight;
    }
    if weight_sum == 0.0 {
        0
    } else {
        (weighted / weight_sum).round() as u8
    }
}

/// Flat margin offset for the practice's region. Token matching is
/// case-sensitive and literal; the form layer normalizes region strings
/// before they reach here.
fn margin_offset(region: &str) -> f64 {
    if region.contains("AU") || region.contains("NZ") {
        -2.5
    } else if region.contains("UK") || region.contains("EU") {
        -1.5
    } else if region.contains("US") {
        0.0
    } else {
        -1.0
    }
}
