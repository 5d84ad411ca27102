use std::collections::HashMap;

use tracing::debug;

use praxia_catalog::recommendations;
use praxia_core::models::category::Category;
use praxia_core::models::practice::PracticeProfile;
use praxia_core::models::recommendation::{
    Effort, Priority, RankedRecommendation, Recommendation, RecommendationSet, RiskLevel,
    Timeframe,
};
use praxia_core::models::score::BusinessHealthScore;

const MAX_TOP_PRIORITIES: usize = 5;
const MAX_PER_CATEGORY: usize = 2;

/// Produce the full recommendation set for one scoring run.
///
/// Catalog entries are filtered for relevance to this practice, ranked,
/// and bucketed. A category with no score counts as 0, so an unassessed
/// area surfaces its recommendations rather than hiding them.
pub fn generate(health: &BusinessHealthScore, profile: &PracticeProfile) -> RecommendationSet {
    let ranked = rank(health, profile);
    debug!(
        relevant = ranked.len(),
        overall = health.overall,
        "generated recommendation set"
    );

    let quick_wins = ranked
        .iter()
        .map(|r| &r.recommendation)
        .filter(|r| is_quick_win(r))
        .cloned()
        .collect();

    let strategic_initiatives = ranked
        .iter()
        .map(|r| &r.recommendation)
        .filter(|r| is_strategic_initiative(r))
        .cloned()
        .collect();

    let compliance_priorities = ranked
        .iter()
        .map(|r| &r.recommendation)
        .filter(|r| {
            matches!(
                r.regulatory_relevance,
                Some(RiskLevel::High) | Some(RiskLevel::Medium)
            )
        })
        .cloned()
        .collect();

    let top_priorities = top_priorities(&ranked, health);

    RecommendationSet {
        ranked,
        quick_wins,
        strategic_initiatives,
        compliance_priorities,
        top_priorities,
    }
}

fn rank(health: &BusinessHealthScore, profile: &PracticeProfile) -> Vec<RankedRecommendation> {
    let mut ranked: Vec<RankedRecommendation> = recommendations::all()
        .iter()
        .filter(|rec| is_relevant(rec, health, profile))
        .map(|rec| RankedRecommendation {
            recommendation: rec.clone(),
            rank_score: rank_score(rec, health),
        })
        .collect();

    // Stable sort: equal scores keep catalog order.
    ranked.sort_by(|a, b| b.rank_score.total_cmp(&a.rank_score));
    ranked
}

fn is_relevant(
    rec: &Recommendation,
    health: &BusinessHealthScore,
    profile: &PracticeProfile,
) -> bool {
    if let Some(disciplines) = &rec.practice_type_relevance
        && !disciplines.contains(&profile.discipline)
    {
        return false;
    }

    if let Some(sizes) = &rec.practice_size_relevance
        && !sizes.contains(&profile.practice_size)
    {
        return false;
    }

    if let Some(regions) = &rec.geographic_relevance {
        // Geographically targeted advice is withheld when we don't know
        // where the practice is.
        let Some(country) = profile.country.as_deref() else {
            return false;
        };
        let country = country.to_lowercase();
        if !regions.iter().any(|r| country.contains(&r.to_lowercase())) {
            return false;
        }
    }

    // Recommendations self-suppress once the category is already strong.
    let category_score = health.category_score(rec.category).unwrap_or(0);
    let suppressed_at = match rec.priority {
        Priority::High => 85,
        Priority::Medium => 75,
        Priority::Low => 65,
    };
    category_score < suppressed_at
}

fn rank_score(rec: &Recommendation, health: &BusinessHealthScore) -> f64 {
    let category_score = f64::from(health.category_score(rec.category).unwrap_or(0));

    let priority_bonus = match rec.priority {
        Priority::High => 30.0,
        Priority::Medium => 20.0,
        Priority::Low => 10.0,
    };

    let regulatory_bonus = match rec.regulatory_relevance {
        Some(RiskLevel::High) => 25.0,
        Some(RiskLevel::Medium) => 15.0,
        Some(RiskLevel::Low) => 5.0,
        None => 0.0,
    };

    let timeframe_bonus = match rec.timeframe {
        Timeframe::Immediate => 15.0,
        Timeframe::ShortTerm => 10.0,
        Timeframe::LongTerm => 5.0,
    };

    (100.0 - category_score) * 0.5
        + priority_bonus
        + rec.estimated_roi.average() * 0.5
        + regulatory_bonus
        + timeframe_bonus
}

fn is_quick_win(rec: &Recommendation) -> bool {
    matches!(rec.priority, Priority::High | Priority::Medium)
        && rec.effort == Effort::Minimal
        && matches!(rec.timeframe, Timeframe::Immediate | Timeframe::ShortTerm)
}

fn is_strategic_initiative(rec: &Recommendation) -> bool {
    rec.priority == Priority::High
        && matches!(rec.effort, Effort::Moderate | Effort::Significant)
        && matches!(rec.timeframe, Timeframe::ShortTerm | Timeframe::LongTerm)
        && rec.estimated_roi.min >= 15.0
}

/// Up to five entries: the weakest three categories get their best entry
/// first, a high-risk compliance item is forced in, and the rest fill
/// from the global ranking with at most two entries per category.
fn top_priorities(
    ranked: &[RankedRecommendation],
    health: &BusinessHealthScore,
) -> Vec<Recommendation> {
    let mut selected: Vec<Recommendation> = Vec::new();
    let mut per_category: HashMap<Category, usize> = HashMap::new();

    fn push(
        rec: &Recommendation,
        selected: &mut Vec<Recommendation>,
        per_category: &mut HashMap<Category, usize>,
    ) {
        if selected.len() >= MAX_TOP_PRIORITIES
            || selected.iter().any(|s| s.id == rec.id)
            || per_category.get(&rec.category).copied().unwrap_or(0) >= MAX_PER_CATEGORY
        {
            return;
        }
        *per_category.entry(rec.category).or_insert(0) += 1;
        selected.push(rec.clone());
    }

    for category in weakest_categories(health) {
        if let Some(best) = ranked.iter().find(|r| r.recommendation.category == category) {
            push(&best.recommendation, &mut selected, &mut per_category);
        }
    }

    let has_high_risk_compliance = selected.iter().any(|r| {
        r.category == Category::Compliance && r.regulatory_relevance == Some(RiskLevel::High)
    });
    if !has_high_risk_compliance
        && let Some(forced) = ranked.iter().find(|r| {
            r.recommendation.category == Category::Compliance
                && r.recommendation.regulatory_relevance == Some(RiskLevel::High)
        })
    {
        push(&forced.recommendation, &mut selected, &mut per_category);
    }

    for entry in ranked {
        if selected.len() >= MAX_TOP_PRIORITIES {
            break;
        }
        push(&entry.recommendation, &mut selected, &mut per_category);
    }

    selected
}

/// The three lowest-scoring assessed categories, ties by declaration order.
fn weakest_categories(health: &BusinessHealthScore) -> Vec<Category> {
    let mut scored: Vec<(u8, Category)> = health
        .categories
        .iter()
        .map(|c| (c.score, c.category))
        .collect();
    scored.sort_by_key(|(score, category)| (*score, *category));
    scored.into_iter().take(3).map(|(_, c)| c).collect()
}
