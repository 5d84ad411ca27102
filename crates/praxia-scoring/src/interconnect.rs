use std::collections::BTreeMap;

use tracing::debug;

use praxia_catalog::adjacency::{self, AdjacencyEdge};
use praxia_core::models::category::{Category, PracticeSize};
use praxia_core::models::connection::{CategoryConnection, ImpactDirection, InterconnectednessReport};
use praxia_core::models::practice::PracticeProfile;
use praxia_core::models::response::QuestionResponse;

/// Analyze how the practice's business areas influence each other.
///
/// Every edge in the static adjacency table is adjusted for practice size
/// and for how much data each side actually has, then the extremal nodes
/// and templated insights are derived. Fully deterministic: identical
/// inputs always produce an identical report.
pub fn analyze(
    responses: &BTreeMap<Category, Vec<QuestionResponse>>,
    profile: &PracticeProfile,
) -> InterconnectednessReport {
    debug!(
        categories = responses.len(),
        size = ?profile.practice_size,
        "analyzing category interconnectedness"
    );

    let mut connections: Vec<CategoryConnection> = adjacency::edges()
        .iter()
        .map(|edge| build_connection(edge, responses, profile.practice_size))
        .collect();

    // Descending by strength; source/target declaration order breaks ties
    // so the ordering is stable across runs.
    connections.sort_by(|a, b| {
        b.strength
            .total_cmp(&a.strength)
            .then(a.source.cmp(&b.source))
            .then(a.target.cmp(&b.target))
    });

    let most_influential = extremal(&connections, |c| c.source);
    let most_dependent = extremal(&connections, |c| c.target);

    let key_insights = insights(&connections, most_influential, most_dependent, profile);

    InterconnectednessReport {
        connections,
        most_influential,
        most_dependent,
        key_insights,
    }
}

fn build_connection(
    edge: &AdjacencyEdge,
    responses: &BTreeMap<Category, Vec<QuestionResponse>>,
    size: PracticeSize,
) -> CategoryConnection {
    let source_n = responses.get(&edge.source).map_or(0, Vec::len);
    let target_n = responses.get(&edge.target).map_or(0, Vec::len);

    let sized = (edge.base_strength + adjacency::size_offset(size)).clamp(0.0, 1.0);
    let adjusted = confidence_adjusted(sized, source_n, target_n).clamp(0.0, 1.0);
    let strength = (adjusted * 100.0).round() / 100.0;

    // A side with no data cannot support a directional claim.
    let impact_direction = if source_n == 0 || target_n == 0 {
        ImpactDirection::Neutral
    } else {
        edge.impact_direction
    };

    CategoryConnection {
        source: edge.source,
        target: edge.target,
        strength,
        description: edge.description.to_string(),
        impact_direction,
        research_basis: edge.research_basis.map(str::to_string),
    }
}

/// Scale an edge by how much evidence each side has: halve it when a side
/// is empty, soften it below three responses, and nudge it up (capped at
/// 1.0) when both sides are well covered.
fn confidence_adjusted(strength: f64, source_n: usize, target_n: usize) -> f64 {
    if source_n == 0 || target_n == 0 {
        strength * 0.5
    } else if source_n < 3 || target_n < 3 {
        strength * 0.8
    } else if source_n >= 10 && target_n >= 10 {
        (strength * 1.05).min(1.0)
    } else {
        strength
    }
}

/// Category with the highest summed strength on one side of its edges.
/// Strict comparison keeps the earliest declared category on ties.
fn extremal(
    connections: &[CategoryConnection],
    side: impl Fn(&CategoryConnection) -> Category,
) -> Category {
    let mut best = Category::ALL[0];
    let mut best_total = f64::MIN;
    for category in Category::ALL {
        let total: f64 = connections
            .iter()
            .filter(|c| side(c) == category)
            .map(|c| c.strength)
            .sum();
        if total > best_total {
            best = category;
            best_total = total;
        }
    }
    best
}

fn insights(
    connections: &[CategoryConnection],
    most_influential: Category,
    most_dependent: Category,
    profile: &PracticeProfile,
) -> Vec<String> {
    let mut out = vec![
        format!(
            "{} exerts the strongest influence across the practice; improvements there \
             compound through every connected area.",
            most_influential.label(),
        ),
        format!(
            "{} depends most heavily on the health of other areas, so weaknesses \
             elsewhere tend to surface there first.",
            most_dependent.label(),
        ),
        size_insight(profile.practice_size).to_string(),
    ];

    for connection in connections.iter().filter(|c| c.strength > 0.8).take(3) {
        out.push(format!(
            "{} → {} is a critical link: {}",
            connection.source.label(),
            connection.target.label(),
            connection.description,
        ));
    }

    out
}

fn size_insight(size: PracticeSize) -> &'static str {
    match size {
        PracticeSize::Solo => {
            "In a solo practice every area runs through one person, so a single \
             weak category drags the others down quickly."
        }
        PracticeSize::Small => {
            "Small practices feel cross-category effects fast; a change in one \
             area usually shows up in the others within a quarter."
        }
        PracticeSize::Medium => {
            "At medium size, dedicated roles start to buffer categories from each \
             other, but shared systems keep them tightly coupled."
        }
        PracticeSize::Large => {
            "Large practices have structural buffers between areas; influence \
             flows mainly through shared platforms and management capacity."
        }
        PracticeSize::Enterprise => {
            "Across a multi-site group, category influence operates through \
             central functions, so systemic fixes pay off at every site at once."
        }
    }
}
