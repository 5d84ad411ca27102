use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImpactDirection {
    Positive,
    Negative,
    Neutral,
}

/// A directed influence edge between two categories.
///
/// `strength` starts from the hand-authored adjacency table, gets a
/// practice-size offset and a response-volume confidence factor applied,
/// and is always clamped to [0, 1]. source ≠ target, always.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryConnection {
    pub source: Category,
    pub target: Category,
    pub strength: f64,
    pub description: String,
    pub impact_direction: ImpactDirection,
    pub research_basis: Option<String>,
}

/// Output of the interconnectedness analysis for one assessment run.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterconnectednessReport {
    /// Sorted descending by strength.
    pub connections: Vec<CategoryConnection>,
    /// Highest total outgoing strength; ties go to declaration order.
    pub most_influential: Category,
    /// Highest total incoming strength; ties go to declaration order.
    pub most_dependent: Category,
    pub key_insights: Vec<String>,
}
