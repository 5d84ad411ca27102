use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::category::{Category, DisciplineType, PracticeSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Effort {
    Minimal,
    Moderate,
    Significant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Timeframe {
    Immediate,
    ShortTerm,
    LongTerm,
}

/// Risk tier shared by regulatory relevance and compliance requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Expected return range, in percent, over `timeframe_months`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoiEstimate {
    pub min: f64,
    pub max: f64,
    pub timeframe_months: u32,
}

impl RoiEstimate {
    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// A static catalog entry. Relevance lists are optional filters: `None`
/// means "applies to everyone".
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub effort: Effort,
    pub timeframe: Timeframe,
    pub estimated_roi: RoiEstimate,
    pub implementation_steps: Vec<String>,
    pub regulatory_relevance: Option<RiskLevel>,
    pub geographic_relevance: Option<Vec<String>>,
    pub practice_type_relevance: Option<Vec<DisciplineType>>,
    pub practice_size_relevance: Option<Vec<PracticeSize>>,
}

/// A catalog entry paired with the rank score it received for this practice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedRecommendation {
    pub recommendation: Recommendation,
    pub rank_score: f64,
}

/// Everything the recommendations screen renders for one scoring run.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationSet {
    /// All relevant entries, sorted descending by rank score.
    pub ranked: Vec<RankedRecommendation>,
    pub quick_wins: Vec<Recommendation>,
    pub strategic_initiatives: Vec<Recommendation>,
    pub compliance_priorities: Vec<Recommendation>,
    /// At most five entries, lowest-scoring categories served first.
    pub top_priorities: Vec<Recommendation>,
}
