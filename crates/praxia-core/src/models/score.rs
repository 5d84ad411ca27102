use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::category::Category;

/// Qualitative band for a numeric score, derived via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScorePosition {
    Exceptional,
    Strong,
    Stable,
    Concerning,
    Critical,
}

impl ScorePosition {
    /// Thresholds are inclusive and evaluated top-down; first match wins.
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => ScorePosition::Exceptional,
            75.. => ScorePosition::Strong,
            65.. => ScorePosition::Stable,
            50.. => ScorePosition::Concerning,
            _ => ScorePosition::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScorePosition::Exceptional => "exceptional",
            ScorePosition::Strong => "strong",
            ScorePosition::Stable => "stable",
            ScorePosition::Concerning => "concerning",
            ScorePosition::Critical => "critical",
        }
    }
}

/// One category's assessment outcome. Recomputed fresh on every scoring run.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: Category,
    /// 0–100.
    pub score: u8,
    pub position: ScorePosition,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Static reference values the overall score is displayed against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BenchmarkComparison {
    pub industry: f64,
    pub similar_size: f64,
    pub top_performers: f64,
}

/// Flat margin offset applied for the practice's region.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeographicAdjustment {
    pub region: String,
    pub margin_offset_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BusinessHealthScore {
    /// Weight-normalized average of the category scores, 0–100.
    pub overall: u8,
    pub position: ScorePosition,
    pub categories: Vec<CategoryScore>,
    pub benchmarks: BenchmarkComparison,
    pub geographic_adjustment: Option<GeographicAdjustment>,
}

impl BusinessHealthScore {
    /// Score for one category, if it was assessed.
    pub fn category_score(&self, category: Category) -> Option<u8> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.score)
    }
}
