use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// How often a generated document should be re-reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReviewFrequency {
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

impl ReviewFrequency {
    /// The review interval in months.
    pub fn months(&self) -> i32 {
        match self {
            ReviewFrequency::Monthly => 1,
            ReviewFrequency::Quarterly => 3,
            ReviewFrequency::Biannually => 6,
            ReviewFrequency::Annually => 12,
        }
    }
}

/// Structured regulatory provenance for a template. Kept structured rather
/// than a comma-joined string so no downstream parsing is ever needed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegulatoryBasis {
    pub authority: String,
    pub standards: Vec<String>,
}

/// One section of an SOP template. `content` may contain `{{var}}`
/// placeholders for every name listed in `variables`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SopSection {
    pub title: String,
    pub content: String,
    pub is_required: bool,
    pub variables: Vec<String>,
    pub regulatory_reference: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SopTemplate {
    pub id: String,
    pub title: String,
    pub sop_type: String,
    pub sections: Vec<SopSection>,
    pub recommended_review_frequency: ReviewFrequency,
    pub regulatory_basis: Option<RegulatoryBasis>,
}

/// A section after variable substitution.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedSection {
    pub title: String,
    pub content: String,
    pub regulatory_reference: Option<String>,
}

/// A filled SOP document. Unresolved variables render as `[name]` so the
/// practice can spot incomplete customization before publishing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedSop {
    pub id: Uuid,
    pub template_id: String,
    pub title: String,
    pub sop_type: String,
    pub sections: Vec<GeneratedSection>,
    pub created_at: jiff::Timestamp,
    pub next_review_date: jiff::civil::Date,
    pub regulatory_compliance: Option<RegulatoryBasis>,
}
