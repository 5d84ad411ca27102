use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The ten business areas every assessment is grouped by.
///
/// This is a closed set: every static weight, benchmark, and adjacency table
/// is keyed exhaustively over these variants, so adding a category means
/// updating all of them. `Ord` follows declaration order, which is the
/// tie-break order used throughout scoring and analysis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Financial,
    Operations,
    PatientCare,
    Technology,
    Compliance,
    Facilities,
    Marketing,
    Geography,
    Staffing,
    Automation,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Financial,
        Category::Operations,
        Category::PatientCare,
        Category::Technology,
        Category::Compliance,
        Category::Facilities,
        Category::Marketing,
        Category::Geography,
        Category::Staffing,
        Category::Automation,
    ];

    /// Human-readable label for insights and generated prose.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Financial => "Financial",
            Category::Operations => "Operations",
            Category::PatientCare => "Patient Care",
            Category::Technology => "Technology",
            Category::Compliance => "Compliance",
            Category::Facilities => "Facilities",
            Category::Marketing => "Marketing",
            Category::Geography => "Geography",
            Category::Staffing => "Staffing",
            Category::Automation => "Automation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "financial" => Ok(Category::Financial),
            "operations" => Ok(Category::Operations),
            "patient_care" => Ok(Category::PatientCare),
            "technology" => Ok(Category::Technology),
            "compliance" => Ok(Category::Compliance),
            "facilities" => Ok(Category::Facilities),
            "marketing" => Ok(Category::Marketing),
            "geography" => Ok(Category::Geography),
            "staffing" => Ok(Category::Staffing),
            "automation" => Ok(Category::Automation),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

/// Allied-health disciplines the platform knows about. Benchmark data
/// currently exists only for physiotherapy; other disciplines fall back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DisciplineType {
    Physiotherapy,
    Chiropractic,
    Podiatry,
    OccupationalTherapy,
    SpeechPathology,
}

impl FromStr for DisciplineType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "physiotherapy" => Ok(DisciplineType::Physiotherapy),
            "chiropractic" => Ok(DisciplineType::Chiropractic),
            "podiatry" => Ok(DisciplineType::Podiatry),
            "occupational_therapy" => Ok(DisciplineType::OccupationalTherapy),
            "speech_pathology" => Ok(DisciplineType::SpeechPathology),
            other => Err(CoreError::UnknownDiscipline(other.to_string())),
        }
    }
}

/// Practice size tiers. Benchmark lookups fall back to `Small` when a tier
/// has no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PracticeSize {
    Solo,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl PracticeSize {
    pub fn label(&self) -> &'static str {
        match self {
            PracticeSize::Solo => "solo",
            PracticeSize::Small => "small",
            PracticeSize::Medium => "medium",
            PracticeSize::Large => "large",
            PracticeSize::Enterprise => "enterprise",
        }
    }
}

impl FromStr for PracticeSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solo" => Ok(PracticeSize::Solo),
            "small" => Ok(PracticeSize::Small),
            "medium" => Ok(PracticeSize::Medium),
            "large" => Ok(PracticeSize::Large),
            "enterprise" => Ok(PracticeSize::Enterprise),
            other => Err(CoreError::UnknownPracticeSize(other.to_string())),
        }
    }
}
