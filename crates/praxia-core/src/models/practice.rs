use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::category::{DisciplineType, PracticeSize};

/// Metadata describing the practice under assessment.
///
/// `country` is a caller-normalized region token (e.g. "AU", "UK", "US");
/// geographic adjustments match on literal substrings, so normalization is
/// the form layer's job.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PracticeProfile {
    pub practice_name: String,
    pub discipline: DisciplineType,
    pub practice_size: PracticeSize,
    pub country: Option<String>,
}
