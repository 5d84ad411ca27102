use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use praxia_core::models::compliance::ComplianceStatus;
use praxia_core::models::practice::PracticeProfile;
use praxia_core::models::response::ResponseValue;
use praxia_core::models::score::BusinessHealthScore;
use praxia_core::models::sop::GeneratedSop;

use crate::error::StorageError;
use crate::keys;
use crate::memory::MemoryStore;

/// What persistence hands the core for one user: the flat response map
/// straight off the form layer plus the practice metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub responses: BTreeMap<String, ResponseValue>,
    pub profile: PracticeProfile,
}

/// Load a user's assessment. `None` means they have not started one.
pub async fn load_assessment(
    store: &MemoryStore,
    user_id: &str,
) -> Result<Option<AssessmentRecord>, StorageError> {
    store.get_json(&keys::assessment(user_id)).await
}

pub async fn save_assessment(
    store: &MemoryStore,
    user_id: &str,
    record: &AssessmentRecord,
) -> Result<(), StorageError> {
    store.put_json(&keys::assessment(user_id), record).await
}

/// Store a computed health score keyed by user and timestamp.
pub async fn record_health_score(
    store: &MemoryStore,
    user_id: &str,
    at: Timestamp,
    score: &BusinessHealthScore,
) -> Result<(), StorageError> {
    store.put_json(&keys::health_score(user_id, at), score).await
}

pub async fn latest_health_score(
    store: &MemoryStore,
    user_id: &str,
) -> Result<Option<BusinessHealthScore>, StorageError> {
    match store.last_key_under(&keys::health_score_prefix(user_id)).await {
        Some(key) => store.get_json(&key).await,
        None => Ok(None),
    }
}

pub async fn record_sop(
    store: &MemoryStore,
    user_id: &str,
    at: Timestamp,
    sop: &GeneratedSop,
) -> Result<(), StorageError> {
    store
        .put_json(&keys::sop(user_id, &sop.template_id, at), sop)
        .await
}

pub async fn latest_sop(
    store: &MemoryStore,
    user_id: &str,
    template_id: &str,
) -> Result<Option<GeneratedSop>, StorageError> {
    match store
        .last_key_under(&keys::sop_prefix(user_id, template_id))
        .await
    {
        Some(key) => store.get_json(&key).await,
        None => Ok(None),
    }
}

pub async fn record_compliance(
    store: &MemoryStore,
    user_id: &str,
    at: Timestamp,
    statuses: &[ComplianceStatus],
) -> Result<(), StorageError> {
    store
        .put_json(&keys::compliance(user_id, at), &statuses)
        .await
}

pub async fn latest_compliance(
    store: &MemoryStore,
    user_id: &str,
) -> Result<Option<Vec<ComplianceStatus>>, StorageError> {
    match store.last_key_under(&keys::compliance_prefix(user_id)).await {
        Some(key) => store.get_json(&key).await,
        None => Ok(None),
    }
}
