//! Object key conventions.
//!
//! One prefix per user; derived artifacts are timestamped so "latest"
//! is simply the lexicographic maximum under the prefix (RFC 3339 UTC
//! timestamps sort chronologically).

use jiff::Timestamp;

pub fn assessment(user_id: &str) -> String {
    format!("users/{user_id}/assessment.json")
}

pub fn health_score(user_id: &str, at: Timestamp) -> String {
    format!("users/{user_id}/scores/{at}.json")
}

pub fn health_score_prefix(user_id: &str) -> String {
    format!("users/{user_id}/scores/")
}

pub fn sop(user_id: &str, template_id: &str, at: Timestamp) -> String {
    format!("users/{user_id}/sops/{template_id}/{at}.json")
}

pub fn sop_prefix(user_id: &str, template_id: &str) -> String {
    format!("users/{user_id}/sops/{template_id}/")
}

pub fn compliance(user_id: &str, at: Timestamp) -> String {
    format!("users/{user_id}/compliance/{at}.json")
}

pub fn compliance_prefix(user_id: &str) -> String {
    format!("users/{user_id}/compliance/")
}
