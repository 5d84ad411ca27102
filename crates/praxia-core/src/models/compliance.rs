use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::recommendation::RiskLevel;
use crate::models::sop::ReviewFrequency;

/// Regulatory framework a requirement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FrameworkType {
    Privacy,
    ClinicalGovernance,
    WorkHealthSafety,
    BillingIntegrity,
}

impl FrameworkType {
    pub fn label(&self) -> &'static str {
        match self {
            FrameworkType::Privacy => "Privacy",
            FrameworkType::ClinicalGovernance => "Clinical Governance",
            FrameworkType::WorkHealthSafety => "Work Health & Safety",
            FrameworkType::BillingIntegrity => "Billing Integrity",
        }
    }
}

/// A static compliance control the practice is checked against.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComplianceRequirement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub framework_type: FrameworkType,
    pub risk_level: RiskLevel,
    pub implementation_steps: Vec<String>,
    pub review_frequency: ReviewFrequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ComplianceState {
    Compliant,
    PartiallyCompliant,
    NonCompliant,
    NotApplicable,
}

/// Evaluated status of one requirement for one practice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComplianceStatus {
    pub requirement_id: String,
    pub status: ComplianceState,
    pub last_verified: jiff::civil::Date,
    pub next_review_date: jiff::civil::Date,
}

/// One remediation entry; rank 1 is the most urgent.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionPlanItem {
    pub requirement_id: String,
    pub title: String,
    pub risk_level: RiskLevel,
    pub status: ComplianceState,
    pub priority_rank: u8,
    pub implementation_steps: Vec<String>,
}

/// Weighted compliance percentage for one grouping key.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroupCompliance {
    pub label: String,
    pub compliance_pct: f64,
    pub applicable_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpcomingReview {
    pub requirement_id: String,
    pub title: String,
    pub due: jiff::civil::Date,
}

/// Everything the compliance dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComplianceDashboard {
    /// (compliant + 0.5 × partial) / applicable × 100, not-applicable excluded.
    pub overall_pct: f64,
    pub by_framework: Vec<GroupCompliance>,
    pub by_risk: Vec<GroupCompliance>,
    /// Reviews due within the next 30 days, soonest first.
    pub upcoming_reviews: Vec<UpcomingReview>,
}
