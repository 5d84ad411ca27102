use std::sync::LazyLock;

use praxia_core::models::compliance::{ComplianceRequirement, FrameworkType};
use praxia_core::models::recommendation::RiskLevel;
use praxia_core::models::sop::ReviewFrequency;

/// The static compliance requirement catalog.
pub fn all() -> &'static [ComplianceRequirement] {
    static REQUIREMENTS: LazyLock<Vec<ComplianceRequirement>> = LazyLock::new(build);
    &REQUIREMENTS
}

fn build() -> Vec<ComplianceRequirement> {
    vec![
        requirement(
            "privacy-policy",
            "Published privacy policy",
            "A current privacy policy covering collection, use, and disclosure of health information is available to patients.",
            FrameworkType::Privacy,
            RiskLevel::High,
            &[
                "Draft the policy against the Australian Privacy Principles",
                "Publish it on the website and at reception",
                "Review it after any system change",
            ],
            ReviewFrequency::Annually,
        ),
        requirement(
            "breach-response-plan",
            "Data breach response plan",
            "A documented plan exists for containing, assessing, and notifying eligible data breaches.",
            FrameworkType::Privacy,
            RiskLevel::High,
            &[
                "Assign a breach response owner",
                "Document containment and notification steps",
                "Run an annual tabletop exercise",
            ],
            ReviewFrequency::Annually,
        ),
        requirement(
            "access-controls",
            "Role-based record access",
            "Access to patient records is restricted by role, and departing staff accounts are disabled on exit.",
            FrameworkType::Privacy,
            RiskLevel::Medium,
            &[
                "Map roles to record permissions",
                "Add account deactivation to the offboarding checklist",
            ],
            ReviewFrequency::Quarterly,
        ),
        requirement(
            "clinical-note-standards",
            "Clinical documentation standards",
            "Notes are completed within 48 hours, attributed, and amendments are tracked.",
            FrameworkType::ClinicalGovernance,
            RiskLevel::High,
            &[
                "Adopt a documented note standard",
                "Audit a sample of notes each quarter",
            ],
            ReviewFrequency::Quarterly,
        ),
        requirement(
            "incident-register",
            "Clinical incident register",
            "Incidents and near-misses are logged centrally and reviewed by the governance lead.",
            FrameworkType::ClinicalGovernance,
            RiskLevel::Medium,
            &[
                "Stand up a single incident form",
                "Review the register monthly",
            ],
            ReviewFrequency::Monthly,
        ),
        requirement(
            "practitioner-registration",
            "Current practitioner registration",
            "Every treating clinician holds current AHPRA registration and required professional indemnity cover.",
            FrameworkType::ClinicalGovernance,
            RiskLevel::High,
            &[
                "Record registration numbers and expiry dates",
                "Verify registrations at each renewal cycle",
            ],
            ReviewFrequency::Annually,
        ),
        requirement(
            "first-aid-readiness",
            "First aid and emergency readiness",
            "First aid kits are stocked, staff hold current CPR certification, and emergency procedures are displayed.",
            FrameworkType::WorkHealthSafety,
            RiskLevel::Medium,
            &[
                "Check kit contents quarterly",
                "Track CPR certification expiries",
            ],
            ReviewFrequency::Quarterly,
        ),
        requirement(
            "electrical-test-tag",
            "Electrical equipment testing",
            "Treatment-room electrical devices are tested and tagged on the prescribed cycle.",
            FrameworkType::WorkHealthSafety,
            RiskLevel::Low,
            &[
                "Book a test-and-tag contractor",
                "Log results in the asset register",
            ],
            ReviewFrequency::Biannually,
        ),
        requirement(
            "hazard-register",
            "Workplace hazard register",
            "Identified hazards are logged with a risk rating and a named remediation owner.",
            FrameworkType::WorkHealthSafety,
            RiskLevel::Low,
            &[
                "Walk the site with a hazard checklist",
                "Assign owners and due dates to open items",
            ],
            ReviewFrequency::Biannually,
        ),
        requirement(
            "billing-item-audit",
            "Billing and item-code audit",
            "Claimed item codes are audited against clinical records to confirm services were delivered as billed.",
            FrameworkType::BillingIntegrity,
            RiskLevel::High,
            &[
                "Sample claims monthly against notes",
                "Document and correct discrepancies",
            ],
            ReviewFrequency::Monthly,
        ),
        requirement(
            "informed-financial-consent",
            "Informed financial consent",
            "Patients receive fee information, including gap amounts, before treatment begins.",
            FrameworkType::BillingIntegrity,
            RiskLevel::Medium,
            &[
                "Publish the fee schedule",
                "Capture consent at intake",
            ],
            ReviewFrequency::Annually,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn requirement(
    id: &str,
    title: &str,
    description: &str,
    framework_type: FrameworkType,
    risk_level: RiskLevel,
    implementation_steps: &[&str],
    review_frequency: ReviewFrequency,
) -> ComplianceRequirement {
    ComplianceRequirement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        framework_type,
        risk_level,
        implementation_steps: implementation_steps.iter().map(|s| s.to_string()).collect(),
        review_frequency,
    }
}
