use std::sync::LazyLock;

use praxia_core::models::sop::{RegulatoryBasis, ReviewFrequency, SopSection, SopTemplate};

/// The static SOP template catalog. Section content uses `{{var}}`
/// placeholders; every placeholder name must appear in the section's
/// `variables` list (checked in `tests/catalog.rs`).
pub fn all() -> &'static [SopTemplate] {
    static TEMPLATES: LazyLock<Vec<SopTemplate>> = LazyLock::new(build);
    &TEMPLATES
}

fn build() -> Vec<SopTemplate> {
    vec![
        SopTemplate {
            id: "infection-control".to_string(),
            title: "Infection Prevention and Control".to_string(),
            sop_type: "clinical".to_string(),
            recommended_review_frequency: ReviewFrequency::Biannually,
            regulatory_basis: Some(RegulatoryBasis {
                authority: "National Health and Medical Research Council".to_string(),
                standards: vec![
                    "Australian Guidelines for the Prevention and Control of Infection in Healthcare".to_string(),
                    "AS/NZS 4187".to_string(),
                ],
            }),
            sections: vec![
                section(
                    "Purpose and Scope",
                    "This procedure defines how {{practice_name}} prevents and controls \
                     infection across all treatment areas. It applies to every clinician, \
                     student, and support staff member working at {{location}}.",
                    true,
                    &["practice_name", "location"],
                    None,
                ),
                section(
                    "Hand Hygiene",
                    "Staff perform hand hygiene before and after every patient contact \
                     using the products stocked at each basin. {{hygiene_officer}} audits \
                     compliance monthly and reports results at the team meeting.",
                    true,
                    &["hygiene_officer"],
                    Some("NHMRC Guidelines, Section 3.1"),
                ),
                section(
                    "Equipment Reprocessing",
                    "Reusable equipment is cleaned between patients following the \
                     manufacturer's instructions. Items that cannot be adequately \
                     reprocessed are single-use. {{reprocessing_contact}} maintains the \
                     reprocessing log.",
                    true,
                    &["reprocessing_contact"],
                    Some("AS/NZS 4187"),
                ),
                section(
                    "Outbreak Response",
                    "On suspicion of an outbreak, {{practice_name}} notifies \
                     {{public_health_contact}} and restricts bookings in affected rooms \
                     until cleared.",
                    false,
                    &["practice_name", "public_health_contact"],
                    None,
                ),
            ],
        },
        SopTemplate {
            id: "patient-records".to_string(),
            title: "Patient Records Management".to_string(),
            sop_type: "administrative".to_string(),
            recommended_review_frequency: ReviewFrequency::Annually,
            regulatory_basis: Some(RegulatoryBasis {
                authority: "Office of the Australian Information Commissioner".to_string(),
                standards: vec![
                    "Privacy Act 1988 (Cth)".to_string(),
                    "Australian Privacy Principles".to_string(),
                ],
            }),
            sections: vec![
                section(
                    "Purpose and Scope",
                    "This procedure governs how {{practice_name}} creates, stores, and \
                     retains patient health records in {{records_system}}.",
                    true,
                    &["practice_name", "records_system"],
                    None,
                ),
                section(
                    "Record Creation",
                    "Clinical notes are completed within {{notes_deadline}} of each \
                     consultation. Entries are attributed, dated, and never deleted; \
                     corrections are added as amendments.",
                    true,
                    &["notes_deadline"],
                    Some("APP 10 — quality of personal information"),
                ),
                section(
                    "Access and Disclosure",
                    "Access to records is limited to treating clinicians and authorized \
                     administrative staff. Third-party disclosure requires patient consent \
                     or a lawful basis, logged by {{privacy_officer}}.",
                    true,
                    &["privacy_officer"],
                    Some("APP 6 — use and disclosure"),
                ),
                section(
                    "Retention and Disposal",
                    "Records are retained for {{retention_period}} after the last contact \
                     (or until age 25 for minors, whichever is later), then securely \
                     destroyed.",
                    true,
                    &["retention_period"],
                    None,
                ),
            ],
        },
        SopTemplate {
            id: "incident-reporting".to_string(),
            title: "Incident and Adverse Event Reporting".to_string(),
            sop_type: "governance".to_string(),
            recommended_review_frequency: ReviewFrequency::Quarterly,
            regulatory_basis: Some(RegulatoryBasis {
                authority: "Australian Health Practitioner Regulation Agency".to_string(),
                standards: vec!["National Law — mandatory notifications".to_string()],
            }),
            sections: vec![
                section(
                    "Purpose and Scope",
                    "This procedure defines how {{practice_name}} records and responds to \
                     clinical incidents, near-misses, and complaints.",
                    true,
                    &["practice_name"],
                    None,
                ),
                section(
                    "Reporting an Incident",
                    "Any staff member who observes an incident records it in the incident \
                     register within 24 hours and notifies {{incident_owner}}. Patient \
                     safety always takes precedence over documentation.",
                    true,
                    &["incident_owner"],
                    None,
                ),
                section(
                    "Review and Escalation",
                    "{{incident_owner}} triages each entry within {{triage_window}}. \
                     Reportable events are escalated to the practice principal and, where \
                     the National Law requires, to AHPRA.",
                    true,
                    &["incident_owner", "triage_window"],
                    Some("National Law s.130 — mandatory notifications"),
                ),
            ],
        },
        SopTemplate {
            id: "equipment-maintenance".to_string(),
            title: "Equipment Maintenance and Testing".to_string(),
            sop_type: "facilities".to_string(),
            recommended_review_frequency: ReviewFrequency::Annually,
            regulatory_basis: None,
            sections: vec![
                section(
                    "Purpose and Scope",
                    "This procedure keeps the treatment and gym equipment at \
                     {{practice_name}} safe and serviceable.",
                    true,
                    &["practice_name"],
                    None,
                ),
                section(
                    "Scheduled Servicing",
                    "{{maintenance_contact}} maintains the asset register and books \
                     servicing per the manufacturer's schedule. Electrotherapy devices \
                     are tested and tagged every {{test_tag_interval}}.",
                    true,
                    &["maintenance_contact", "test_tag_interval"],
                    None,
                ),
                section(
                    "Fault Handling",
                    "Faulty equipment is tagged out of service immediately and logged. \
                     It returns to use only after repair is verified by \
                     {{maintenance_contact}}.",
                    true,
                    &["maintenance_contact"],
                    None,
                ),
            ],
        },
    ]
}

fn section(
    title: &str,
    content: &str,
    is_required: bool,
    variables: &[&str],
    regulatory_reference: Option<&str>,
) -> SopSection {
    SopSection {
        title: title.to_string(),
        content: content.to_string(),
        is_required,
        variables: variables.iter().map(|v| v.to_string()).collect(),
        regulatory_reference: regulatory_reference.map(|r| r.to_string()),
    }
}
