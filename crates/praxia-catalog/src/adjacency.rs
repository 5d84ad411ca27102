use std::sync::LazyLock;

use praxia_core::models::category::{Category, PracticeSize};
use praxia_core::models::connection::ImpactDirection;

/// One hand-authored influence edge between two business areas.
///
/// Base strengths are in [0, 1]. The analyzer adjusts them for practice
/// size and response volume before reporting; the table itself never
/// changes at runtime.
#[derive(Debug, Clone)]
pub struct AdjacencyEdge {
    pub source: Category,
    pub target: Category,
    pub base_strength: f64,
    pub description: &'static str,
    pub impact_direction: ImpactDirection,
    pub research_basis: Option<&'static str>,
}

/// Additive strength offset by practice size. Larger practices show
/// stronger cross-functional coupling; solo practices weaker.
pub fn size_offset(size: PracticeSize) -> f64 {
    match size {
        PracticeSize::Solo => -0.05,
        PracticeSize::Small => 0.0,
        PracticeSize::Medium => 0.02,
        PracticeSize::Large => 0.04,
        PracticeSize::Enterprise => 0.05,
    }
}

pub fn edges() -> &'static [AdjacencyEdge] {
    static EDGES: LazyLock<Vec<AdjacencyEdge>> = LazyLock::new(|| {
        use Category::*;
        use ImpactDirection::*;

        vec![
            edge(
                Financial,
                Technology,
                0.75,
                "Available capital determines how quickly practice management and clinical systems can be modernized.",
                Positive,
                None,
            ),
            edge(
                Financial,
                Staffing,
                0.80,
                "Cash flow stability drives the ability to hire, retain, and develop clinical staff.",
                Positive,
                Some("APA workforce survey, 2023"),
            ),
            edge(
                Financial,
                Facilities,
                0.70,
                "Fit-out, equipment replacement, and lease decisions all depend on financial headroom.",
                Positive,
                None,
            ),
            edge(
                Financial,
                Marketing,
                0.65,
                "Marketing spend is usually the first budget line cut when margins tighten.",
                Positive,
                None,
            ),
            edge(
                Operations,
                PatientCare,
                0.85,
                "Scheduling discipline and clean handovers translate directly into consistent episodes of care.",
                Positive,
                Some("Deloitte allied health operations review, 2022"),
            ),
            edge(
                Operations,
                Financial,
                0.75,
                "Utilization, cancellation management, and billing turnaround drive revenue capture.",
                Positive,
                None,
            ),
            edge(
                Staffing,
                PatientCare,
                0.90,
                "Clinician availability and continuity are the single largest driver of patient outcomes and retention.",
                Positive,
                Some("AHPRA practitioner continuity study, 2021"),
            ),
            edge(
                Staffing,
                Operations,
                0.80,
                "Roster coverage determines whether the appointment book can actually run as planned.",
                Positive,
                None,
            ),
            edge(
                Technology,
                Automation,
                0.85,
                "A modern practice management platform is the precondition for any workflow automation.",
                Positive,
                None,
            ),
            edge(
                Technology,
                Operations,
                0.70,
                "Online bookings, reminders, and digital intake reduce front-desk load and no-shows.",
                Positive,
                None,
            ),
            edge(
                Automation,
                Operations,
                0.75,
                "Automated reminders, recalls, and claims lodgement remove repetitive admin from the daily run.",
                Positive,
                None,
            ),
            edge(
                Automation,
                Financial,
                0.60,
                "Automated claiming and payment follow-up shortens the cash conversion cycle.",
                Positive,
                None,
            ),
            edge(
                Marketing,
                Financial,
                0.70,
                "New-patient flow from referral and digital channels feeds revenue directly.",
                Positive,
                None,
            ),
            edge(
                PatientCare,
                Marketing,
                0.80,
                "Outcomes and experience drive reviews and word-of-mouth referrals, the dominant channel for clinics.",
                Positive,
                Some("PRF patient experience benchmark, 2023"),
            ),
            edge(
                PatientCare,
                Financial,
                0.75,
                "Completed care plans and rebooking rates are the revenue base of the practice.",
                Positive,
                None,
            ),
            edge(
                Compliance,
                PatientCare,
                0.65,
                "Clinical governance controls protect care quality and reduce adverse events.",
                Positive,
                None,
            ),
            edge(
                Compliance,
                Operations,
                0.45,
                "Documentation and audit overhead constrains scheduling flexibility and adds admin load.",
                Negative,
                None,
            ),
            edge(
                Facilities,
                PatientCare,
                0.60,
                "Accessible, well-equipped treatment spaces shape both safety and patient experience.",
                Positive,
                None,
            ),
            edge(
                Geography,
                Marketing,
                0.55,
                "Catchment demographics and competitor density set the ceiling on local marketing returns.",
                Neutral,
                None,
            ),
            edge(
                Geography,
                Staffing,
                0.50,
                "Location determines the recruitment pool; regional practices compete for a far smaller one.",
                Neutral,
                None,
            ),
        ]
    });
    &EDGES
}

fn edge(
    source: Category,
    target: Category,
    base_strength: f64,
    description: &'static str,
    impact_direction: ImpactDirection,
    research_basis: Option<&'static str>,
) -> AdjacencyEdge {
    AdjacencyEdge {
        source,
        target,
        base_strength,
        description,
        impact_direction,
        research_basis,
    }
}
