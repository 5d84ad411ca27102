use std::sync::LazyLock;

use praxia_core::models::category::{Category, DisciplineType, PracticeSize};
use praxia_core::models::recommendation::{
    Effort, Priority, Recommendation, RiskLevel, RoiEstimate, Timeframe,
};

/// The static recommendation catalog. Entries are filtered and ranked per
/// practice at scoring time; the catalog itself is read-only.
pub fn all() -> &'static [Recommendation] {
    static CATALOG: LazyLock<Vec<Recommendation>> = LazyLock::new(build);
    &CATALOG
}

fn build() -> Vec<Recommendation> {
    use Category::*;

    vec![
        Recommendation {
            id: "fin-fee-review".to_string(),
            category: Financial,
            title: "Run an annual fee schedule review".to_string(),
            description: "Benchmark consultation fees against local market rates and scheme \
                          indexation, and adjust underpriced item codes."
                .to_string(),
            priority: Priority::High,
            effort: Effort::Minimal,
            timeframe: Timeframe::Immediate,
            estimated_roi: RoiEstimate {
                min: 8.0,
                max: 15.0,
                timeframe_months: 3,
            },
            implementation_steps: vec![
                "Pull the last 12 months of billing by item code".to_string(),
                "Compare against published scheme and competitor rates".to_string(),
                "Stage increases across two billing cycles".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "fin-debtor-days".to_string(),
            category: Financial,
            title: "Tighten debtor management".to_string(),
            description: "Move to payment-at-time-of-service as the default and automate \
                          follow-up on outstanding third-party claims."
                .to_string(),
            priority: Priority::Medium,
            effort: Effort::Moderate,
            timeframe: Timeframe::ShortTerm,
            estimated_roi: RoiEstimate {
                min: 5.0,
                max: 12.0,
                timeframe_months: 6,
            },
            implementation_steps: vec![
                "Enable card-on-file at booking".to_string(),
                "Set a weekly aged-debtors review".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "ops-cancellation-policy".to_string(),
            category: Operations,
            title: "Enforce a cancellation and no-show policy".to_string(),
            description: "Publish a 24-hour cancellation window, capture consent at intake, \
                          and fill late gaps from a standby list."
                .to_string(),
            priority: Priority::High,
            effort: Effort::Minimal,
            timeframe: Timeframe::Immediate,
            estimated_roi: RoiEstimate {
                min: 6.0,
                max: 14.0,
                timeframe_months: 3,
            },
            implementation_steps: vec![
                "Add the policy to intake and booking confirmations".to_string(),
                "Configure automated reminder escalation".to_string(),
                "Maintain a same-day standby list".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "ops-capacity-model".to_string(),
            category: Operations,
            title: "Model clinician capacity and utilization weekly".to_string(),
            description: "Track booked versus available hours per clinician and rebalance \
                          the appointment book against demand."
                .to_string(),
            priority: Priority::High,
            effort: Effort::Moderate,
            timeframe: Timeframe::ShortTerm,
            estimated_roi: RoiEstimate {
                min: 15.0,
                max: 25.0,
                timeframe_months: 6,
            },
            implementation_steps: vec![
                "Define a utilization target per role".to_string(),
                "Review the weekly dashboard in team huddles".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: Some(vec![
                PracticeSize::Medium,
                PracticeSize::Large,
                PracticeSize::Enterprise,
            ]),
        },
        Recommendation {
            id: "pc-outcome-measures".to_string(),
            category: PatientCare,
            title: "Standardize outcome measures across the caseload".to_string(),
            description: "Adopt a small set of validated outcome measures and capture them \
                          at intake, mid-plan, and discharge."
                .to_string(),
            priority: Priority::High,
            effort: Effort::Moderate,
            timeframe: Timeframe::ShortTerm,
            estimated_roi: RoiEstimate {
                min: 15.0,
                max: 22.0,
                timeframe_months: 9,
            },
            implementation_steps: vec![
                "Select measures per presentation group".to_string(),
                "Build capture into the clinical note template".to_string(),
                "Review aggregate outcomes quarterly".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: Some(vec![
                DisciplineType::Physiotherapy,
                DisciplineType::OccupationalTherapy,
            ]),
            practice_size_relevance: None,
        },
        Recommendation {
            id: "pc-rebooking".to_string(),
            category: PatientCare,
            title: "Close the loop on incomplete care plans".to_string(),
            description: "Flag patients who drop off mid-plan and run a structured recall \
                          before discharging them."
                .to_string(),
            priority: Priority::Medium,
            effort: Effort::Minimal,
            timeframe: Timeframe::ShortTerm,
            estimated_roi: RoiEstimate {
                min: 10.0,
                max: 18.0,
                timeframe_months: 6,
            },
            implementation_steps: vec![
                "Define a lapsed-patient rule in the PMS".to_string(),
                "Script the recall call for reception".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "tech-pms-upgrade".to_string(),
            category: Technology,
            title: "Consolidate onto a cloud practice management system".to_string(),
            description: "Replace disconnected booking, notes, and billing tools with a \
                          single cloud platform with an open API."
                .to_string(),
            priority: Priority::High,
            effort: Effort::Significant,
            timeframe: Timeframe::LongTerm,
            estimated_roi: RoiEstimate {
                min: 18.0,
                max: 30.0,
                timeframe_months: 18,
            },
            implementation_steps: vec![
                "Shortlist platforms against a requirements matrix".to_string(),
                "Plan a staged data migration".to_string(),
                "Run two weeks of parallel operation before cutover".to_string(),
            ],
            regulatory_relevance: Some(RiskLevel::Medium),
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "tech-telehealth".to_string(),
            category: Technology,
            title: "Offer telehealth for review consultations".to_string(),
            description: "Stand up a compliant video consult workflow for progress reviews \
                          and exercise-program check-ins."
                .to_string(),
            priority: Priority::Low,
            effort: Effort::Minimal,
            timeframe: Timeframe::ShortTerm,
            estimated_roi: RoiEstimate {
                min: 4.0,
                max: 10.0,
                timeframe_months: 6,
            },
            implementation_steps: vec![
                "Select a video platform that meets privacy requirements".to_string(),
                "Add telehealth item codes to the fee schedule".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "comp-privacy-program".to_string(),
            category: Compliance,
            title: "Stand up a privacy and records governance program".to_string(),
            description: "Document how health records are collected, stored, accessed, and \
                          retained, and train every staff member on it."
                .to_string(),
            priority: Priority::High,
            effort: Effort::Moderate,
            timeframe: Timeframe::Immediate,
            estimated_roi: RoiEstimate {
                min: 2.0,
                max: 6.0,
                timeframe_months: 12,
            },
            implementation_steps: vec![
                "Map every system that holds patient data".to_string(),
                "Write the privacy policy and breach response plan".to_string(),
                "Run annual staff privacy training".to_string(),
            ],
            regulatory_relevance: Some(RiskLevel::High),
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "comp-incident-register".to_string(),
            category: Compliance,
            title: "Maintain a clinical incident register".to_string(),
            description: "Log near-misses and adverse events centrally and review them in a \
                          standing governance meeting."
                .to_string(),
            priority: Priority::Medium,
            effort: Effort::Minimal,
            timeframe: Timeframe::ShortTerm,
            estimated_roi: RoiEstimate {
                min: 1.0,
                max: 4.0,
                timeframe_months: 12,
            },
            implementation_steps: vec![
                "Adopt a single incident form".to_string(),
                "Schedule a monthly governance review".to_string(),
            ],
            regulatory_relevance: Some(RiskLevel::Medium),
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "fac-access-audit".to_string(),
            category: Facilities,
            title: "Audit physical accessibility".to_string(),
            description: "Check entry, treatment rooms, and bathrooms against accessibility \
                          standards and fix the cheap items first."
                .to_string(),
            priority: Priority::Low,
            effort: Effort::Minimal,
            timeframe: Timeframe::ShortTerm,
            estimated_roi: RoiEstimate {
                min: 2.0,
                max: 5.0,
                timeframe_months: 12,
            },
            implementation_steps: vec![
                "Walk the site with an accessibility checklist".to_string(),
                "Prioritize fixes by cost and risk".to_string(),
            ],
            regulatory_relevance: Some(RiskLevel::Low),
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "fac-equipment-plan".to_string(),
            category: Facilities,
            title: "Create a rolling equipment replacement plan".to_string(),
            description: "Schedule servicing and replacement for treatment tables, gym \
                          equipment, and electrotherapy devices."
                .to_string(),
            priority: Priority::Medium,
            effort: Effort::Moderate,
            timeframe: Timeframe::LongTerm,
            estimated_roi: RoiEstimate {
                min: 3.0,
                max: 8.0,
                timeframe_months: 24,
            },
            implementation_steps: vec![
                "Build an asset register with service dates".to_string(),
                "Budget replacements over a three-year horizon".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "mkt-gmb-reviews".to_string(),
            category: Marketing,
            title: "Systematize review collection".to_string(),
            description: "Ask for a review at discharge for every completed care plan and \
                          respond to every public review within a week."
                .to_string(),
            priority: Priority::High,
            effort: Effort::Minimal,
            timeframe: Timeframe::Immediate,
            estimated_roi: RoiEstimate {
                min: 8.0,
                max: 16.0,
                timeframe_months: 6,
            },
            implementation_steps: vec![
                "Automate the post-discharge review request".to_string(),
                "Assign review responses to one owner".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "mkt-referrer-program".to_string(),
            category: Marketing,
            title: "Run a structured GP referrer program".to_string(),
            description: "Report outcomes back to referring GPs on every episode and visit \
                          the top twenty referrers twice a year."
                .to_string(),
            priority: Priority::High,
            effort: Effort::Moderate,
            timeframe: Timeframe::LongTerm,
            estimated_roi: RoiEstimate {
                min: 15.0,
                max: 28.0,
                timeframe_months: 12,
            },
            implementation_steps: vec![
                "Automate discharge summaries to referrers".to_string(),
                "Rank referrers by volume and trend".to_string(),
                "Book the visit cycle each quarter".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: Some(vec!["AU".to_string(), "NZ".to_string(), "UK".to_string()]),
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "geo-catchment-analysis".to_string(),
            category: Geography,
            title: "Map your real patient catchment".to_string(),
            description: "Plot active patients by postcode against competitor locations to \
                          find underserved pockets worth targeting."
                .to_string(),
            priority: Priority::Low,
            effort: Effort::Minimal,
            timeframe: Timeframe::ShortTerm,
            estimated_roi: RoiEstimate {
                min: 3.0,
                max: 9.0,
                timeframe_months: 9,
            },
            implementation_steps: vec![
                "Export active-patient postcodes from the PMS".to_string(),
                "Overlay competitor and referrer locations".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "staff-cpd-pathways".to_string(),
            category: Staffing,
            title: "Publish internal CPD and progression pathways".to_string(),
            description: "Tie continuing professional development budgets to defined career \
                          steps so senior clinicians stay."
                .to_string(),
            priority: Priority::High,
            effort: Effort::Moderate,
            timeframe: Timeframe::LongTerm,
            estimated_roi: RoiEstimate {
                min: 16.0,
                max: 24.0,
                timeframe_months: 18,
            },
            implementation_steps: vec![
                "Define clinical career bands".to_string(),
                "Allocate a per-clinician CPD budget".to_string(),
                "Review progression in annual planning".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: Some(vec![
                PracticeSize::Small,
                PracticeSize::Medium,
                PracticeSize::Large,
                PracticeSize::Enterprise,
            ]),
        },
        Recommendation {
            id: "staff-new-grad-program".to_string(),
            category: Staffing,
            title: "Build a new-graduate mentoring program".to_string(),
            description: "Pair new graduates with senior clinicians on a structured \
                          twelve-month mentoring calendar."
                .to_string(),
            priority: Priority::Medium,
            effort: Effort::Moderate,
            timeframe: Timeframe::LongTerm,
            estimated_roi: RoiEstimate {
                min: 6.0,
                max: 12.0,
                timeframe_months: 18,
            },
            implementation_steps: vec![
                "Set the mentoring calendar and caseload ramp".to_string(),
                "Protect weekly supervision time in rosters".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: Some(vec![
                PracticeSize::Medium,
                PracticeSize::Large,
                PracticeSize::Enterprise,
            ]),
        },
        Recommendation {
            id: "auto-reminder-sequences".to_string(),
            category: Automation,
            title: "Automate appointment reminder sequences".to_string(),
            description: "Layer SMS and email reminders at booking, 48 hours, and 2 hours \
                          before the appointment."
                .to_string(),
            priority: Priority::Medium,
            effort: Effort::Minimal,
            timeframe: Timeframe::Immediate,
            estimated_roi: RoiEstimate {
                min: 5.0,
                max: 11.0,
                timeframe_months: 3,
            },
            implementation_steps: vec![
                "Enable the reminder ladder in the PMS".to_string(),
                "A/B the 48-hour message wording".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
        Recommendation {
            id: "auto-claims-lodgement".to_string(),
            category: Automation,
            title: "Automate third-party claims lodgement".to_string(),
            description: "Lodge insurer and scheme claims at checkout instead of batching \
                          them at month end."
                .to_string(),
            priority: Priority::Medium,
            effort: Effort::Moderate,
            timeframe: Timeframe::ShortTerm,
            estimated_roi: RoiEstimate {
                min: 7.0,
                max: 13.0,
                timeframe_months: 6,
            },
            implementation_steps: vec![
                "Connect the PMS claiming integration".to_string(),
                "Reconcile rejections weekly".to_string(),
            ],
            regulatory_relevance: None,
            geographic_relevance: None,
            practice_type_relevance: None,
            practice_size_relevance: None,
        },
    ]
}
