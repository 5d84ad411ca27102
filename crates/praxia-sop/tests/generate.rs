use std::collections::BTreeMap;

use jiff::civil::date;
use jiff::tz::TimeZone;
use jiff::Zoned;

use praxia_sop::generate;

fn now() -> Zoned {
    date(2026, 1, 15).at(9, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap()
}

fn data(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn unknown_template_is_a_hard_error() {
    let err = generate("no-such-template", &BTreeMap::new(), &now());
    assert!(err.is_err());
}

#[test]
fn declared_variables_are_substituted() {
    let sop = generate(
        "infection-control",
        &data(&[
            ("practice_name", "Coastline Physio"),
            ("location", "12 Beach Rd, Torquay"),
            ("hygiene_officer", "A. Nguyen"),
            ("reprocessing_contact", "B. Reilly"),
            ("public_health_contact", "the regional public health unit"),
        ]),
        &now(),
    )
    .unwrap();

    let purpose = &sop.sections[0];
    assert!(purpose.content.contains("Coastline Physio"));
    assert!(purpose.content.contains("12 Beach Rd, Torquay"));
    assert!(!purpose.content.contains("{{"));
}

#[test]
fn missing_variables_degrade_to_visible_placeholders() {
    let sop = generate(
        "infection-control",
        &data(&[("practice_name", "Coastline Physio")]),
        &now(),
    )
    .unwrap();

    let hygiene = &sop.sections[1];
    assert!(hygiene.content.contains("[hygiene_officer]"));
    assert!(!hygiene.content.contains("{{hygiene_officer}}"));
}

#[test]
fn extra_keys_are_silently_ignored() {
    let sop = generate(
        "equipment-maintenance",
        &data(&[
            ("practice_name", "Coastline Physio"),
            ("maintenance_contact", "C. Okafor"),
            ("test_tag_interval", "12 months"),
            ("unrelated_key", "never used"),
        ]),
        &now(),
    )
    .unwrap();

    for section in &sop.sections {
        assert!(!section.content.contains("never used"));
    }
}

#[test]
fn generation_is_idempotent_modulo_identity() {
    let practice_data = data(&[("practice_name", "Coastline Physio")]);
    let first = generate("incident-reporting", &practice_data, &now()).unwrap();
    let second = generate("incident-reporting", &practice_data, &now()).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.sections.len(), second.sections.len());
    for (a, b) in first.sections.iter().zip(&second.sections) {
        assert_eq!(a.content, b.content);
    }
}

#[test]
fn next_review_date_follows_template_frequency() {
    let quarterly = generate("incident-reporting", &BTreeMap::new(), &now()).unwrap();
    assert_eq!(quarterly.next_review_date, date(2026, 4, 15));

    let biannual = generate("infection-control", &BTreeMap::new(), &now()).unwrap();
    assert_eq!(biannual.next_review_date, date(2026, 7, 15));

    let annual = generate("patient-records", &BTreeMap::new(), &now()).unwrap();
    assert_eq!(annual.next_review_date, date(2027, 1, 15));
}

#[test]
fn regulatory_basis_carries_through_structured() {
    let sop = generate("patient-records", &BTreeMap::new(), &now()).unwrap();
    let basis = sop.regulatory_compliance.expect("template has a basis");
    assert_eq!(basis.authority, "Office of the Australian Information Commissioner");
    assert!(basis.standards.iter().any(|s| s.contains("Privacy Act")));

    let none = generate("equipment-maintenance", &BTreeMap::new(), &now()).unwrap();
    assert!(none.regulatory_compliance.is_none());
}
