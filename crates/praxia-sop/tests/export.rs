use std::collections::BTreeMap;

use jiff::civil::date;
use jiff::tz::TimeZone;
use jiff::Zoned;

use praxia_sop::docx::to_docx;
use praxia_sop::pdf::to_pdf;
use praxia_sop::styles::DocumentStyles;
use praxia_sop::{generate, to_html, to_markdown};

fn now() -> Zoned {
    date(2026, 1, 15).at(9, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap()
}

fn sample() -> praxia_core::models::sop::GeneratedSop {
    let mut data = BTreeMap::new();
    data.insert("practice_name".to_string(), "Coastline Physio".to_string());
    data.insert("records_system".to_string(), "Cliniko".to_string());
    generate("patient-records", &data, &now()).unwrap()
}

#[test]
fn markdown_has_title_metadata_contents_and_footnotes() {
    let md = to_markdown(&sample());

    assert!(md.starts_with("# Patient Records Management\n"));
    assert!(md.contains("**Next review:** 2027-01-15"));
    assert!(md.contains("**Regulatory authority:** Office of the Australian Information Commissioner"));
    assert!(md.contains("## Contents"));
    // TOC anchors use the slug of the section title.
    assert!(md.contains("- [Access and Disclosure](#access-and-disclosure)"));
    assert!(md.contains("> Regulatory reference: APP 6"));
    // Substituted and placeholder values both render.
    assert!(md.contains("Coastline Physio"));
    assert!(md.contains("[privacy_officer]"));
}

#[test]
fn html_is_a_line_break_wrap_of_the_markdown() {
    let sop = sample();
    let html = to_html(&sop);
    assert!(html.contains("# Patient Records Management<br>"));
    assert_eq!(
        html.matches("<br>\n").count(),
        to_markdown(&sop).matches('\n').count()
    );
}

#[test]
fn docx_export_produces_a_zip_container() {
    let bytes = to_docx(&sample(), &DocumentStyles::default()).unwrap();
    // DOCX is a ZIP archive; check the magic.
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn pdf_export_is_not_yet_available() {
    assert!(to_pdf(&sample()).is_err());
}
