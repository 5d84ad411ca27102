use std::collections::BTreeMap;

use jiff::{Span, Zoned};
use tracing::info;
use uuid::Uuid;

use praxia_core::models::sop::{GeneratedSection, GeneratedSop, SopSection};

use crate::error::SopError;

/// Fill an SOP template with practice data.
///
/// Every declared variable's `{{name}}` occurrences are replaced with the
/// supplied value; a missing key substitutes the literal `[name]` so the
/// gap is visible in the finished document. Keys that match no declared
/// variable are ignored. Identical inputs always produce identical
/// section content.
pub fn generate(
    template_id: &str,
    practice_data: &BTreeMap<String, String>,
    now: &Zoned,
) -> Result<GeneratedSop, SopError> {
    let template = praxia_catalog::sop_template(template_id)?;

    let sections: Vec<GeneratedSection> = template
        .sections
        .iter()
        .map(|section| fill_section(section, practice_data))
        .collect();

    let next_review_date = now
        .date()
        .saturating_add(Span::new().months(template.recommended_review_frequency.months()));

    let sop = GeneratedSop {
        id: Uuid::new_v4(),
        template_id: template.id.clone(),
        title: template.title.clone(),
        sop_type: template.sop_type.clone(),
        sections,
        created_at: now.timestamp(),
        next_review_date,
        regulatory_compliance: template.regulatory_basis.clone(),
    };

    info!(
        template_id,
        sections = sop.sections.len(),
        next_review = %sop.next_review_date,
        "generated SOP"
    );

    Ok(sop)
}

fn fill_section(section: &SopSection, practice_data: &BTreeMap<String, String>) -> GeneratedSection {
    let mut content = section.content.clone();
    for variable in &section.variables {
        let placeholder = format!("{{{{{variable}}}}}");
        let replacement = practice_data
            .get(variable)
            .cloned()
            .unwrap_or_else(|| format!("[{variable}]"));
        content = content.replace(&placeholder, &replacement);
    }

    GeneratedSection {
        title: section.title.clone(),
        content,
        regulatory_reference: section.regulatory_reference.clone(),
    }
}
