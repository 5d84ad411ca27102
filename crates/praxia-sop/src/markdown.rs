use praxia_core::models::sop::GeneratedSop;

/// Render a generated SOP to Markdown, the canonical export format.
///
/// Layout: title, metadata block, table of contents keyed by section
/// slug, then each section body with its regulatory reference as an
/// inline footnote.
pub fn to_markdown(sop: &GeneratedSop) -> String {
    let mut out = format!("# {}\n\n", sop.title);

    out.push_str(&format!("**Document ID:** {}\n", sop.id));
    out.push_str(&format!("**Type:** {}\n", sop.sop_type));
    out.push_str(&format!("**Created:** {}\n", sop.created_at.strftime("%Y-%m-%d")));
    out.push_str(&format!("**Next review:** {}\n", sop.next_review_date));
    if let Some(basis) = &sop.regulatory_compliance {
        out.push_str(&format!("**Regulatory authority:** {}\n", basis.authority));
        if !basis.standards.is_empty() {
            out.push_str(&format!("**Standards:** {}\n", basis.standards.join("; ")));
        }
    }
    out.push('\n');

    out.push_str("## Contents\n\n");
    for section in &sop.sections {
        out.push_str(&format!("- [{}](#{})\n", section.title, slug(&section.title)));
    }
    out.push('\n');

    for section in &sop.sections {
        out.push_str(&format!("## {}\n\n", section.title));
        out.push_str(&section.content);
        out.push_str("\n\n");
        if let Some(reference) = &section.regulatory_reference {
            out.push_str(&format!("> Regulatory reference: {reference}\n\n"));
        }
    }

    out
}

/// Naive HTML export: the Markdown with line breaks made explicit. This
/// is deliberately not a Markdown renderer; the web front end does its
/// own rich rendering from the canonical form.
pub fn to_html(sop: &GeneratedSop) -> String {
    to_markdown(sop).replace('\n', "<br>\n")
}

/// Lowercase, alphanumerics kept, everything else collapsed to single
/// hyphens. Matches how the front end anchors section headings.
pub(crate) fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_hyphen = true;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            out.push('-');
            last_hyphen = true;
        }
    }
    out.trim_end_matches('-').to_string()
}
