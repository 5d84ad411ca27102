use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use praxia_core::models::sop::GeneratedSop;

use crate::error::ExportError;
use crate::markdown::to_markdown;
use crate::styles::DocumentStyles;

/// Render a generated SOP to DOCX bytes.
///
/// Works from the canonical Markdown form, which uses a small subset:
/// `#`/`##` headings, `- ` bullets, `**bold**` metadata labels, and
/// `> ` regulatory-reference quotes (rendered as italic paragraphs).
pub fn to_docx(sop: &GeneratedSop, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let rendered = to_markdown(sop);

    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2"));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1"));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            docx = docx.add_paragraph(quote_paragraph(text, styles));
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    // OOXML sizes are in half-points.
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2)
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet = Run::new()
        .add_text("\u{2022} ")
        .fonts(RunFonts::new().ascii(&styles.body_font));

    let mut para = Paragraph::new().align(AlignmentType::Left).add_run(bullet);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn quote_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().align(AlignmentType::Left).add_run(
        Run::new()
            .add_text(text)
            .italic()
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

/// Split a line into runs on `**bold**` markers.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(plain_run(before, styles));
        }

        let after_start = &remaining[start + 2..];
        match after_start.find("**") {
            Some(end) => {
                runs.push(
                    Run::new()
                        .add_text(&after_start[..end])
                        .bold()
                        .fonts(RunFonts::new().ascii(&styles.body_font)),
                );
                remaining = &after_start[end + 2..];
            }
            None => {
                // Unbalanced marker: emit the rest verbatim.
                runs.push(plain_run(remaining, styles));
                return runs;
            }
        }
    }

    if !remaining.is_empty() {
        runs.push(plain_run(remaining, styles));
    }
    runs
}

fn plain_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}
