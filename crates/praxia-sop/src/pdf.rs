use praxia_core::models::sop::GeneratedSop;

use crate::error::ExportError;

/// Generate a PDF from a generated SOP.
///
/// Not yet implemented — PDF output needs a rendering library (e.g.
/// `typst`, `printpdf`, or shelling out to `weasyprint`) and the
/// selection is still open. DOCX is the supported rich export in the
/// meantime.
pub fn to_pdf(_sop: &GeneratedSop) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Pdf(
        "PDF generation not yet implemented — library selection pending".to_string(),
    ))
}
