use thiserror::Error;

use praxia_catalog::error::CatalogError;

/// The one hard failure in SOP generation: asking for a template that
/// does not exist. Missing practice data never errors; it degrades to a
/// visible `[variable]` marker instead.
#[derive(Debug, Error)]
pub enum SopError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}
