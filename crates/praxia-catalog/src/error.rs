use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown SOP template: {0}")]
    UnknownTemplate(String),

    #[error("unknown compliance requirement: {0}")]
    UnknownRequirement(String),
}
