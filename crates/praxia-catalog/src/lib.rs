//! praxia-catalog
//!
//! Static reference data: category weights, benchmarks, the category
//! adjacency table, the recommendation catalog, SOP templates, and
//! compliance requirements. Pure data, loaded once, never mutated.
//!
//! Every table is keyed exhaustively over the closed `Category` enum —
//! either through an exhaustive `match` (compiler-checked) or through the
//! table tests in `tests/catalog.rs`.

pub mod adjacency;
pub mod benchmarks;
pub mod error;
pub mod recommendations;
pub mod requirements;
pub mod sop_templates;
pub mod weights;

use praxia_core::models::compliance::ComplianceRequirement;
use praxia_core::models::sop::SopTemplate;

use crate::error::CatalogError;

/// Look up an SOP template by id. This is a hard failure: an unknown
/// template id means the caller asked for something that does not exist.
pub fn sop_template(id: &str) -> Result<&'static SopTemplate, CatalogError> {
    sop_templates::all()
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| CatalogError::UnknownTemplate(id.to_string()))
}

/// Look up a compliance requirement by id.
pub fn requirement(id: &str) -> Result<&'static ComplianceRequirement, CatalogError> {
    requirements::all()
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| CatalogError::UnknownRequirement(id.to_string()))
}
