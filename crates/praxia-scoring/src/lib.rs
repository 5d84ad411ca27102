//! praxia-scoring
//!
//! The business health score calculator and the category
//! interconnectedness analyzer. Pure, deterministic transformations over
//! the caller's responses and the static catalog tables — no I/O, no
//! retained state between calls.

pub mod interconnect;
pub mod score;
mod topics;

pub use interconnect::analyze;
pub use score::calculate_score;
