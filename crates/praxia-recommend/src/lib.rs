//! praxia-recommend
//!
//! Filters and ranks the static recommendation catalog against a
//! practice's health score and profile, then buckets the results the way
//! the recommendations screen presents them.

pub mod engine;

pub use engine::generate;
