//! praxia-core
//!
//! Pure domain types for the practice business-health assessment.
//! No I/O dependency — this is the shared vocabulary of the Praxia system,
//! exported to the web front end via ts-rs.

pub mod error;
pub mod models;
