//! praxia-compliance
//!
//! Evaluates a practice's compliance flags against the requirement
//! catalog, builds the prioritized remediation plan, and aggregates the
//! dashboard figures. Pure computation; "today" is always supplied by
//! the caller.

pub mod action_plan;
pub mod dashboard;
pub mod evaluate;

pub use action_plan::action_plan;
pub use dashboard::dashboard;
pub use evaluate::evaluate;
