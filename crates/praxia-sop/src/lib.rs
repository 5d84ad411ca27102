//! praxia-sop
//!
//! Standard Operating Procedure generation: fills a catalog template with
//! practice data, computes the next review date, and exports the result
//! as Markdown (canonical), HTML, or DOCX.

pub mod docx;
pub mod error;
pub mod generate;
pub mod markdown;
pub mod pdf;
pub mod styles;

pub use generate::generate;
pub use markdown::{to_html, to_markdown};
