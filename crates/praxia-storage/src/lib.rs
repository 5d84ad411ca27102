//! praxia-storage
//!
//! The persistence boundary. The core crates are pure; everything that
//! reads or writes practice data goes through here as a single
//! request/response round-trip. Backed by an in-process JSON object
//! store; the key layout in [`keys`] is the stable contract a remote
//! backend would implement the same way.

pub mod error;
pub mod keys;
pub mod memory;
pub mod state;
