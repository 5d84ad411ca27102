pub mod category;
pub mod compliance;
pub mod connection;
pub mod practice;
pub mod recommendation;
pub mod response;
pub mod score;
pub mod sop;
