//! HTTP handlers for the power ranger endpoints.

pub mod ranger;
pub use ranger::*;
