//! Route tables.

pub mod ranger;
pub use ranger::ranger_routes;
