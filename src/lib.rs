//! powerranger: REST access to the `powerranger` table in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError, StartupError};
pub use model::{NewPowerRanger, PowerRanger};
pub use routes::ranger_routes;
pub use server::{app, connect, run};
pub use state::AppState;
pub use store::{PgRangerStore, RangerStore};
