//! Fixed statements against the `powerranger` table. Values are always bound as parameters.
//!
//! The table is expected to exist:
//!
//! ```sql
//! CREATE TABLE powerranger (
//!     id SERIAL PRIMARY KEY,
//!     color TEXT NOT NULL,
//!     name TEXT NOT NULL,
//!     power DOUBLE PRECISION NOT NULL
//! );
//! ```
//!
//! `id` and `power` are cast on the way out so INT4/INT8 ids and REAL/DOUBLE
//! PRECISION powers all decode into `i64` and `f64`.

pub const SELECT_ALL: &str =
    "SELECT id::INT8 AS id, color, name, power::FLOAT8 AS power FROM powerranger";

pub const SELECT_BY_ID: &str =
    "SELECT id::INT8 AS id, color, name, power::FLOAT8 AS power FROM powerranger WHERE id = $1";

pub const SELECT_BY_COLOR: &str =
    "SELECT id::INT8 AS id, color, name, power::FLOAT8 AS power FROM powerranger WHERE color = $1";

pub const INSERT: &str =
    "INSERT INTO powerranger (color, name, power) VALUES ($1, $2, $3) RETURNING id::INT8 AS id";

/// Liveness probe run once at startup.
pub const PING: &str = "SELECT 1";
