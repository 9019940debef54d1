//! Data access for the `powerranger` table.

use crate::error::AppError;
use crate::model::{NewPowerRanger, PowerRanger};
use crate::sql;
use async_trait::async_trait;
use sqlx::PgPool;

/// Queries the handlers depend on. Empty results are `Ok(vec![])`, never an error.
#[async_trait]
pub trait RangerStore: Send + Sync {
    /// Every row, in the store's scan order.
    async fn list_all(&self) -> Result<Vec<PowerRanger>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Vec<PowerRanger>, AppError>;

    async fn find_by_color(&self, color: &str) -> Result<Vec<PowerRanger>, AppError>;

    /// Insert one row and return the id the store assigned.
    async fn insert(&self, ranger: &NewPowerRanger) -> Result<i64, AppError>;
}

/// `RangerStore` over a shared PostgreSQL pool.
#[derive(Clone)]
pub struct PgRangerStore {
    pool: PgPool,
}

impl PgRangerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RangerStore for PgRangerStore {
    async fn list_all(&self) -> Result<Vec<PowerRanger>, AppError> {
        tracing::debug!(sql = %sql::SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, PowerRanger>(sql::SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Vec<PowerRanger>, AppError> {
        tracing::debug!(sql = %sql::SELECT_BY_ID, id, "query");
        let rows = sqlx::query_as::<_, PowerRanger>(sql::SELECT_BY_ID)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<PowerRanger>, AppError> {
        tracing::debug!(sql = %sql::SELECT_BY_COLOR, color, "query");
        let rows = sqlx::query_as::<_, PowerRanger>(sql::SELECT_BY_COLOR)
            .bind(color)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, ranger: &NewPowerRanger) -> Result<i64, AppError> {
        tracing::debug!(sql = %sql::INSERT, params = ?ranger, "query");
        let (id,): (i64,) = sqlx::query_as(sql::INSERT)
            .bind(&ranger.color)
            .bind(&ranger.name)
            .bind(ranger.power)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }
}

/// Check the pool can reach the database.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(sql::PING).execute(pool).await?;
    Ok(())
}
