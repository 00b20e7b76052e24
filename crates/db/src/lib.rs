//! Store access for the image dataset.
//!
//! The dataset is read-only from this crate's point of view: repositories
//! only expose `SELECT` queries. Population happens out of band.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from connection options.
///
/// The pool connects lazily, so an unreachable store does not prevent the
/// caller from starting up; the first query surfaces the failure instead.
pub fn create_pool(options: PgConnectOptions, max_connections: u32) -> DbPool {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options)
}

/// Round-trip a trivial query to verify the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
