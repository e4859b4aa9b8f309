//! Database Module
//!
//! SurrealDB connection and the complaint repository. The engine is
//! selected by the connection string (`rocksdb://…` in production,
//! `mem://` in tests), so every caller works against `Surreal<Any>`.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};

use crate::utils::AppError;

const NAMESPACE: &str = "civicdesk";
const DATABASE: &str = "civicdesk";

/// Open the document store at the configured connection string
pub async fn connect(url: &str) -> Result<Surreal<Any>, AppError> {
    let db = any::connect(url)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database at {url}: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

    tracing::info!("Database connection established ({url})");

    Ok(db)
}
