//! Application state

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::Config;
use crate::db;
use crate::llm::LlmClient;
use crate::utils::AppError;

/// Shared application state
///
/// Cloned into every handler; all members are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Document store connection
    pub db: Surreal<Any>,
    /// Client for the hosted inference API
    pub llm: LlmClient,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = db::connect(&config.database_url).await?;
        let llm = LlmClient::new(&config.llm_api_key, &config.llm_base_url);

        Ok(Self {
            config: config.clone(),
            db,
            llm,
        })
    }
}
