/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_URL | rocksdb://data/civicdesk | SurrealDB connection string |
/// | LLM_API_KEY | (empty) | Bearer key for the inference endpoint |
/// | LLM_BASE_URL | https://llm.monsterapi.ai | Inference endpoint base URL |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 DATABASE_URL=mem:// cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SurrealDB connection string (rocksdb://path, mem://, ...)
    pub database_url: String,
    /// Bearer key for the hosted inference API
    pub llm_api_key: String,
    /// Base URL of the hosted inference API
    pub llm_base_url: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "rocksdb://data/civicdesk".into()),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or_default(),
            llm_base_url: std::env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| "https://llm.monsterapi.ai".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
