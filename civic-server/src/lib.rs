//! CivicDesk Server - citizen complaint tracking backend
//!
//! # Module structure
//!
//! ```text
//! civic-server/src/
//! ├── core/          # Configuration and application state
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SurrealDB models and repositories
//! ├── services/      # Business rules (complaint lifecycle)
//! ├── llm/           # Forwarder to the hosted inference API
//! └── utils/         # Errors, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod llm;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{AppState, Config};
pub use llm::LlmClient;
pub use services::ComplaintService;
pub use utils::{AppError, AppResult};
