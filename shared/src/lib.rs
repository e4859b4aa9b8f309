//! Shared wire-level types for CivicDesk
//!
//! Holds everything the HTTP surface exchanges with its consumers:
//!
//! - **models** (`models`): the [`Complaint`] entity, the
//!   [`IssueType`] / [`ComplaintStatus`] enumerations, and the
//!   request/response payloads for every endpoint.
//!
//! The server keeps its own database-side model; conversions live on the
//! server side so this crate stays free of storage concerns.

pub mod models;

// Re-export common types
pub use models::{
    ChatRequest, ChatResponse, Complaint, ComplaintCreate, ComplaintStatus, IssueType,
    StatusUpdateBody, StatusUpdateRequest, UnknownValueError,
};
