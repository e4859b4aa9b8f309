//! API models

pub mod chat;
pub mod complaint;

pub use chat::{ChatRequest, ChatResponse};
pub use complaint::{
    Complaint, ComplaintCreate, ComplaintStatus, IssueType, StatusUpdateBody, StatusUpdateRequest,
    UnknownValueError,
};
