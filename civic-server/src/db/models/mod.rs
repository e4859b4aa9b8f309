//! Database Models

pub mod complaint;
pub mod serde_helpers;

pub use complaint::{Complaint, ComplaintId};
