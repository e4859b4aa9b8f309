//! Service Module
//!
//! Business rules live here; handlers stay thin.

pub mod complaint_service;

pub use complaint_service::ComplaintService;
