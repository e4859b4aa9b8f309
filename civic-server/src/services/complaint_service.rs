//! Complaint Service
//!
//! The single place the complaint lifecycle rules are enforced: field
//! presence, enumeration membership, and creation defaults. Handlers
//! delegate here; the repository below this layer only sees typed values.

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::db::models::Complaint;
use crate::db::repository::ComplaintRepository;
use crate::utils::{AppError, AppResult, MAX_DESCRIPTION_LEN, validate_required_text};
use shared::models::{ComplaintCreate, ComplaintStatus, IssueType, UnknownValueError};

#[derive(Clone)]
pub struct ComplaintService {
    repo: ComplaintRepository,
}

impl ComplaintService {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            repo: ComplaintRepository::new(db),
        }
    }

    /// List every complaint on record
    pub async fn list(&self) -> AppResult<Vec<Complaint>> {
        Ok(self.repo.find_all().await?)
    }

    /// Validate and persist a new complaint
    ///
    /// `status` defaults to Pending when omitted; `reported_at` is always
    /// the server clock.
    pub async fn create(&self, payload: ComplaintCreate) -> AppResult<Complaint> {
        let issue_type = payload
            .issue_type
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::validation("issueType is required"))?;
        let issue_type: IssueType = issue_type
            .parse()
            .map_err(|e: UnknownValueError| AppError::validation(e.to_string()))?;

        let description = payload
            .description
            .as_deref()
            .ok_or_else(|| AppError::validation("description is required"))?;
        validate_required_text(description, "description", MAX_DESCRIPTION_LEN)?;

        let status = match payload.status.as_deref() {
            Some(s) => parse_status(s)?,
            None => ComplaintStatus::default(),
        };

        let complaint = Complaint::new(issue_type, description.to_string(), status);
        Ok(self.repo.create(complaint).await?)
    }

    /// Overwrite the status of an existing complaint
    ///
    /// Transitions are unconstrained: any enumeration member may follow
    /// any other.
    pub async fn update_status(
        &self,
        id: Option<&str>,
        status: Option<&str>,
    ) -> AppResult<Complaint> {
        let id = id
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::validation("id is required"))?;
        let status = status.ok_or_else(|| AppError::validation("status is required"))?;
        let status = parse_status(status)?;

        Ok(self.repo.update_status(id, status).await?)
    }
}

fn parse_status(value: &str) -> AppResult<ComplaintStatus> {
    value
        .parse()
        .map_err(|e: UnknownValueError| AppError::invalid_status(e.to_string()))
}
