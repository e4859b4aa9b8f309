//! Complaint Model (database side)

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{ComplaintStatus, IssueType};

pub type ComplaintId = RecordId;

/// Complaint record as stored in SurrealDB
///
/// The enumerations are the shared wire types; their string forms
/// ("waste management", "In Progress", …) are what lands in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ComplaintId>,

    /// Category, immutable after creation
    pub issue_type: IssueType,

    /// Citizen-provided free text, immutable after creation
    pub description: String,

    /// Server clock at creation
    pub reported_at: DateTime<Utc>,

    /// The only mutable field
    #[serde(default)]
    pub status: ComplaintStatus,
}

impl Complaint {
    /// Build a new record ready for insertion (id assigned by the store)
    pub fn new(issue_type: IssueType, description: String, status: ComplaintStatus) -> Self {
        Self {
            id: None,
            issue_type,
            description,
            reported_at: Utc::now(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_reported_at_to_now() {
        let before = Utc::now();
        let complaint = Complaint::new(
            IssueType::Pothole,
            "Large hole on Main St".to_string(),
            ComplaintStatus::default(),
        );
        let after = Utc::now();

        assert!(complaint.id.is_none());
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert!(complaint.reported_at >= before && complaint.reported_at <= after);
    }

    #[test]
    fn test_id_serializes_as_string() {
        let mut complaint = Complaint::new(
            IssueType::Other,
            "x".to_string(),
            ComplaintStatus::Resolved,
        );
        complaint.id = Some(RecordId::from_table_key("complaint", "abc"));

        let value = serde_json::to_value(&complaint).unwrap();
        assert_eq!(value["id"], "complaint:abc");
        assert_eq!(value["status"], "Resolved");
    }
}
