//! Complaint Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a member of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value: '{value}'")]
pub struct UnknownValueError {
    pub field: &'static str,
    pub value: String,
}

/// Complaint category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IssueType {
    #[serde(rename = "pothole")]
    Pothole,
    #[serde(rename = "waste management")]
    WasteManagement,
    #[serde(rename = "streetlight issue")]
    StreetlightIssue,
    #[serde(rename = "water supply")]
    WaterSupply,
    #[serde(rename = "other")]
    Other,
}

impl IssueType {
    /// All members, in display order
    pub const ALL: [IssueType; 5] = [
        IssueType::Pothole,
        IssueType::WasteManagement,
        IssueType::StreetlightIssue,
        IssueType::WaterSupply,
        IssueType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Pothole => "pothole",
            IssueType::WasteManagement => "waste management",
            IssueType::StreetlightIssue => "streetlight issue",
            IssueType::WaterSupply => "water supply",
            IssueType::Other => "other",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValueError {
                field: "issueType",
                value: s.to_string(),
            })
    }
}

/// Complaint processing status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ComplaintStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    /// All members, in workflow order (transitions are not constrained to it)
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Pending,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl Default for ComplaintStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValueError {
                field: "status",
                value: s.to_string(),
            })
    }
}

/// Complaint entity as exposed over the API
///
/// Field names stay camelCase on the wire; the existing admin panel and
/// chat page depend on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Record id in `complaint:<key>` form, assigned by the store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub issue_type: IssueType,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    #[serde(default)]
    pub status: ComplaintStatus,
}

/// Create complaint payload
///
/// Fields are optional at the serde level so that missing ones reach the
/// service and come back as a structured 400 instead of a body-rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintCreate {
    pub issue_type: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Status update payload (POST /complaints/update-status)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub id: Option<String>,
    pub status: Option<String>,
}

/// Status update payload for the path-addressed form (PUT /complaints/{id})
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdateBody {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_type_round_trip() {
        for issue in IssueType::ALL {
            let parsed: IssueType = issue.as_str().parse().unwrap();
            assert_eq!(parsed, issue);
        }
    }

    #[test]
    fn test_issue_type_rejects_unknown() {
        let err = "bridge".parse::<IssueType>().unwrap_err();
        assert_eq!(err.field, "issueType");
        assert_eq!(err.value, "bridge");

        // Members are matched exactly, not case-insensitively
        assert!("Pothole".parse::<IssueType>().is_err());
    }

    #[test]
    fn test_issue_type_serde_uses_wire_names() {
        let json = serde_json::to_string(&IssueType::WasteManagement).unwrap();
        assert_eq!(json, "\"waste management\"");

        let back: IssueType = serde_json::from_str("\"streetlight issue\"").unwrap();
        assert_eq!(back, IssueType::StreetlightIssue);
    }

    #[test]
    fn test_status_round_trip() {
        for status in ComplaintStatus::ALL {
            let parsed: ComplaintStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(ComplaintStatus::default(), ComplaintStatus::Pending);
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("Done".parse::<ComplaintStatus>().is_err());
        assert!("pending".parse::<ComplaintStatus>().is_err());
    }

    #[test]
    fn test_status_serde_in_progress() {
        let json = serde_json::to_string(&ComplaintStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }

    #[test]
    fn test_complaint_wire_field_names() {
        let complaint = Complaint {
            id: Some("complaint:abc".to_string()),
            issue_type: IssueType::Pothole,
            description: "Large hole on Main St".to_string(),
            reported_at: Utc::now(),
            status: ComplaintStatus::Pending,
        };

        let value = serde_json::to_value(&complaint).unwrap();
        assert_eq!(value["issueType"], "pothole");
        assert_eq!(value["status"], "Pending");
        assert!(value["reportedAt"].is_string());
    }

    #[test]
    fn test_create_payload_tolerates_missing_fields() {
        let payload: ComplaintCreate = serde_json::from_str("{}").unwrap();
        assert!(payload.issue_type.is_none());
        assert!(payload.description.is_none());
        assert!(payload.status.is_none());
    }
}
