//! Type conversions
//!
//! Database models (db::models) to API response models (shared::models).

use crate::db::models as db;
use shared::models as api;

pub fn option_record_id_to_string(id: &Option<surrealdb::RecordId>) -> Option<String> {
    id.as_ref().map(|id| id.to_string())
}

impl From<db::Complaint> for api::Complaint {
    fn from(c: db::Complaint) -> Self {
        Self {
            id: option_record_id_to_string(&c.id),
            issue_type: c.issue_type,
            description: c.description,
            reported_at: c.reported_at,
            status: c.status,
        }
    }
}
