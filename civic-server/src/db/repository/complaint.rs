//! Complaint Repository

use super::{BaseRepository, RepoError, RepoResult, record_id, strip_table_prefix};
use crate::db::models::Complaint;
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use shared::models::ComplaintStatus;

const TABLE: &str = "complaint";

#[derive(Clone)]
pub struct ComplaintRepository {
    base: BaseRepository,
}

impl ComplaintRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all complaints (no ordering imposed)
    pub async fn find_all(&self) -> RepoResult<Vec<Complaint>> {
        let complaints: Vec<Complaint> = self
            .base
            .db()
            .query("SELECT * FROM complaint")
            .await?
            .take(0)?;
        Ok(complaints)
    }

    /// Find complaint by id
    ///
    /// Accepts both "complaint:xxx" and bare "xxx" forms.
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Complaint>> {
        let key = strip_table_prefix(TABLE, id);
        let complaint: Option<Complaint> = self.base.db().select((TABLE, key)).await?;
        Ok(complaint)
    }

    /// Persist a new complaint, returning it with its assigned id
    pub async fn create(&self, complaint: Complaint) -> RepoResult<Complaint> {
        let created: Option<Complaint> = self.base.db().create(TABLE).content(complaint).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create complaint".to_string()))
    }

    /// Overwrite the status of an existing complaint
    ///
    /// Status is the only mutable field; everything else is merged
    /// untouched. Returns the updated record.
    pub async fn update_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> RepoResult<Complaint> {
        let key = strip_table_prefix(TABLE, id);

        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Complaint {} not found", id)))?;

        #[derive(Serialize)]
        struct StatusMerge {
            status: ComplaintStatus,
        }

        let thing = record_id(TABLE, key);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", StatusMerge { status }))
            .await?;

        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Complaint {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Complaint;
    use shared::models::IssueType;
    use surrealdb::engine::any;

    async fn test_repo() -> ComplaintRepository {
        let db = any::connect("mem://").await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        ComplaintRepository::new(db)
    }

    fn pothole() -> Complaint {
        Complaint::new(
            IssueType::Pothole,
            "Large hole on Main St".to_string(),
            ComplaintStatus::default(),
        )
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = test_repo().await;

        let created = repo.create(pothole()).await.unwrap();
        let id = created.id.expect("store assigns an id");
        assert_eq!(id.table(), "complaint");
        assert_eq!(created.status, ComplaintStatus::Pending);
    }

    #[tokio::test]
    async fn test_find_by_id_accepts_both_forms() {
        let repo = test_repo().await;
        let created = repo.create(pothole()).await.unwrap();
        let full_id = created.id.unwrap().to_string();

        let by_full = repo.find_by_id(&full_id).await.unwrap();
        assert!(by_full.is_some());

        let bare = strip_table_prefix("complaint", &full_id);
        let by_bare = repo.find_by_id(bare).await.unwrap();
        assert!(by_bare.is_some());
    }

    #[tokio::test]
    async fn test_find_all_returns_every_record() {
        let repo = test_repo().await;
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.create(pothole()).await.unwrap();
        repo.create(Complaint::new(
            IssueType::WaterSupply,
            "No water since Monday".to_string(),
            ComplaintStatus::default(),
        ))
        .await
        .unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let repo = test_repo().await;
        let err = repo
            .update_status("nonexistent", ComplaintStatus::Resolved)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_status_changes_only_status() {
        let repo = test_repo().await;
        let created = repo.create(pothole()).await.unwrap();
        let id = created.id.clone().unwrap().to_string();

        let updated = repo
            .update_status(&id, ComplaintStatus::Resolved)
            .await
            .unwrap();

        assert_eq!(updated.status, ComplaintStatus::Resolved);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.issue_type, created.issue_type);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.reported_at, created.reported_at);
    }

    #[tokio::test]
    async fn test_backward_transition_is_permitted() {
        let repo = test_repo().await;
        let created = repo.create(pothole()).await.unwrap();
        let id = created.id.unwrap().to_string();

        repo.update_status(&id, ComplaintStatus::Resolved)
            .await
            .unwrap();
        let back = repo
            .update_status(&id, ComplaintStatus::Pending)
            .await
            .unwrap();
        assert_eq!(back.status, ComplaintStatus::Pending);
    }
}
