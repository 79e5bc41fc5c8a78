use sea_orm::DatabaseConnection;
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::Video, video};

#[derive(Clone)]
pub struct VideoDao {
    db: DatabaseConnection,
}

impl DaoBase for VideoDao {
    type Entity = Video;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl VideoDao {
    pub async fn increment_views(&self, id: &Uuid) -> DaoResult<video::Model> {
        self.increment(*id, video::Column::Views).await
    }

    pub async fn increment_likes(&self, id: &Uuid) -> DaoResult<video::Model> {
        self.increment(*id, video::Column::Likes).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::VideoDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::video;

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn video_model(id: Uuid, views: i32, likes: i32) -> video::Model {
        video::Model {
            id,
            title: "Tarte tatin".to_string(),
            description: None,
            video_url: None,
            thumbnail: None,
            duration: Some("12:30".to_string()),
            category: "desserts".to_string(),
            views,
            likes,
            recipe_id: None,
            created_by: None,
            created_at: ts(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn increment_views_is_a_single_update() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[video_model(id, 42, 3)]])
            .into_connection();
        let dao = VideoDao::new(&db);

        let updated = dao.increment_views(&id).await.expect("update should succeed");
        assert_eq!(updated.views, 42);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#"SET \"views\" = \"views\" + $1"#), "{log}");
        assert!(log.contains(r#"\"updated_at\" = CURRENT_TIMESTAMP"#), "{log}");
        assert!(log.contains("RETURNING"), "{log}");
        assert!(!log.contains("SELECT"), "{log}");
        assert!(log.contains("Int(Some(1))"), "{log}");
    }

    #[tokio::test]
    async fn increment_likes_targets_the_likes_column() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[video_model(id, 42, 4)]])
            .into_connection();
        let dao = VideoDao::new(&db);

        dao.increment_likes(&id).await.expect("update should succeed");

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#"SET \"likes\" = \"likes\" + $1"#), "{log}");
        assert!(!log.contains(r#"\"views\" ="#), "{log}");
    }

    #[tokio::test]
    async fn increment_likes_propagates_not_found() {
        let missing_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<video::Model>::new()])
            .into_connection();
        let dao = VideoDao::new(&db);

        let err = dao
            .increment_likes(&missing_id)
            .await
            .expect_err("update should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "videos", id } if id == missing_id
        ));
    }
}
