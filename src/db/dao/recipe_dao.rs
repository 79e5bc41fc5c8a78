use sea_orm::DatabaseConnection;
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::Recipe, recipe};

#[derive(Clone)]
pub struct RecipeDao {
    db: DatabaseConnection,
}

impl DaoBase for RecipeDao {
    type Entity = Recipe;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl RecipeDao {
    pub async fn increment_views(&self, id: &Uuid) -> DaoResult<recipe::Model> {
        self.increment(*id, recipe::Column::ViewCount).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;
    use uuid::Uuid;

    use super::RecipeDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::recipe;

    fn recipe_model(id: Uuid, view_count: i32) -> recipe::Model {
        recipe::Model {
            id,
            title: "Ratatouille".to_string(),
            description: None,
            image: None,
            category: "plats".to_string(),
            difficulty: Some("facile".to_string()),
            cook_time: 45,
            prep_time: Some(20),
            servings: 4,
            rating: 4.5,
            view_count,
            ingredients: json!([{ "name": "courgette", "qty": 2 }]),
            instructions: vec!["Couper".to_string(), "Mijoter".to_string()],
            video_id: None,
            created_by: None,
            created_at: FixedOffset::east_opt(0)
                .expect("offset should be valid")
                .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                .single()
                .expect("timestamp should be valid"),
        }
    }

    #[tokio::test]
    async fn increment_views_bumps_view_count_in_place() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[recipe_model(id, 1)]])
            .into_connection();
        let dao = RecipeDao::new(&db);

        let updated = dao.increment_views(&id).await.expect("update should succeed");
        assert_eq!(updated.view_count, 1);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(
            log.contains(r#"SET \"view_count\" = \"view_count\" + $1"#),
            "{log}"
        );
        // recipes carry no updated_at column
        assert!(!log.contains("updated_at"), "{log}");
    }

    #[tokio::test]
    async fn missing_recipe_is_not_found() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<recipe::Model>::new()])
            .into_connection();
        let dao = RecipeDao::new(&db);

        let err = dao.increment_views(&id).await.expect_err("should fail");
        assert!(matches!(err, DaoLayerError::NotFound { entity: "recipes", .. }));
    }
}
