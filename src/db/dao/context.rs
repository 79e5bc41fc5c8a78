use sea_orm::DatabaseConnection;

use super::{DaoBase, RecipeDao, VideoDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn video(&self) -> VideoDao {
        DaoBase::new(&self.db)
    }

    pub fn recipe(&self) -> RecipeDao {
        DaoBase::new(&self.db)
    }
}
