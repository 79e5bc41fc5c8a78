use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityName, EntityTrait, FromQueryResult, Iterable,
    PrimaryKeyToColumn, QueryFilter,
    sea_query::{Expr, ExprTrait},
};
use uuid::Uuid;

use super::base_traits::TableRecord;
use super::error::{DaoLayerError, DaoResult};

pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model: FromQueryResult + Send + Sync,
{
    type Entity: EntityTrait + TableRecord + Send + Sync;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    fn not_found(id: Uuid) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: Self::Entity::default().table_name(),
            id,
        }
    }

    fn primary_key_column() -> DaoResult<<Self::Entity as EntityTrait>::Column> {
        <Self::Entity as EntityTrait>::PrimaryKey::iter()
            .next()
            .map(|key| key.into_column())
            .ok_or_else(|| DaoLayerError::Db(DbErr::Custom("entity has no primary key".into())))
    }

    /// Adds one to an integer counter column of the row `id` in a single
    /// `UPDATE .. SET col = col + 1 .. RETURNING` statement, so concurrent
    /// increments never overwrite each other.
    async fn increment(
        &self,
        id: Uuid,
        column: <Self::Entity as EntityTrait>::Column,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let mut update = Self::Entity::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(Self::primary_key_column()?.eq(id));
        if let Some(updated_at) = Self::Entity::updated_at_column() {
            update = update.col_expr(updated_at, Expr::current_timestamp().into());
        }

        let rows = update
            .exec_with_returning(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        rows.into_iter().next().ok_or_else(|| Self::not_found(id))
    }
}
