use sea_orm::entity::prelude::*;

// Tracking rows are only ever updated in place, so the table has no created_at.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "delivery_tracking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub order_id: Uuid,
    pub status: String,
    pub location: Option<String>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}

impl crate::db::dao::TableRecord for Entity {
    fn updated_at_column() -> Option<Column> {
        Some(Column::UpdatedAt)
    }
}
