use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "admin_permissions")]
pub struct Model {
    #[sea_orm(unique)]
    pub admin_id: Uuid,
    pub permission_level: String,
}

impl ActiveModelBehavior for ActiveModel {}
