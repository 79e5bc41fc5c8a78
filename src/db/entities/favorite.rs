use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(indexed)]
    pub profile_id: Uuid,
    pub item_id: Uuid,
    pub item_type: String,
}

impl ActiveModelBehavior for ActiveModel {}
