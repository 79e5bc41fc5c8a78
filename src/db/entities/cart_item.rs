use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    #[sea_orm(indexed)]
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

impl ActiveModelBehavior for ActiveModel {}
