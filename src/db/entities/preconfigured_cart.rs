use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "preconfigured_carts")]
pub struct Model {
    pub name: String,
    pub items: Json,
}

impl ActiveModelBehavior for ActiveModel {}
