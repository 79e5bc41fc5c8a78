use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "manageable_product_categories")]
pub struct Model {
    pub category_id: Uuid,
    pub manager_id: Uuid,
}

impl ActiveModelBehavior for ActiveModel {}
