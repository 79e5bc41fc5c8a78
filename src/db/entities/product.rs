use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    pub unit: String,
    pub category: String,
    #[sea_orm(default_value = 0.0)]
    pub rating: f64,
    #[sea_orm(default_value = true)]
    pub in_stock: bool,
    pub promotion: Option<Json>,
}

impl ActiveModelBehavior for ActiveModel {}
