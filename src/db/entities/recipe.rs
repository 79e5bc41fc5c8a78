use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: String,
    pub difficulty: Option<String>,
    pub cook_time: i32,
    pub prep_time: Option<i32>,
    pub servings: i32,
    #[sea_orm(default_value = 0.0)]
    pub rating: f64,
    #[sea_orm(default_value = 0)]
    pub view_count: i32,
    pub ingredients: Json,
    pub instructions: Vec<String>,
    #[sea_orm(indexed)]
    pub video_id: Option<Uuid>,
    pub created_by: Option<Uuid>,
}

impl ActiveModelBehavior for ActiveModel {}
