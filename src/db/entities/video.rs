use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record(updated_at)]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    pub category: String,
    #[sea_orm(default_value = 0)]
    pub views: i32,
    #[sea_orm(default_value = 0)]
    pub likes: i32,
    #[sea_orm(indexed)]
    pub recipe_id: Option<Uuid>,
    pub created_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

impl ActiveModelBehavior for ActiveModel {}
