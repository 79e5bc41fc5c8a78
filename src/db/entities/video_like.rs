use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "video_likes")]
pub struct Model {
    #[sea_orm(indexed)]
    pub video_id: Uuid,
    pub profile_id: Uuid,
}

impl ActiveModelBehavior for ActiveModel {}
