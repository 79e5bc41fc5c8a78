use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record(updated_at)]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub date_of_birth: Option<Date>,
    #[sea_orm(default_value = "user")]
    pub role: String,
    pub preferences: Json,
    pub privacy_settings: Json,
    pub notification_settings: Json,
}

impl ActiveModelBehavior for ActiveModel {}
