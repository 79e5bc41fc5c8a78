use sea_orm::entity::prelude::*;
use table_record_derive::table_record;

#[table_record(updated_at)]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    pub total_amount: f64,
    pub delivery_fee: Option<f64>,
    pub items: Json,
    pub delivery_address: Json,
    pub delivery_latitude: Option<String>,
    pub delivery_longitude: Option<String>,
    pub delivery_zone_id: Option<String>,
    pub google_maps_link: Option<String>,
    pub qr_code: Option<String>,
    #[sea_orm(default_value = "pending")]
    pub status: String,
    pub delivery_notes: Option<String>,
    pub validated_by: Option<Uuid>,
    pub validated_at: Option<DateTimeWithTimeZone>,
    pub assigned_to: Option<Uuid>,
    pub assigned_at: Option<DateTimeWithTimeZone>,
    pub picked_up_at: Option<DateTimeWithTimeZone>,
    pub delivered_at: Option<DateTimeWithTimeZone>,
}

impl ActiveModelBehavior for ActiveModel {}
