use sea_orm::EntityTrait;

/// Implemented by `#[table_record]` for every entity of the external schema.
pub trait TableRecord: EntityTrait {
    /// Column refreshed to the current time by every update, if the table has one.
    fn updated_at_column() -> Option<Self::Column>;
}
