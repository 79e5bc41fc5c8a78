//! Column layout of every table in the external database.

use std::fmt;

use serde::Serialize;

use self::ColumnType::{
    Boolean, Date, Integer, Jsonb, Numeric, Text, TextArray, Timestamp, Uuid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Uuid,
    Text,
    Integer,
    Numeric,
    Boolean,
    Jsonb,
    TextArray,
    Date,
    Timestamp,
}

impl ColumnType {
    pub fn sql_name(self) -> &'static str {
        match self {
            ColumnType::Uuid => "uuid",
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::Numeric => "numeric",
            ColumnType::Boolean => "boolean",
            ColumnType::Jsonb => "jsonb",
            ColumnType::TextArray => "text[]",
            ColumnType::Date => "date",
            ColumnType::Timestamp => "timestamp with time zone",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub required: bool,
    pub primary_key: bool,
    pub references: Option<&'static str>,
}

impl ColumnDef {
    pub const fn required(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            required: true,
            primary_key: false,
            references: None,
        }
    }

    pub const fn optional(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            required: false,
            primary_key: false,
            references: None,
        }
    }

    pub const fn primary_key() -> Self {
        Self {
            name: "id",
            ty: ColumnType::Uuid,
            required: true,
            primary_key: true,
            references: None,
        }
    }

    pub const fn created_at() -> Self {
        Self::required("created_at", ColumnType::Timestamp)
    }

    pub const fn references(mut self, table: &'static str) -> Self {
        self.references = Some(table);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableGroup {
    Main,
    Management,
    Cart,
    Category,
    Utility,
}

impl TableGroup {
    pub fn label(self) -> &'static str {
        match self {
            TableGroup::Main => "main",
            TableGroup::Management => "management",
            TableGroup::Cart => "cart",
            TableGroup::Category => "category",
            TableGroup::Utility => "utility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub name: &'static str,
    pub group: TableGroup,
    pub columns: &'static [ColumnDef],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&'static ColumnDef> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn foreign_keys(&self) -> impl Iterator<Item = &'static ColumnDef> + '_ {
        self.columns
            .iter()
            .filter(|column| column.references.is_some())
    }

    pub fn has_timestamps(&self) -> bool {
        self.column("created_at").is_some()
    }
}

pub static VIDEOS: TableSchema = TableSchema {
    name: "videos",
    group: TableGroup::Main,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("title", Text),
        ColumnDef::optional("description", Text),
        ColumnDef::optional("video_url", Text),
        ColumnDef::optional("thumbnail", Text),
        ColumnDef::optional("duration", Text),
        ColumnDef::required("category", Text),
        ColumnDef::required("views", Integer),
        ColumnDef::required("likes", Integer),
        ColumnDef::optional("recipe_id", Uuid).references("recipes"),
        ColumnDef::optional("created_by", Uuid).references("profiles"),
        ColumnDef::created_at(),
        ColumnDef::optional("updated_at", Timestamp),
    ],
};

pub static RECIPES: TableSchema = TableSchema {
    name: "recipes",
    group: TableGroup::Main,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("title", Text),
        ColumnDef::optional("description", Text),
        ColumnDef::optional("image", Text),
        ColumnDef::required("category", Text),
        ColumnDef::optional("difficulty", Text),
        ColumnDef::required("cook_time", Integer),
        ColumnDef::optional("prep_time", Integer),
        ColumnDef::required("servings", Integer),
        ColumnDef::required("rating", Numeric),
        ColumnDef::required("view_count", Integer),
        ColumnDef::required("ingredients", Jsonb),
        ColumnDef::required("instructions", TextArray),
        ColumnDef::optional("video_id", Uuid).references("videos"),
        ColumnDef::optional("created_by", Uuid).references("profiles"),
        ColumnDef::created_at(),
    ],
};

pub static PRODUCTS: TableSchema = TableSchema {
    name: "products",
    group: TableGroup::Main,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("name", Text),
        ColumnDef::optional("image", Text),
        ColumnDef::required("price", Numeric),
        ColumnDef::required("unit", Text),
        ColumnDef::required("category", Text),
        ColumnDef::required("rating", Numeric),
        ColumnDef::required("in_stock", Boolean),
        ColumnDef::optional("promotion", Jsonb),
        ColumnDef::created_at(),
    ],
};

pub static PROFILES: TableSchema = TableSchema {
    name: "profiles",
    group: TableGroup::Main,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::optional("email", Text),
        ColumnDef::optional("display_name", Text),
        ColumnDef::optional("photo_url", Text),
        ColumnDef::optional("phone_number", Text),
        ColumnDef::optional("bio", Text),
        ColumnDef::optional("location", Text),
        ColumnDef::optional("date_of_birth", Date),
        ColumnDef::required("role", Text),
        ColumnDef::required("preferences", Jsonb),
        ColumnDef::required("privacy_settings", Jsonb),
        ColumnDef::required("notification_settings", Jsonb),
        ColumnDef::created_at(),
        ColumnDef::required("updated_at", Timestamp),
    ],
};

pub static ORDERS: TableSchema = TableSchema {
    name: "orders",
    group: TableGroup::Main,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("user_id", Uuid).references("profiles"),
        ColumnDef::required("total_amount", Numeric),
        ColumnDef::optional("delivery_fee", Numeric),
        ColumnDef::required("items", Jsonb),
        ColumnDef::required("delivery_address", Jsonb),
        ColumnDef::optional("delivery_latitude", Text),
        ColumnDef::optional("delivery_longitude", Text),
        ColumnDef::optional("delivery_zone_id", Text),
        ColumnDef::optional("google_maps_link", Text),
        ColumnDef::optional("qr_code", Text),
        ColumnDef::required("status", Text),
        ColumnDef::optional("delivery_notes", Text),
        ColumnDef::optional("validated_by", Uuid).references("profiles"),
        ColumnDef::optional("validated_at", Timestamp),
        ColumnDef::optional("assigned_to", Uuid).references("profiles"),
        ColumnDef::optional("assigned_at", Timestamp),
        ColumnDef::optional("picked_up_at", Timestamp),
        ColumnDef::optional("delivered_at", Timestamp),
        ColumnDef::created_at(),
        ColumnDef::required("updated_at", Timestamp),
    ],
};

pub static FAVORITES: TableSchema = TableSchema {
    name: "favorites",
    group: TableGroup::Utility,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("profile_id", Uuid).references("profiles"),
        ColumnDef::required("item_id", Uuid),
        ColumnDef::required("item_type", Text),
        ColumnDef::created_at(),
    ],
};

pub static CART_ITEMS: TableSchema = TableSchema {
    name: "cart_items",
    group: TableGroup::Cart,
    columns: &[
        ColumnDef::primary_key(),
        // points at one of the four cart tables, so no single foreign table
        ColumnDef::required("cart_id", Uuid),
        ColumnDef::required("product_id", Uuid).references("products"),
        ColumnDef::required("quantity", Integer),
        ColumnDef::created_at(),
    ],
};

pub static ADMIN_PERMISSIONS: TableSchema = TableSchema {
    name: "admin_permissions",
    group: TableGroup::Management,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("admin_id", Uuid).references("profiles"),
        ColumnDef::required("permission_level", Text),
        ColumnDef::created_at(),
    ],
};

pub static DELIVERY_ZONES: TableSchema = TableSchema {
    name: "delivery_zones",
    group: TableGroup::Management,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("name", Text),
        ColumnDef::optional("description", Text),
        ColumnDef::required("boundaries", Jsonb),
        ColumnDef::created_at(),
    ],
};

pub static DELIVERY_TRACKING: TableSchema = TableSchema {
    name: "delivery_tracking",
    group: TableGroup::Management,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("order_id", Uuid).references("orders"),
        ColumnDef::required("status", Text),
        ColumnDef::optional("location", Text),
        ColumnDef::required("updated_at", Timestamp),
    ],
};

pub static PRECONFIGURED_CARTS: TableSchema = TableSchema {
    name: "preconfigured_carts",
    group: TableGroup::Cart,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("name", Text),
        ColumnDef::required("items", Jsonb),
        ColumnDef::created_at(),
    ],
};

pub static USER_CARTS: TableSchema = TableSchema {
    name: "user_carts",
    group: TableGroup::Cart,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("user_id", Uuid).references("profiles"),
        ColumnDef::required("items", Jsonb),
        ColumnDef::created_at(),
    ],
};

pub static RECIPE_CARTS: TableSchema = TableSchema {
    name: "recipe_carts",
    group: TableGroup::Cart,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("recipe_id", Uuid).references("recipes"),
        ColumnDef::required("items", Jsonb),
        ColumnDef::created_at(),
    ],
};

pub static PERSONAL_CARTS: TableSchema = TableSchema {
    name: "personal_carts",
    group: TableGroup::Cart,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("profile_id", Uuid).references("profiles"),
        ColumnDef::required("items", Jsonb),
        ColumnDef::created_at(),
    ],
};

pub static PRODUCT_CATEGORIES: TableSchema = TableSchema {
    name: "product_categories",
    group: TableGroup::Category,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("name", Text),
        ColumnDef::optional("description", Text),
        ColumnDef::created_at(),
    ],
};

pub static RECIPE_CATEGORIES: TableSchema = TableSchema {
    name: "recipe_categories",
    group: TableGroup::Category,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("name", Text),
        ColumnDef::optional("description", Text),
        ColumnDef::created_at(),
    ],
};

pub static MANAGEABLE_PRODUCT_CATEGORIES: TableSchema = TableSchema {
    name: "manageable_product_categories",
    group: TableGroup::Category,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("category_id", Uuid).references("product_categories"),
        ColumnDef::required("manager_id", Uuid).references("profiles"),
        ColumnDef::created_at(),
    ],
};

pub static MANAGEABLE_RECIPE_CATEGORIES: TableSchema = TableSchema {
    name: "manageable_recipe_categories",
    group: TableGroup::Category,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("category_id", Uuid).references("recipe_categories"),
        ColumnDef::required("manager_id", Uuid).references("profiles"),
        ColumnDef::created_at(),
    ],
};

pub static USER_LOCATIONS: TableSchema = TableSchema {
    name: "user_locations",
    group: TableGroup::Utility,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("profile_id", Uuid).references("profiles"),
        ColumnDef::required("location", Jsonb),
        ColumnDef::created_at(),
    ],
};

pub static USER_HISTORY: TableSchema = TableSchema {
    name: "user_history",
    group: TableGroup::Utility,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("profile_id", Uuid).references("profiles"),
        ColumnDef::required("actions", Jsonb),
        ColumnDef::created_at(),
    ],
};

pub static VIDEO_LIKES: TableSchema = TableSchema {
    name: "video_likes",
    group: TableGroup::Utility,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("video_id", Uuid).references("videos"),
        ColumnDef::required("profile_id", Uuid).references("profiles"),
        ColumnDef::created_at(),
    ],
};

pub static NEWSLETTER_CAMPAIGNS: TableSchema = TableSchema {
    name: "newsletter_campaigns",
    group: TableGroup::Utility,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("name", Text),
        ColumnDef::optional("description", Text),
        ColumnDef::required("recipients", Jsonb),
        ColumnDef::created_at(),
    ],
};

pub static TEAM_MEMBERS: TableSchema = TableSchema {
    name: "team_members",
    group: TableGroup::Utility,
    columns: &[
        ColumnDef::primary_key(),
        ColumnDef::required("name", Text),
        ColumnDef::required("role", Text),
        ColumnDef::created_at(),
    ],
};

pub static TABLES: &[&TableSchema] = &[
    &VIDEOS,
    &RECIPES,
    &PRODUCTS,
    &PROFILES,
    &ORDERS,
    &FAVORITES,
    &CART_ITEMS,
    &ADMIN_PERMISSIONS,
    &DELIVERY_ZONES,
    &DELIVERY_TRACKING,
    &PRECONFIGURED_CARTS,
    &USER_CARTS,
    &RECIPE_CARTS,
    &PERSONAL_CARTS,
    &PRODUCT_CATEGORIES,
    &RECIPE_CATEGORIES,
    &MANAGEABLE_PRODUCT_CATEGORIES,
    &MANAGEABLE_RECIPE_CATEGORIES,
    &USER_LOCATIONS,
    &USER_HISTORY,
    &VIDEO_LIKES,
    &NEWSLETTER_CAMPAIGNS,
    &TEAM_MEMBERS,
];

/// Keys of the aggregate database interface.
pub static AGGREGATE_SCHEMA: &[&str] = &[
    "videos",
    "recipes",
    "products",
    "profiles",
    "orders",
    "favorites",
    "cart_items",
    "admin_permissions",
    "delivery_zones",
    "delivery_tracking",
    "preconfigured_carts",
    "user_carts",
    "recipe_carts",
    "personal_carts",
    "product_categories",
    "recipe_categories",
    "manageable_product_categories",
    "manageable_recipe_categories",
    "user_locations",
    "user_history",
    "video_likes",
    "newsletter_campaigns",
    "team_members",
];

pub fn table_definitions() -> &'static [&'static TableSchema] {
    TABLES
}

pub fn find_table(name: &str) -> Option<&'static TableSchema> {
    TABLES.iter().copied().find(|table| table.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_has_a_uuid_primary_key() {
        for table in TABLES {
            let id = table.column("id").expect("id column");
            assert!(id.primary_key, "{} id should be the primary key", table.name);
            assert_eq!(id.ty, ColumnType::Uuid);
        }
    }

    #[test]
    fn foreign_keys_of_orders() {
        let targets: Vec<_> = ORDERS
            .foreign_keys()
            .map(|column| (column.name, column.references))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("user_id", Some("profiles")),
                ("validated_by", Some("profiles")),
                ("assigned_to", Some("profiles")),
            ]
        );
    }

    #[test]
    fn delivery_tracking_has_no_created_at() {
        assert!(!DELIVERY_TRACKING.has_timestamps());
        assert!(VIDEOS.has_timestamps());
    }

    #[test]
    fn find_table_by_name() {
        let recipes = find_table("recipes").expect("recipes should be defined");
        assert_eq!(
            recipes.column("instructions").map(|c| c.ty),
            Some(ColumnType::TextArray)
        );
        assert!(find_table("unknown").is_none());
    }

    #[test]
    fn column_types_render_as_sql() {
        assert_eq!(ColumnType::TextArray.to_string(), "text[]");
        assert_eq!(ColumnType::Jsonb.sql_name(), "jsonb");
    }
}
