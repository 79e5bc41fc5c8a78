use serde::Serialize;

/// Shape summary of one table of the external database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    pub name: &'static str,
    pub columns: u32,
    pub has_timestamps: bool,
    pub has_uuid: bool,
}

impl TableDescriptor {
    pub const fn new(name: &'static str, columns: u32) -> Self {
        Self {
            name,
            columns,
            has_timestamps: true,
            has_uuid: true,
        }
    }
}

pub static TABLE_STATS: &[TableDescriptor] = &[
    // main tables
    TableDescriptor::new("videos", 12),
    TableDescriptor::new("recipes", 15),
    TableDescriptor::new("products", 9),
    TableDescriptor::new("profiles", 14),
    TableDescriptor::new("orders", 19),
    // carts
    TableDescriptor::new("cart_items", 7),
    TableDescriptor::new("user_carts", 5),
    TableDescriptor::new("recipe_carts", 4),
    TableDescriptor::new("personal_carts", 5),
    TableDescriptor::new("preconfigured_carts", 8),
    // management
    TableDescriptor::new("admin_permissions", 12),
    TableDescriptor::new("delivery_zones", 9),
    TableDescriptor::new("delivery_tracking", 7),
    // utilities
    TableDescriptor::new("favorites", 4),
    TableDescriptor::new("user_history", 3),
    TableDescriptor::new("user_locations", 8),
];

pub const FUNCTIONS_COUNT: u32 = 16;
pub const TRIGGERS_COUNT: u32 = 6;

pub static COMPLEX_RELATIONSHIPS: &[&str] = &[
    "recipes -> videos (1:1)",
    "orders -> profiles (N:1)",
    "cart_items -> products (N:1)",
    "delivery_tracking -> orders (1:1)",
    "admin_permissions -> profiles (1:1)",
    "user_locations -> profiles (N:1)",
];

pub fn table_stats() -> &'static [TableDescriptor] {
    TABLE_STATS
}

pub fn find_table_stats(name: &str) -> Option<&'static TableDescriptor> {
    TABLE_STATS.iter().find(|table| table.name == name)
}
