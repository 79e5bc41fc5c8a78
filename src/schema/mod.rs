//! Static description of the external database: table statistics,
//! relationships, column layouts and stored procedures, plus the checker that
//! keeps them consistent with each other.

pub mod error;
pub mod functions;
pub mod geo;
pub mod registry;
pub mod relationship;
pub mod stats;
pub mod tables;

pub use error::{SchemaError, SchemaResult};
pub use functions::{FunctionCategory, FunctionSignature, find_function, functions};
pub use geo::{Coordinate, GeoError, calculate_distance, generate_google_maps_link};
pub use registry::{SchemaIssue, SchemaRegistry, SchemaReport, SchemaSummary};
pub use relationship::{Cardinality, Relationship};
pub use stats::{
    COMPLEX_RELATIONSHIPS, FUNCTIONS_COUNT, TABLE_STATS, TRIGGERS_COUNT, TableDescriptor,
    find_table_stats, table_stats,
};
pub use tables::{
    AGGREGATE_SCHEMA, ColumnDef, ColumnType, TableGroup, TableSchema, find_table,
    table_definitions,
};
