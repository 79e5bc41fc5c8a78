pub mod geo;
pub mod metrics;
mod router;
pub mod schema;

pub use router::router;
