mod context;
pub mod metrics_service;

pub use context::ServiceContext;
pub use metrics_service::{CounterSnapshot, MetricsService};
