pub mod contact;
mod layout;
pub mod pages;
mod router;
pub mod schema;

pub use layout::{Layout, resolve_public_dir};
pub use router::router;
