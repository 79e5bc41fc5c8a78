pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;
pub mod test_helpers;
