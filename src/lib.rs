//! Employee API - A small REST service for employee records
//!
//! Create, list, fetch, update and delete employees stored in a MongoDB
//! collection.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
