//! API Module
//!
//! HTTP handlers and routing for the employee REST API.
//!
//! # Endpoints
//! - `POST /employees` - Create an employee
//! - `GET /employees` - List employees, paged by `limit` and `page`
//! - `GET /employee/:id` - Fetch one employee
//! - `PUT /employee/:id` - Update an employee
//! - `DELETE /employee/:id` - Delete an employee
//! - `GET /health` - Health check endpoint

pub mod encoder;
pub mod handlers;
pub mod routes;

pub use encoder::{JsonEncoder, ResponseEncoder};
pub use handlers::*;
pub use routes::create_router;
