//! Request and Response models for the employee API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod employee;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use employee::{Employee, EmployeeId};
pub use requests::ListQuery;
pub use responses::{EmployeeCollection, ErrorResponse, HealthResponse, DELETE_CONFIRMATION};
