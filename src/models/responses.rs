//! Response DTOs for the employee API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use super::Employee;

/// Confirmation text returned by DELETE /employee/:id
pub const DELETE_CONFIRMATION: &str = "Employee deleted successfully.";

/// Response body for the list operation (GET /employees)
///
/// `count` is the size of the returned page, not of the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCollection {
    pub employees: Vec<Employee>,
    pub count: usize,
}

impl EmployeeCollection {
    /// Wraps a page of employees with its count.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            count: employees.len(),
            employees,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
