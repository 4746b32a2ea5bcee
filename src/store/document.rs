//! Employee Document
//!
//! BSON shape of an employee as stored in MongoDB.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Stored form of [`Employee`]. The identifier is a native ObjectId.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice: Option<String>,
}

impl EmployeeDocument {
    /// Builds the `$set` payload for an update: every present field but the id.
    pub fn changes(employee: &Employee) -> Self {
        Self {
            id: None,
            ..Self::from(employee.clone())
        }
    }
}

impl From<Employee> for EmployeeDocument {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id.map(|id| id.object_id()),
            firstname: e.firstname,
            lastname: e.lastname,
            empid: e.empid,
            salary: e.salary,
            practice: e.practice,
        }
    }
}

impl From<EmployeeDocument> for Employee {
    fn from(d: EmployeeDocument) -> Self {
        Self {
            id: d.id.map(Into::into),
            firstname: d.firstname,
            lastname: d.lastname,
            empid: d.empid,
            salary: d.salary,
            practice: d.practice,
        }
    }
}
