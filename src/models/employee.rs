//! Employee Model
//!
//! The wire representation of an employee record and its identifier.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// == Employee Id ==
/// Opaque document identifier, rendered on the wire as 24 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(ObjectId);

impl EmployeeId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parses a 24 character hex string.
    pub fn parse(raw: &str) -> Option<Self> {
        ObjectId::parse_str(raw).ok().map(Self)
    }

    /// Returns the underlying store identifier.
    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    /// Returns the hex form used on the wire.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for EmployeeId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for EmployeeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid employee id: {}", s))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for EmployeeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// == Employee ==
/// An employee record as exchanged over HTTP.
///
/// Every field is optional; absent fields are left out of the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
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

impl Employee {
    /// Returns true when no settable field is present.
    pub fn has_no_fields(&self) -> bool {
        self.firstname.is_none()
            && self.lastname.is_none()
            && self.empid.is_none()
            && self.salary.is_none()
            && self.practice.is_none()
    }

    /// Overwrites this record's fields with the ones present in `changes`.
    ///
    /// The identifier is never touched.
    pub fn apply(&mut self, changes: &Employee) {
        if let Some(v) = &changes.firstname {
            self.firstname = Some(v.clone());
        }
        if let Some(v) = &changes.lastname {
            self.lastname = Some(v.clone());
        }
        if let Some(v) = changes.empid {
            self.empid = Some(v);
        }
        if let Some(v) = changes.salary {
            self.salary = Some(v);
        }
        if let Some(v) = &changes.practice {
            self.practice = Some(v.clone());
        }
    }
}
