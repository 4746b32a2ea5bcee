//! Request DTOs for the employee API
//!
//! Defines the structure of incoming query parameters.

/// Query parameters for the list operation (GET /employees)
///
/// Both values arrive as raw strings so that a malformed number never
/// rejects the request; it simply reads as 0.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Page size, 0 means no limit
    pub limit: Option<String>,
    /// One-based page number
    pub page: Option<String>,
}

impl ListQuery {
    /// Builds the query from decoded `key=value` pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "limit" => &mut query.limit,
                "page" => &mut query.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Parsed page size, 0 when missing or not an integer.
    pub fn limit(&self) -> i64 {
        parse_or_zero(self.limit.as_deref())
    }

    /// Parsed page number, 0 when missing or not an integer.
    pub fn page(&self) -> i64 {
        parse_or_zero(self.page.as_deref())
    }

    /// Number of documents to skip: `limit * (page - 1)`.
    ///
    /// `page=0` (or a missing page) with a positive limit yields a negative skip.
    pub fn skip(&self) -> i64 {
        self.limit().saturating_mul(self.page().saturating_sub(1))
    }
}

fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}
