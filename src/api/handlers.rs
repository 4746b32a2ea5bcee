//! API Handlers
//!
//! HTTP request handlers for each employee endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use super::encoder::{JsonEncoder, ResponseEncoder};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    Employee, EmployeeCollection, EmployeeId, HealthResponse, ListQuery, DELETE_CONFIRMATION,
};
use crate::store::{self, EmployeeStore, MongoEmployeeStore};

/// Application state shared across all handlers.
///
/// Holds the one long-lived store handle and the response encoder.
#[derive(Clone)]
pub struct AppState {
    /// Employee collection accessor
    pub store: Arc<dyn EmployeeStore>,
    /// Encoder for JSON response bodies
    pub encoder: Arc<dyn ResponseEncoder>,
}

impl AppState {
    /// Creates a new AppState over the given store, encoding with serde_json.
    pub fn new(store: impl EmployeeStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            encoder: Arc::new(JsonEncoder),
        }
    }

    /// Replaces the response encoder.
    pub fn with_encoder(mut self, encoder: impl ResponseEncoder + 'static) -> Self {
        self.encoder = Arc::new(encoder);
        self
    }

    /// Connects to MongoDB using the configured URI, database and collection.
    pub async fn from_config(config: &Config) -> store::Result<Self> {
        let store = MongoEmployeeStore::connect(
            &config.mongodb_uri,
            &config.database_name,
            &config.collection_name,
        )
        .await?;
        Ok(Self::new(store))
    }

    /// Encodes `body` and wraps it in a JSON response with `status`.
    fn respond<T: Serialize>(&self, status: StatusCode, body: &T) -> Result<Response> {
        let value = serde_json::to_value(body).map_err(ApiError::Serialization)?;
        let bytes = self
            .encoder
            .encode(&value)
            .map_err(ApiError::Serialization)?;

        Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
    }
}

/// The `:id` path segment, or the reason axum could not decode it.
pub type IdPath = std::result::Result<Path<String>, PathRejection>;

fn id_segment(path: IdPath) -> Option<String> {
    match path {
        Ok(Path(raw)) => Some(raw),
        Err(rejection) => {
            debug!(%rejection, "Undecodable id segment");
            None
        }
    }
}

fn parse_id(path: IdPath) -> Result<EmployeeId> {
    let raw = id_segment(path)
        .ok_or_else(|| ApiError::InvalidId("undecodable path segment".to_string()))?;
    EmployeeId::parse(&raw).ok_or(ApiError::InvalidId(raw))
}

/// Handler for POST /employees
///
/// Inserts the decoded employee and returns it with its generated id (201).
pub async fn create_handler(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let mut employee: Employee = serde_json::from_slice(&body).map_err(ApiError::Decode)?;

    let id = state.store.insert(&employee).await?;
    employee.id = Some(id);
    info!(%id, "Employee created");

    state.respond(StatusCode::CREATED, &employee)
}

/// Handler for GET /employees?limit=&page=
///
/// Returns one page of employees and the page's size. The query is read
/// leniently: repeated keys keep their first value, anything unparsable is 0.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let query = ListQuery::from_pairs(pairs);
    let (limit, skip) = (query.limit(), query.skip());
    debug!(limit, skip, "Listing employees");

    // page=0 gives a negative skip, which no store accepts; it lists nothing.
    let employees = if skip < 0 {
        Vec::new()
    } else {
        state.store.find_page(limit, skip).await?
    };
    state.respond(StatusCode::OK, &EmployeeCollection::new(employees))
}

/// Handler for GET /employee/:id
///
/// A malformed or undecodable id is reported as 404, same as a missing one.
pub async fn get_handler(State(state): State<AppState>, path: IdPath) -> Result<Response> {
    let not_found = || ApiError::NotFound("not found".to_string());

    let id = id_segment(path)
        .as_deref()
        .and_then(EmployeeId::parse)
        .ok_or_else(not_found)?;
    let employee = state.store.find_by_id(&id).await?.ok_or_else(not_found)?;

    state.respond(StatusCode::OK, &employee)
}

/// Handler for PUT /employee/:id
///
/// Sets the fields present in the body and echoes the body back. An unknown
/// id, or a body `_id` naming another record, is a store error (500).
pub async fn update_handler(
    State(state): State<AppState>,
    path: IdPath,
    body: Bytes,
) -> Result<Response> {
    let id = parse_id(path)?;
    let changes: Employee = serde_json::from_slice(&body).map_err(ApiError::Decode)?;

    state.store.update(&id, &changes).await?;
    info!(%id, "Employee updated");

    state.respond(StatusCode::OK, &changes)
}

/// Handler for DELETE /employee/:id
///
/// Replies with a plain confirmation message.
pub async fn delete_handler(State(state): State<AppState>, path: IdPath) -> Result<&'static str> {
    let id = parse_id(path)?;

    state.store.remove(&id).await?;
    info!(%id, "Employee deleted");

    Ok(DELETE_CONFIRMATION)
}

/// Handler for GET /health
///
/// Healthy as long as the store answers a ping.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    state
        .store
        .ping()
        .await
        .map_err(|e| ApiError::Unavailable(e.to_string()))?;

    Ok(Json(HealthResponse::healthy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryEmployeeStore;

    struct FailingEncoder;

    impl ResponseEncoder for FailingEncoder {
        fn encode(&self, _value: &serde_json::Value) -> serde_json::Result<Vec<u8>> {
            Err(<serde_json::Error as serde::ser::Error>::custom("failed"))
        }
    }

    fn payload() -> Bytes {
        Bytes::from_static(
            br#"{"firstname":"aditi","lastname":"patil","empid":1200,"salary":20000,"practice":"IBM"}"#,
        )
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = AppState::new(InMemoryEmployeeStore::new());

        let response = create_handler(State(state.clone()), payload()).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let id = created["_id"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 24);

        let response = get_handler(State(state), Ok(Path(id.clone()))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_invalid_json() {
        let state = AppState::new(InMemoryEmployeeStore::new());

        let result = create_handler(State(state), Bytes::from_static(b"{\"empid\":")).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_not_found() {
        let state = AppState::new(InMemoryEmployeeStore::new());

        let result = get_handler(State(state), Ok(Path("xyz".to_string()))).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_handler_echoes_payload() {
        let store = InMemoryEmployeeStore::new();
        let id = store.insert(&Employee::default()).await.unwrap();
        let state = AppState::new(store);

        let body = Bytes::from_static(br#"{"firstname":"updated_firstname"}"#);
        let response = update_handler(State(state), Ok(Path(id.to_hex())), body)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"firstname": "updated_firstname"}));
    }

    #[tokio::test]
    async fn test_update_missing_is_store_error() {
        let state = AppState::new(InMemoryEmployeeStore::new());

        let result = update_handler(
            State(state),
            Ok(Path("000000000000000000000000".to_string())),
            payload(),
        )
        .await;
        match result {
            Err(err) => assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR),
            Ok(_) => panic!("update of a missing id should fail"),
        }
    }

    #[tokio::test]
    async fn test_update_with_other_body_id_fails() {
        let store = InMemoryEmployeeStore::new();
        let id = store.insert(&Employee::default()).await.unwrap();
        let state = AppState::new(store);

        let body = Bytes::from_static(br#"{"_id":"5f1d7f3e9b1e8a3c4d2b1a00","firstname":"b"}"#);
        let result = update_handler(State(state), Ok(Path(id.to_hex())), body).await;
        assert!(matches!(result, Err(ApiError::Store(_))));
    }

    #[tokio::test]
    async fn test_list_negative_skip_is_empty_page() {
        let store = InMemoryEmployeeStore::new();
        store.insert(&Employee::default()).await.unwrap();
        let state = AppState::new(store);

        let pairs = vec![("limit".to_string(), "5".to_string())];
        let response = list_handler(State(state), Query(pairs)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"employees": [], "count": 0}));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let store = InMemoryEmployeeStore::new();
        let id = store.insert(&Employee::default()).await.unwrap();
        let state = AppState::new(store);

        let message = delete_handler(State(state.clone()), Ok(Path(id.to_hex())))
            .await
            .unwrap();
        assert_eq!(message, DELETE_CONFIRMATION);

        let result = delete_handler(State(state), Ok(Path(id.to_hex()))).await;
        assert!(matches!(result, Err(ApiError::Store(_))));
    }

    #[tokio::test]
    async fn test_delete_malformed_id() {
        let state = AppState::new(InMemoryEmployeeStore::new());

        let result = delete_handler(State(state), Ok(Path("nope".to_string()))).await;
        assert!(matches!(result, Err(ApiError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_encoder_failure_is_serialization_error() {
        let state = AppState::new(InMemoryEmployeeStore::new()).with_encoder(FailingEncoder);

        let result = list_handler(State(state), Query(Vec::new())).await;
        assert!(matches!(result, Err(ApiError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = AppState::new(InMemoryEmployeeStore::new());

        let response = health_handler(State(state)).await.unwrap();
        assert_eq!(response.status, "healthy");
    }
}
