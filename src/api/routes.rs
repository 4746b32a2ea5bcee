//! API Routes
//!
//! Configures the Axum router with all employee endpoints.

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, update_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /employees` - Create an employee
/// - `GET /employees?limit=&page=` - List a page of employees
/// - `GET /employee/:id` - Fetch one employee
/// - `PUT /employee/:id` - Update the supplied fields of an employee
/// - `DELETE /employee/:id` - Delete an employee
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: any origin, the methods and headers browsers send to this API
/// - Content-Type: every response is labelled `application/json`
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
            Method::HEAD,
        ])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ]);

    let json_content_type = SetResponseHeaderLayer::overriding(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Router::new()
        .route("/employees", get(list_handler).post(create_handler))
        .route(
            "/employee/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/health", get(health_handler))
        .layer(json_content_type)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
