//! Router assembly
//!
//! Builds the application router from the two resource routers plus the
//! shared fallbacks: a method-not-allowed handler attached per route and a
//! router-wide handler for unmatched paths.

use axum::{
    Json, Router,
    http::{Method, Uri},
    routing::get,
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::core::error::ApiError;
use crate::dishes::model::DishStore;
use crate::orders::model::OrderStore;
use crate::{dishes, orders};

/// The per-process application state: one store per resource.
///
/// Cloning is cheap and shares the underlying records, so the state can be
/// handed to the router while the caller keeps a handle for inspection.
#[derive(Clone, Default)]
pub struct AppState {
    pub dishes: DishStore,
    pub orders: OrderStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(dishes::routes(state.dishes))
        .merge(orders::routes(state.orders))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "platter"
    }))
}

/// Fallback for matched routes hit with an unsupported verb.
pub(crate) async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Fallback for paths no route matched.
async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
