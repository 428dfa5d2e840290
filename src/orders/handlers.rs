//! Order HTTP handlers

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde_json::Value;

use super::model::{Order, OrderStore, STATUS_DELIVERED, STATUS_PENDING, UPDATABLE_STATUSES};
use super::validation::validate_order;
use crate::core::error::ApiError;
use crate::core::id::next_id;
use crate::core::payload::{Envelope, json_body};
use crate::server::method_not_allowed;

/// Build the orders routes over an injected store.
pub fn routes(store: OrderStore) -> Router {
    Router::new()
        .route(
            "/orders",
            get(list).post(create).fallback(method_not_allowed),
        )
        .route(
            "/orders/{orderId}",
            get(read)
                .put(update)
                .delete(destroy)
                .fallback(method_not_allowed),
        )
        .with_state(store)
}

async fn list(State(store): State<OrderStore>) -> Result<Json<Envelope<Vec<Order>>>, ApiError> {
    Ok(Json(Envelope::new(store.list()?)))
}

async fn read(
    State(store): State<OrderStore>,
    Path(order_id): Path<String>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let order = store
        .get(&order_id)?
        .ok_or_else(|| ApiError::not_found(format!("Order not found: {order_id}")))?;
    Ok(Json(Envelope::new(order)))
}

async fn create(
    State(store): State<OrderStore>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Order>>), ApiError> {
    let body = json_body(body);
    let fields = validate_order(&body)?;
    let order = Order {
        id: next_id(),
        deliver_to: fields.deliver_to,
        mobile_number: fields.mobile_number,
        // Stored exactly as supplied; create neither defaults nor
        // validates the status.
        status: fields.status,
        dishes: fields.dishes,
    };
    store.insert(order.id.clone(), order.clone())?;
    tracing::info!(id = %order.id, lines = order.dishes.len(), "order created");
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

async fn update(
    State(store): State<OrderStore>,
    Path(order_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    // Existence guard runs before field validation, so an unknown id is a
    // 404 even when the body is also invalid.
    let mut order = store
        .get(&order_id)?
        .ok_or_else(|| ApiError::not_found(format!("Order not found: {order_id}")))?;
    let body = json_body(body);
    let fields = validate_order(&body)?;
    if let Some(body_id) = fields.id
        && body_id != order_id
    {
        return Err(ApiError::validation(format!(
            "Order id does not match route id. Order: {body_id}, Route: {order_id}"
        )));
    }

    // A record that has reached `delivered` is immutable.
    if order.status.as_deref() == Some(STATUS_DELIVERED) {
        return Err(ApiError::validation("A delivered order cannot be changed"));
    }

    // `delivered` is never an accepted target either, so this path can
    // only move an order between the three mutable states.
    let status = fields
        .status
        .filter(|status| UPDATABLE_STATUSES.contains(&status.as_str()))
        .ok_or_else(|| {
            ApiError::validation(
                "Order must have a status of pending, preparing, out-for-delivery, delivered",
            )
        })?;

    order.deliver_to = fields.deliver_to;
    order.mobile_number = fields.mobile_number;
    order.status = Some(status);
    order.dishes = fields.dishes;
    store.update(&order_id, order.clone())?;
    tracing::info!(id = %order_id, status = order.status.as_deref(), "order updated");
    Ok(Json(Envelope::new(order)))
}

async fn destroy(
    State(store): State<OrderStore>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let order = store
        .get(&order_id)?
        .ok_or_else(|| ApiError::not_found(format!("Order not found: {order_id}")))?;
    if order.status.as_deref() != Some(STATUS_PENDING) {
        return Err(ApiError::validation(
            "An order cannot be deleted unless it is pending",
        ));
    }
    store.remove(&order_id)?;
    tracing::info!(id = %order_id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
