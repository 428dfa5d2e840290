//! Dish HTTP handlers

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde_json::Value;

use super::model::{Dish, DishStore};
use super::validation::validate_dish;
use crate::core::error::ApiError;
use crate::core::id::next_id;
use crate::core::payload::{Envelope, json_body};
use crate::server::method_not_allowed;

/// Build the dishes routes over an injected store.
pub fn routes(store: DishStore) -> Router {
    Router::new()
        .route(
            "/dishes",
            get(list).post(create).fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dishId}",
            get(read).put(update).fallback(method_not_allowed),
        )
        .with_state(store)
}

async fn list(State(store): State<DishStore>) -> Result<Json<Envelope<Vec<Dish>>>, ApiError> {
    Ok(Json(Envelope::new(store.list()?)))
}

async fn read(
    State(store): State<DishStore>,
    Path(dish_id): Path<String>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    let dish = store
        .get(&dish_id)?
        .ok_or_else(|| ApiError::not_found(format!("Dish not found: {dish_id}")))?;
    Ok(Json(Envelope::new(dish)))
}

async fn create(
    State(store): State<DishStore>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Dish>>), ApiError> {
    let body = json_body(body);
    let fields = validate_dish(&body)?;
    let dish = Dish {
        id: next_id(),
        name: fields.name,
        description: fields.description,
        price: fields.price,
        image_url: fields.image_url,
    };
    store.insert(dish.id.clone(), dish.clone())?;
    tracing::info!(id = %dish.id, name = %dish.name, "dish created");
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

async fn update(
    State(store): State<DishStore>,
    Path(dish_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    // Existence guard runs before field validation, so an unknown id is a
    // 404 even when the body is also invalid.
    let mut dish = store
        .get(&dish_id)?
        .ok_or_else(|| ApiError::not_found(format!("Dish not found: {dish_id}")))?;
    let body = json_body(body);
    let fields = validate_dish(&body)?;
    if let Some(body_id) = fields.id
        && body_id != dish_id
    {
        return Err(ApiError::validation(format!(
            "Dish id does not match route id. Dish: {body_id}, Route: {dish_id}"
        )));
    }

    dish.name = fields.name;
    dish.description = fields.description;
    dish.price = fields.price;
    dish.image_url = fields.image_url;
    store.update(&dish_id, dish.clone())?;
    tracing::info!(id = %dish_id, "dish updated");
    Ok(Json(Envelope::new(dish)))
}
