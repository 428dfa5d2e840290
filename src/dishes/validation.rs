//! Stateless field guards for dish payloads
//!
//! Checks run in a fixed order and short-circuit at the first failure:
//! name, description, image_url, then price. Each failure names the field
//! that was missing or invalid.

use crate::core::error::ApiError;
use crate::core::payload::{body_id, non_empty_text, request_data};
use serde_json::Value;

/// Fields extracted from a validated `{"data": {...}}` dish payload.
///
/// `id` is whatever the client sent alongside the fields; the update
/// handler checks it against the route id and create ignores it.
#[derive(Debug)]
pub struct DishFields {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// Validate a dish request body, shared by create and update.
pub fn validate_dish(body: &Value) -> Result<DishFields, ApiError> {
    let data = request_data(body);

    let name = non_empty_text(data.get("name"))
        .ok_or_else(|| ApiError::validation("Dish must include a name."))?;
    let description = non_empty_text(data.get("description"))
        .ok_or_else(|| ApiError::validation("Dish must include a description."))?;
    let image_url = non_empty_text(data.get("image_url"))
        .ok_or_else(|| ApiError::validation("Dish must include an image_url."))?;
    let price = data
        .get("price")
        .and_then(Value::as_f64)
        .filter(|price| *price > 0.0)
        .ok_or_else(|| {
            ApiError::validation("Dish must have a price that is a positive number.")
        })?;

    Ok(DishFields {
        id: body_id(data),
        name,
        description,
        price,
        image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({"data": {
            "name": "Taco",
            "description": "spicy",
            "price": 5,
            "image_url": "http://x/y.png"
        }})
    }

    #[test]
    fn accepts_a_complete_payload() {
        let fields = validate_dish(&payload()).unwrap();
        assert_eq!(fields.name, "Taco");
        assert_eq!(fields.price, 5.0);
        assert_eq!(fields.id, None);
    }

    #[test]
    fn checks_fields_in_order() {
        // Everything is wrong; the name message fires first.
        let err = validate_dish(&json!({"data": {"price": -1}})).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a name.");
    }

    #[test]
    fn rejects_blank_description() {
        let mut body = payload();
        body["data"]["description"] = json!("");
        let err = validate_dish(&body).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a description.");
    }

    #[test]
    fn rejects_missing_image_url() {
        let mut body = payload();
        body["data"].as_object_mut().unwrap().remove("image_url");
        let err = validate_dish(&body).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include an image_url.");
    }

    #[test]
    fn rejects_non_positive_and_non_numeric_prices() {
        for bad in [json!(0), json!(-5), json!("5"), json!(null)] {
            let mut body = payload();
            body["data"]["price"] = bad;
            let err = validate_dish(&body).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Dish must have a price that is a positive number."
            );
        }
    }

    #[test]
    fn missing_data_member_fails_on_the_first_field() {
        let err = validate_dish(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a name.");
    }
}
