//! Stateless field guards for order payloads
//!
//! Top-level checks run in order — deliverTo, mobileNumber, dishes — then
//! each dish line is checked in sequence. Per line, quantity is checked
//! first and on its own: any quantity that is not a positive integer
//! (missing, wrong type, zero, negative, fractional) fails with a message
//! naming the line index. Only when the quantity is sound are the
//! remaining line fields checked, with a single generic message.

use crate::core::error::ApiError;
use crate::core::payload::{body_id, non_empty_text, request_data};
use crate::orders::model::OrderDish;
use serde_json::Value;

/// Fields extracted from a validated `{"data": {...}}` order payload.
///
/// `status` is carried through untouched; create stores it verbatim and
/// update applies the state-machine rules on top.
#[derive(Debug)]
pub struct OrderFields {
    pub id: Option<String>,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: Option<String>,
    pub dishes: Vec<OrderDish>,
}

/// Validate an order request body, shared by create and update.
pub fn validate_order(body: &Value) -> Result<OrderFields, ApiError> {
    let data = request_data(body);

    let deliver_to = non_empty_text(data.get("deliverTo"))
        .ok_or_else(|| ApiError::validation("Order must include a deliverTo field"))?;
    let mobile_number = non_empty_text(data.get("mobileNumber"))
        .ok_or_else(|| ApiError::validation("Order must include a mobileNumber field"))?;
    let raw_dishes = data
        .get("dishes")
        .and_then(Value::as_array)
        .filter(|dishes| !dishes.is_empty())
        .ok_or_else(|| ApiError::validation("Order must include at least one dish"))?;

    let mut dishes = Vec::with_capacity(raw_dishes.len());
    for (index, entry) in raw_dishes.iter().enumerate() {
        dishes.push(validate_dish_line(index, entry)?);
    }

    Ok(OrderFields {
        id: body_id(data),
        deliver_to,
        mobile_number,
        status: data.get("status").and_then(Value::as_str).map(str::to_owned),
        dishes,
    })
}

fn validate_dish_line(index: usize, entry: &Value) -> Result<OrderDish, ApiError> {
    let quantity = positive_integer(entry.get("quantity")).ok_or_else(|| {
        ApiError::validation(format!(
            "Dish {index} must have a quantity that is an integer greater than 0"
        ))
    })?;

    let name = non_empty_text(entry.get("name"));
    let description = non_empty_text(entry.get("description"));
    let price = entry
        .get("price")
        .and_then(Value::as_f64)
        .filter(|price| *price != 0.0);
    let (Some(name), Some(description), Some(price)) = (name, description, price) else {
        return Err(ApiError::validation(
            "Dish must include name, description, price, and quantity",
        ));
    };

    Ok(OrderDish {
        id: entry.get("id").and_then(Value::as_str).map(str::to_owned),
        name,
        description,
        price,
        image_url: entry
            .get("image_url")
            .and_then(Value::as_str)
            .map(str::to_owned),
        quantity,
    })
}

// Integer-tagged JSON numbers are taken exactly; integer-valued floats
// (`2.0`) are accepted only while they convert without loss.
fn positive_integer(value: Option<&Value>) -> Option<u64> {
    let value = value?;
    if let Some(n) = value.as_u64() {
        return (n >= 1).then_some(n);
    }
    let n = value.as_f64()?;
    if n >= 1.0 && n.fract() == 0.0 && n < u64::MAX as f64 {
        Some(n as u64)
    } else {
        None
    }
}
