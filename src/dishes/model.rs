//! Dish record model

use crate::core::store::MemoryStore;
use serde::{Deserialize, Serialize};

/// A menu item.
///
/// `id` is server-generated at creation and never reassigned; updates
/// overwrite the other four fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Positive number; the API attaches no currency semantics.
    pub price: f64,
    pub image_url: String,
}

/// Process-lifetime store backing the dishes resource.
pub type DishStore = MemoryStore<Dish>;
