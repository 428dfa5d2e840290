//! Order record model

use crate::core::store::MemoryStore;
use serde::{Deserialize, Serialize};

/// Order status an update is allowed to set.
///
/// `delivered` is a recognized state but never an accepted update target,
/// so a record only reaches it outside this API; once there it is
/// immutable and cannot be deleted (delete requires `pending`).
pub const UPDATABLE_STATUSES: [&str; 3] = ["pending", "preparing", "out-for-delivery"];

/// The only status from which an order may be deleted.
pub const STATUS_PENDING: &str = "pending";

/// Terminal state: a delivered order can no longer be changed or deleted.
pub const STATUS_DELIVERED: &str = "delivered";

/// A customer order.
///
/// `status` is stored exactly as supplied at creation — possibly absent,
/// since create applies no default and no validation to it. Updates are
/// where the status rules bite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub dishes: Vec<OrderDish>,
}

/// One dish line on an order: a snapshot of the dish fields plus the
/// ordered quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub quantity: u64,
}

/// Process-lifetime store backing the orders resource.
pub type OrderStore = MemoryStore<Order>;
