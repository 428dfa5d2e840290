//! Orders resource: customer orders referencing dishes
//!
//! Orders carry delivery info, a status, and a non-empty list of dish
//! lines. Status moves through a small state machine enforced on update,
//! and deletion is only permitted while an order is still `pending`.

pub mod handlers;
pub mod model;
pub mod validation;

pub use handlers::routes;
pub use model::{Order, OrderDish, OrderStore};
