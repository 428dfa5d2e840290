//! Dishes resource: the menu
//!
//! Dishes are listed, created, read, and updated — never deleted. Every
//! mutation runs the four-field validation chain first, so a rejected
//! request leaves the store untouched.

pub mod handlers;
pub mod model;
pub mod validation;

pub use handlers::routes;
pub use model::{Dish, DishStore};
