//! # Platter
//!
//! A small HTTP API backing a restaurant ordering application.
//!
//! Two resources are exposed over conventional JSON-over-HTTP:
//!
//! - **Dishes**: the menu. Listed, created, read, and updated — never deleted.
//! - **Orders**: customer orders referencing dishes, carrying delivery info
//!   and a status that moves through a small state machine. Orders can be
//!   deleted, but only while still `pending`.
//!
//! Each resource module pairs an injected in-memory [`MemoryStore`] with
//! stateless validators that run before any mutation, so a failed request
//! never leaves a partial write behind. Request bodies arrive wrapped as
//! `{"data": {...}}` and responses are wrapped the same way; failures are
//! reported as `{"message": "..."}` with the appropriate status code.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use platter::prelude::*;
//!
//! let state = AppState::new();
//! let app = build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! [`MemoryStore`]: crate::core::store::MemoryStore

pub mod config;
pub mod core;
pub mod dishes;
pub mod orders;
pub mod server;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::ServerConfig;
    pub use crate::core::{error::ApiError, id::next_id, payload::Envelope, store::MemoryStore};
    pub use crate::dishes::model::{Dish, DishStore};
    pub use crate::orders::model::{Order, OrderDish, OrderStore};
    pub use crate::server::{AppState, build_router};
}
