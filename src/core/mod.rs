//! Shared building blocks used by both resource modules

pub mod error;
pub mod id;
pub mod payload;
pub mod store;
