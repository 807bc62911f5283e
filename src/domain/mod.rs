//! Domain entities and value objects shared across layers.

pub mod auth;
pub mod category;
pub mod product;
pub mod shop;
pub mod types;
pub mod user;
