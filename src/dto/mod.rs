//! Wire-facing response shapes.
//!
//! The product DTO is where stored rows are reconciled with the documented
//! API field names and where child rows collapse into ordered arrays.

pub mod auth;
pub mod categories;
pub mod products;
pub mod shops;
