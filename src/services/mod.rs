//! Business logic, kept free of HTTP concerns.
//!
//! Functions are generic over the repository traits they need so unit tests
//! can substitute an in-memory repository. Every privileged operation
//! re-validates the caller against the user store before touching data.

pub mod auth;
pub mod categories;
pub mod errors;
pub mod products;
pub mod shops;

pub use errors::{ServiceError, ServiceResult};
