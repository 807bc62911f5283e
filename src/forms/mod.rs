//! Request payload forms.
//!
//! Each wire-facing `*Form` is deserialized leniently (legacy aliases,
//! numeric strings) and validated, then converted with `TryFrom` into a
//! strongly-typed `*Payload` consumed by the service layer.

pub mod auth;
pub mod categories;
pub mod products;
pub mod shops;
pub mod upload;
