//! Core library exports for the wholesale storefront service.
//!
//! This crate exposes the domain model, forms, repositories, routes and
//! service layers used by the storefront web application.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod media;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Session key under which the logged-in administrator is stored.
pub const ADMIN_SESSION_KEY: &str = "admin_user";

/// Name of the signed, httpOnly session cookie.
pub const ADMIN_SESSION_COOKIE: &str = "admin_session";
