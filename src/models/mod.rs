//! Diesel row models and conversions to/from domain entities.

pub mod category;
pub mod config;
pub mod product;
pub mod product_faq;
pub mod product_image;
pub mod shop;
pub mod user;
