use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, ProductId, ProductName, ProductPrice};

/// Canonical product row.
///
/// `shop_name` is persisted in the legacy `moq` column; the mapping is applied
/// once at the model boundary so the rest of the code only sees the canonical
/// name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub category_id: CategoryId,
    pub description: Option<String>,
    pub shop_name: Option<String>,
    pub fabric_type: Option<String>,
    pub size_range: Option<String>,
    pub price: ProductPrice,
    pub low_price: Option<ProductPrice>,
    pub recommended: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create or fully update a [`Product`] row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: ProductName,
    pub category_id: CategoryId,
    pub description: Option<String>,
    pub shop_name: Option<String>,
    pub fabric_type: Option<String>,
    pub size_range: Option<String>,
    pub price: ProductPrice,
    pub low_price: Option<ProductPrice>,
    pub recommended: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Ordered image attached to a product.
///
/// `display_order` is the ascending sort key; clients see images as a plain
/// array whose position encodes the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: ProductId,
    pub image_url: String,
    pub display_order: i32,
}

/// Ordered FAQ entry attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductFaq {
    pub id: i32,
    pub product_id: ProductId,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
}

/// FAQ content supplied by clients; `display_order` is derived from the
/// array position on write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProductFaq {
    pub question: String,
    pub answer: String,
}
