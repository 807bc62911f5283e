use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::product::{Product, ProductFaq, ProductImage};
use crate::domain::types::ProductPrice;

/// FAQ entry as exposed to clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductFaqDto {
    pub id: i32,
    pub product_id: i32,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
}

impl From<ProductFaq> for ProductFaqDto {
    fn from(faq: ProductFaq) -> Self {
        Self {
            id: faq.id,
            product_id: faq.product_id.get(),
            question: faq.question,
            answer: faq.answer,
            display_order: faq.display_order,
        }
    }
}

/// Product with its related data, flattened for clients.
///
/// Camel-case spellings (`fabricType`, `sizeRange`, `lowPrice`) and the
/// `shop_name` alias for the stored `moq` column are fixed here; the raw
/// child-row join structures never reach the wire.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub shop_name: Option<String>,
    #[serde(rename = "fabricType")]
    pub fabric_type: Option<String>,
    #[serde(rename = "sizeRange")]
    pub size_range: Option<String>,
    pub price: f64,
    #[serde(rename = "lowPrice")]
    pub low_price: Option<f64>,
    pub recommended: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Image URLs ordered by `display_order`; always present, possibly empty.
    pub images: Vec<String>,
    /// FAQs ordered by `display_order`; always present, possibly empty.
    pub faqs: Vec<ProductFaqDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl ProductDto {
    /// Collapses a product row and its child rows into the wire shape.
    pub fn assemble(
        product: Product,
        mut images: Vec<ProductImage>,
        mut faqs: Vec<ProductFaq>,
        category_name: Option<String>,
    ) -> Self {
        images.sort_by_key(|image| image.display_order);
        faqs.sort_by_key(|faq| faq.display_order);

        Self {
            id: product.id.get(),
            name: product.name.into_inner(),
            category_id: product.category_id.get(),
            description: product.description,
            shop_name: product.shop_name,
            fabric_type: product.fabric_type,
            size_range: product.size_range,
            price: product.price.get(),
            low_price: product.low_price.map(ProductPrice::get),
            recommended: product.recommended,
            created_at: product.created_at,
            updated_at: product.updated_at,
            images: images.into_iter().map(|image| image.image_url).collect(),
            faqs: faqs.into_iter().map(Into::into).collect(),
            category_name,
        }
    }
}

/// Paginated product listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductListDto {
    pub products: Vec<ProductDto>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    pub page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}
