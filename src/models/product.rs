use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{ProductName, ProductPrice, TypeConstraintError};

/// Diesel model representing the `products` table.
///
/// The `moq` column is a historical name: it stores what the API exposes as
/// `shop_name`. The rename happens here and nowhere else.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub moq: Option<String>,
    pub fabric_type: Option<String>,
    pub size_range: Option<String>,
    pub price: f64,
    pub low_price: Option<f64>,
    pub recommended: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable/patchable form of [`Product`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub moq: Option<String>,
    pub fabric_type: Option<String>,
    pub size_range: Option<String>,
    pub price: f64,
    pub low_price: Option<f64>,
    pub recommended: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied on full product updates. Leaves `created_at` untouched.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct {
    pub name: String,
    pub category_id: i32,
    pub description: Option<Option<String>>,
    pub moq: Option<Option<String>>,
    pub fabric_type: Option<Option<String>>,
    pub size_range: Option<Option<String>>,
    pub price: f64,
    pub low_price: Option<Option<f64>>,
    pub recommended: bool,
    pub updated_at: NaiveDateTime,
}

impl From<DomainNewProduct> for UpdateProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            category_id: product.category_id.get(),
            description: Some(product.description),
            moq: Some(product.shop_name),
            fabric_type: Some(product.fabric_type),
            size_range: Some(product.size_range),
            price: product.price.get(),
            low_price: Some(product.low_price.map(ProductPrice::get)),
            recommended: product.recommended,
            updated_at: product.updated_at,
        }
    }
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            category_id: product.category_id.try_into()?,
            description: product.description,
            shop_name: product.moq,
            fabric_type: product.fabric_type,
            size_range: product.size_range,
            price: ProductPrice::new(product.price)?,
            low_price: product.low_price.map(ProductPrice::new).transpose()?,
            recommended: product.recommended,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            category_id: product.category_id.get(),
            description: product.description,
            moq: product.shop_name,
            fabric_type: product.fabric_type,
            size_range: product.size_range,
            price: product.price.get(),
            low_price: product.low_price.map(ProductPrice::get),
            recommended: product.recommended,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
