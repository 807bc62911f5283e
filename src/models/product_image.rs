use diesel::prelude::*;

use crate::domain::product::ProductImage as DomainProductImage;
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `product_images` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub image_url: String,
    pub display_order: i32,
}

/// Insertable form of [`ProductImage`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct NewProductImage {
    pub product_id: i32,
    pub image_url: String,
    pub display_order: i32,
}

impl TryFrom<ProductImage> for DomainProductImage {
    type Error = TypeConstraintError;

    fn try_from(image: ProductImage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: image.id,
            product_id: image.product_id.try_into()?,
            image_url: image.image_url,
            display_order: image.display_order,
        })
    }
}
