use diesel::prelude::*;

use crate::domain::product::ProductFaq as DomainProductFaq;
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `product_faqs` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::product_faqs)]
pub struct ProductFaq {
    pub id: i32,
    pub product_id: i32,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
}

/// Insertable form of [`ProductFaq`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_faqs)]
pub struct NewProductFaq {
    pub product_id: i32,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
}

impl TryFrom<ProductFaq> for DomainProductFaq {
    type Error = TypeConstraintError;

    fn try_from(faq: ProductFaq) -> Result<Self, Self::Error> {
        Ok(Self {
            id: faq.id,
            product_id: faq.product_id.try_into()?,
            question: faq.question,
            answer: faq.answer,
            display_order: faq.display_order,
        })
    }
}
