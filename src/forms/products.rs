use chrono::Utc;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, NewProductFaq};
use crate::domain::types::{CategoryId, ProductName, ProductPrice, TypeConstraintError};

/// Accepts a JSON number or a numeric string, as legacy clients send both.
fn de_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(value) => value
            .trim()
            .parse::<f64>()
            .map_err(serde::de::Error::custom),
    }
}

/// Like [`de_f64_lenient`] but empty strings and `null` map to `None`,
/// never to zero.
fn de_opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(value)) => Ok(Some(value)),
        Some(NumberOrString::String(value)) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProductFaqForm {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
}

/// Wire form for creating or fully updating a product.
///
/// Field names follow the documented API; snake_case and legacy spellings
/// are accepted as aliases so the mapping lives here and nowhere else.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "moq")]
    pub shop_name: Option<String>,
    #[serde(default, rename = "fabricType", alias = "fabric_type")]
    pub fabric_type: Option<String>,
    #[serde(default, rename = "sizeRange", alias = "size_range")]
    pub size_range: Option<String>,
    #[serde(deserialize_with = "de_f64_lenient")]
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(
        default,
        rename = "lowPrice",
        alias = "low_price",
        deserialize_with = "de_opt_f64_lenient"
    )]
    pub low_price: Option<f64>,
    #[serde(default)]
    pub recommended: bool,
    /// `Some` (even empty) replaces the product's images wholesale;
    /// `None` leaves them untouched.
    #[serde(default)]
    pub images: Option<Vec<String>>,
    /// Same replacement contract as `images`.
    #[serde(default)]
    pub faqs: Option<Vec<ProductFaqForm>>,
}

#[derive(Debug, Clone)]
pub struct ProductFormPayload {
    pub product: NewProduct,
    pub images: Option<Vec<String>>,
    pub faqs: Option<Vec<NewProductFaq>>,
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("Product form validation failed: {0}")]
    Validation(String),
    #[error("Product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ProductForm> for ProductFormPayload {
    type Error = ProductFormError;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        value.validate()?;
        if let Some(faqs) = &value.faqs {
            for faq in faqs {
                faq.validate()?;
            }
        }

        let now = Utc::now().naive_utc();
        let product = NewProduct {
            name: ProductName::new(value.name)?,
            category_id: CategoryId::new(value.category_id)?,
            description: value.description,
            shop_name: value.shop_name,
            fabric_type: value.fabric_type,
            size_range: value.size_range,
            price: ProductPrice::new(value.price)?,
            low_price: value.low_price.map(ProductPrice::new).transpose()?,
            recommended: value.recommended,
            created_at: now,
            updated_at: now,
        };

        Ok(Self {
            product,
            images: value.images,
            faqs: value.faqs.map(|faqs| {
                faqs.into_iter()
                    .map(|faq| NewProductFaq {
                        question: faq.question,
                        answer: faq.answer,
                    })
                    .collect()
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ProductForm {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn coerces_numeric_strings() {
        let form = parse(
            r#"{"name":"Cotton Roll","category_id":1,"price":"500","lowPrice":"450.5"}"#,
        );

        let payload: ProductFormPayload = form.try_into().unwrap();
        assert_eq!(payload.product.price, 500.0);
        assert_eq!(payload.product.low_price.unwrap(), 450.5);
    }

    #[test]
    fn empty_low_price_maps_to_none_not_zero() {
        let form = parse(r#"{"name":"Cotton Roll","category_id":1,"price":500,"lowPrice":""}"#);

        let payload: ProductFormPayload = form.try_into().unwrap();
        assert!(payload.product.low_price.is_none());
    }

    #[test]
    fn recommended_defaults_to_false() {
        let form = parse(r#"{"name":"Cotton Roll","category_id":1,"price":500}"#);

        let payload: ProductFormPayload = form.try_into().unwrap();
        assert!(!payload.product.recommended);
    }

    #[test]
    fn missing_price_is_rejected_at_deserialization() {
        let form: Result<ProductForm, _> =
            serde_json::from_str(r#"{"name":"Cotton Roll","category_id":1}"#);
        assert!(form.is_err());
    }

    #[test]
    fn absent_images_stay_absent_while_empty_array_survives() {
        let absent = parse(r#"{"name":"A","category_id":1,"price":1}"#);
        let empty = parse(r#"{"name":"A","category_id":1,"price":1,"images":[]}"#);

        let absent: ProductFormPayload = absent.try_into().unwrap();
        let empty: ProductFormPayload = empty.try_into().unwrap();
        assert!(absent.images.is_none());
        assert_eq!(empty.images, Some(vec![]));
    }

    #[test]
    fn accepts_legacy_field_spellings() {
        let form = parse(
            r#"{"name":"A","category_id":1,"price":1,"moq":"Acme Mills","fabric_type":"denim"}"#,
        );

        assert_eq!(form.shop_name.as_deref(), Some("Acme Mills"));
        assert_eq!(form.fabric_type.as_deref(), Some("denim"));
    }

    #[test]
    fn rejects_non_numeric_price_string() {
        let form: Result<ProductForm, _> =
            serde_json::from_str(r#"{"name":"A","category_id":1,"price":"a lot"}"#);
        assert!(form.is_err());
    }
}
