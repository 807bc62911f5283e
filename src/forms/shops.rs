use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::shop::NewShop;
use crate::domain::types::{ShopName, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
pub struct ShopForm {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopFormPayload {
    pub shop: NewShop,
}

#[derive(Debug, Error)]
pub enum ShopFormError {
    #[error("Shop form validation failed: {0}")]
    Validation(String),
    #[error("Shop form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ShopFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ShopFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ShopForm> for ShopFormPayload {
    type Error = ShopFormError;

    fn try_from(value: ShopForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            shop: NewShop {
                name: ShopName::new(value.name)?,
            },
        })
    }
}
