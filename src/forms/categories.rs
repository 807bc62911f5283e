use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryName, Slug, TypeConstraintError};

fn build_category(name: String, slug: Option<String>) -> Result<NewCategory, TypeConstraintError> {
    let name = CategoryName::new(name)?;
    // Without an explicit slug the name is slugged; the derivation is
    // idempotent, so re-saving an unchanged category is a no-op.
    let slug = match slug.filter(|slug| !slug.trim().is_empty()) {
        Some(slug) => Slug::new(slug)?,
        None => Slug::from_name(name.as_str())?,
    };
    Ok(NewCategory { name, slug })
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryFormPayload {
    pub category: NewCategory,
}

#[derive(Debug, Error)]
pub enum AddCategoryFormError {
    #[error("Add category form validation failed: {0}")]
    Validation(String),
    #[error("Add category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddCategoryForm> for AddCategoryFormPayload {
    type Error = AddCategoryFormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category: build_category(value.name, value.slug)?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryFormPayload {
    pub category: NewCategory,
}

#[derive(Debug, Error)]
pub enum UpdateCategoryFormError {
    #[error("Update category form validation failed: {0}")]
    Validation(String),
    #[error("Update category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateCategoryForm> for UpdateCategoryFormPayload {
    type Error = UpdateCategoryFormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category: build_category(value.name, value.slug)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_slug_from_name_when_absent() {
        let form = AddCategoryForm {
            name: "Cotton & Linen".to_string(),
            slug: None,
        };

        let payload: AddCategoryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.category.slug.as_str(), "cotton-linen");
    }

    #[test]
    fn keeps_explicit_slug() {
        let form = UpdateCategoryForm {
            name: "Cotton & Linen".to_string(),
            slug: Some("fabrics".to_string()),
        };

        let payload: UpdateCategoryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.category.slug.as_str(), "fabrics");
    }

    #[test]
    fn blank_slug_counts_as_absent() {
        let form = UpdateCategoryForm {
            name: "Knitwear".to_string(),
            slug: Some("   ".to_string()),
        };

        let payload: UpdateCategoryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.category.slug.as_str(), "knitwear");
    }

    #[test]
    fn rederiving_from_existing_slug_is_a_no_op() {
        let first = build_category("Denim (14oz)".to_string(), None).unwrap();
        let second = build_category(first.slug.as_str().to_string(), None).unwrap();
        assert_eq!(first.slug, second.slug);
    }
}
