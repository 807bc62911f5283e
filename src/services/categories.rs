use crate::domain::auth::AdminUser;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{AddCategoryFormPayload, UpdateCategoryFormPayload};
use crate::repository::{CategoryReader, CategoryWriter, UserReader};
use crate::services::auth::authenticate_admin;

use super::{ServiceError, ServiceResult};

/// Lists all categories for the public catalog.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(Into::into).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}

/// Fetches one category by id.
pub fn get_category<R>(category_id: i32, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let category_id = match CategoryId::new(category_id) {
        Ok(category_id) => category_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}

/// Creates a category. Admin only.
pub fn create_category<R>(
    claim: &AdminUser,
    payload: AddCategoryFormPayload,
    repo: &R,
) -> ServiceResult<CategoryDto>
where
    R: UserReader + CategoryWriter,
{
    authenticate_admin(claim, repo)?;

    match repo.create_category(&payload.category) {
        Ok(category) => Ok(category.into()),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}

/// Updates a category. Admin only.
pub fn update_category<R>(
    category_id: i32,
    claim: &AdminUser,
    payload: UpdateCategoryFormPayload,
    repo: &R,
) -> ServiceResult<CategoryDto>
where
    R: UserReader + CategoryWriter,
{
    authenticate_admin(claim, repo)?;

    let category_id = match CategoryId::new(category_id) {
        Ok(category_id) => category_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.update_category(category_id, &payload.category) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}

/// Deletes a category. Admin only. Products keep their dangling
/// `category_id`; removal of a category never cascades into the catalog.
pub fn delete_category<R>(category_id: i32, claim: &AdminUser, repo: &R) -> ServiceResult<()>
where
    R: UserReader + CategoryWriter,
{
    authenticate_admin(claim, repo)?;

    let category_id = match CategoryId::new(category_id) {
        Ok(category_id) => category_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.delete_category(category_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{CategoryName, Slug, UserId};
    use crate::domain::user::User;
    use crate::forms::categories::AddCategoryForm;
    use crate::repository::test::TestRepository;
    use chrono::Utc;

    fn admin_claim() -> AdminUser {
        let now = Utc::now().naive_utc();
        AdminUser {
            id: UserId::new(1).unwrap(),
            email: "admin@example.com".to_string(),
            username: "admin".to_string(),
            name: "Admin".to_string(),
            is_admin: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn admin_user() -> User {
        let now = Utc::now().naive_utc();
        User {
            id: UserId::new(1).unwrap(),
            email: "admin@example.com".to_string(),
            username: "admin".to_string(),
            name: "Admin".to_string(),
            password_hash: "$2b$10$irrelevant".to_string(),
            is_admin: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn category(id: i32, name: &str, slug: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
        }
    }

    fn payload(name: &str) -> AddCategoryFormPayload {
        AddCategoryForm {
            name: name.to_string(),
            slug: None,
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn listing_is_public() {
        let repo = TestRepository::new().with_categories(vec![category(1, "Fabrics", "fabrics")]);

        let categories = list_categories(&repo).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].slug, "fabrics");
    }

    #[test]
    fn create_requires_live_admin() {
        let repo = TestRepository::new();

        let result = create_category(&admin_claim(), payload("Fabrics"), &repo);
        assert_eq!(result, Err(ServiceError::Unauthorized));
    }

    #[test]
    fn create_succeeds_for_validated_admin() {
        let repo = TestRepository::new().with_users(vec![admin_user()]);

        let created = create_category(&admin_claim(), payload("Cotton & Linen"), &repo).unwrap();
        assert_eq!(created.slug, "cotton-linen");
    }

    #[test]
    fn update_of_missing_category_is_not_found() {
        let repo = TestRepository::new().with_users(vec![admin_user()]);

        let result = update_category(
            9,
            &admin_claim(),
            UpdateCategoryFormPayload {
                category: payload("Fabrics").category,
            },
            &repo,
        );
        assert_eq!(result, Err(ServiceError::NotFound));
    }

    #[test]
    fn delete_reports_not_found_for_absent_row() {
        let repo = TestRepository::new().with_users(vec![admin_user()]);

        assert_eq!(
            delete_category(7, &admin_claim(), &repo),
            Err(ServiceError::NotFound)
        );
    }

    #[test]
    fn get_rejects_non_positive_ids() {
        let repo = TestRepository::new();

        assert_eq!(get_category(0, &repo), Err(ServiceError::NotFound));
        assert_eq!(get_category(-3, &repo), Err(ServiceError::NotFound));
    }
}
