use crate::domain::auth::AdminUser;
use crate::domain::types::ShopId;
use crate::dto::shops::ShopDto;
use crate::forms::shops::ShopFormPayload;
use crate::repository::{ShopReader, ShopWriter, UserReader};
use crate::services::auth::authenticate_admin;

use super::{ServiceError, ServiceResult};

/// Lists all shops, ordered by name.
pub fn list_shops<R>(repo: &R) -> ServiceResult<Vec<ShopDto>>
where
    R: ShopReader,
{
    match repo.list_shops() {
        Ok(shops) => Ok(shops.into_iter().map(Into::into).collect()),
        Err(e) => {
            log::error!("Failed to list shops: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}

/// Creates a shop. Admin only.
pub fn create_shop<R>(claim: &AdminUser, payload: ShopFormPayload, repo: &R) -> ServiceResult<ShopDto>
where
    R: UserReader + ShopWriter,
{
    authenticate_admin(claim, repo)?;

    match repo.create_shop(&payload.shop) {
        Ok(shop) => Ok(shop.into()),
        Err(e) => {
            log::error!("Failed to create shop: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}

/// Renames a shop. Admin only.
pub fn update_shop<R>(
    shop_id: i32,
    claim: &AdminUser,
    payload: ShopFormPayload,
    repo: &R,
) -> ServiceResult<ShopDto>
where
    R: UserReader + ShopWriter,
{
    authenticate_admin(claim, repo)?;

    let shop_id = match ShopId::new(shop_id) {
        Ok(shop_id) => shop_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.update_shop(shop_id, &payload.shop.name) {
        Ok(Some(shop)) => Ok(shop.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update shop: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}

/// Deletes a shop. Admin only.
pub fn delete_shop<R>(shop_id: i32, claim: &AdminUser, repo: &R) -> ServiceResult<()>
where
    R: UserReader + ShopWriter,
{
    authenticate_admin(claim, repo)?;

    let shop_id = match ShopId::new(shop_id) {
        Ok(shop_id) => shop_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.delete_shop(shop_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete shop: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}
