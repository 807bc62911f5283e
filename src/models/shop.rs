use diesel::prelude::*;

use crate::domain::shop::{NewShop as DomainNewShop, Shop as DomainShop};
use crate::domain::types::{ShopName, TypeConstraintError};

/// Diesel model representing the `shops` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::shops)]
pub struct Shop {
    pub id: i32,
    pub name: String,
}

/// Insertable/patchable form of [`Shop`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::shops)]
pub struct NewShop {
    pub name: String,
}

impl TryFrom<Shop> for DomainShop {
    type Error = TypeConstraintError;

    fn try_from(shop: Shop) -> Result<Self, Self::Error> {
        Ok(Self {
            id: shop.id.try_into()?,
            name: ShopName::new(shop.name)?,
        })
    }
}

impl From<DomainNewShop> for NewShop {
    fn from(shop: DomainNewShop) -> Self {
        Self {
            name: shop.name.into_inner(),
        }
    }
}
