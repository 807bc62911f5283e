use serde::Serialize;

use crate::domain::shop::Shop;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShopDto {
    pub id: i32,
    pub name: String,
}

impl From<Shop> for ShopDto {
    fn from(value: Shop) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
        }
    }
}
