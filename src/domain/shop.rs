use serde::{Deserialize, Serialize};

use crate::domain::types::{ShopId, ShopName};

/// Wholesale shop listed on the storefront. Not related to products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shop {
    pub id: ShopId,
    pub name: ShopName,
}

/// Data required to insert a new [`Shop`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewShop {
    pub name: ShopName,
}
