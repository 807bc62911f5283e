use diesel::prelude::*;

use crate::domain::shop::{NewShop, Shop};
use crate::domain::types::{ShopId, ShopName};
use crate::models::shop::{NewShop as DbNewShop, Shop as DbShop};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ShopReader, ShopWriter};

impl ShopReader for DieselRepository {
    fn list_shops(&self) -> RepositoryResult<Vec<Shop>> {
        use crate::schema::shops;

        let mut conn = self.conn()?;

        let items = shops::table
            .order(shops::name.asc())
            .load::<DbShop>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Shop>, _>>()?;

        Ok(items)
    }
}

impl ShopWriter for DieselRepository {
    fn create_shop(&self, shop: &NewShop) -> RepositoryResult<Shop> {
        use crate::schema::shops;

        let mut conn = self.conn()?;
        let db_shop: DbNewShop = shop.clone().into();

        let inserted = diesel::insert_into(shops::table)
            .values(db_shop)
            .get_result::<DbShop>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn update_shop(&self, id: ShopId, name: &ShopName) -> RepositoryResult<Option<Shop>> {
        use crate::schema::shops;

        let mut conn = self.conn()?;

        let updated = diesel::update(shops::table.filter(shops::id.eq(id.get())))
            .set(shops::name.eq(name.as_str()))
            .get_result::<DbShop>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_shop(&self, id: ShopId) -> RepositoryResult<usize> {
        use crate::schema::shops;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(shops::table.filter(shops::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
