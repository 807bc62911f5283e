use diesel::prelude::*;

use crate::domain::product::{NewProduct, NewProductFaq, Product, ProductFaq, ProductImage};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::models::product_faq::{NewProductFaq as DbNewProductFaq, ProductFaq as DbProductFaq};
use crate::models::product_image::{
    NewProductImage as DbNewProductImage, ProductImage as DbProductImage,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

fn image_rows(product_id: i32, images: &[String]) -> Vec<DbNewProductImage> {
    images
        .iter()
        .enumerate()
        .map(|(index, url)| DbNewProductImage {
            product_id,
            image_url: url.clone(),
            display_order: index as i32,
        })
        .collect()
}

fn faq_rows(product_id: i32, faqs: &[NewProductFaq]) -> Vec<DbNewProductFaq> {
    faqs.iter()
        .enumerate()
        .map(|(index, faq)| DbNewProductFaq {
            product_id,
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            display_order: index as i32,
        })
        .collect()
}

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(category_id) = query.category_id {
                items = items.filter(products::category_id.eq(category_id.get()));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            // `page` comes straight from the query string; keep the offset
            // arithmetic from overflowing on absurd values.
            let offset = (pagination.page.max(1) - 1)
                .saturating_mul(pagination.per_page)
                .min(i64::MAX as usize) as i64;
            let limit = pagination.per_page.min(i64::MAX as usize) as i64;
            items = items.offset(offset).limit(limit);
        }

        // Insertion order keeps pagination stable.
        let items = items
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok((total, items))
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.get()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }

    fn list_product_images(
        &self,
        product_ids: &[ProductId],
    ) -> RepositoryResult<Vec<ProductImage>> {
        use crate::schema::product_images;

        let mut conn = self.conn()?;
        let ids: Vec<i32> = product_ids.iter().map(|id| id.get()).collect();

        let items = product_images::table
            .filter(product_images::product_id.eq_any(ids))
            .order((
                product_images::product_id.asc(),
                product_images::display_order.asc(),
            ))
            .load::<DbProductImage>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ProductImage>, _>>()?;

        Ok(items)
    }

    fn list_product_faqs(&self, product_ids: &[ProductId]) -> RepositoryResult<Vec<ProductFaq>> {
        use crate::schema::product_faqs;

        let mut conn = self.conn()?;
        let ids: Vec<i32> = product_ids.iter().map(|id| id.get()).collect();

        let items = product_faqs::table
            .filter(product_faqs::product_id.eq_any(ids))
            .order((
                product_faqs::product_id.asc(),
                product_faqs::display_order.asc(),
            ))
            .load::<DbProductFaq>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ProductFaq>, _>>()?;

        Ok(items)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(
        &self,
        product: &NewProduct,
        images: &[String],
        faqs: &[NewProductFaq],
    ) -> RepositoryResult<Product> {
        use crate::schema::{product_faqs, product_images, products};

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let inserted = conn.transaction::<_, RepositoryError, _>(|conn| {
            let inserted = diesel::insert_into(products::table)
                .values(db_product)
                .get_result::<DbProduct>(conn)?;

            if !images.is_empty() {
                diesel::insert_into(product_images::table)
                    .values(image_rows(inserted.id, images))
                    .execute(conn)?;
            }

            if !faqs.is_empty() {
                diesel::insert_into(product_faqs::table)
                    .values(faq_rows(inserted.id, faqs))
                    .execute(conn)?;
            }

            Ok(inserted)
        })?;

        Ok(inserted.try_into()?)
    }

    fn update_product(
        &self,
        id: ProductId,
        product: &NewProduct,
        images: Option<&[String]>,
        faqs: Option<&[NewProductFaq]>,
    ) -> RepositoryResult<Option<Product>> {
        use crate::schema::{product_faqs, product_images, products};

        let mut conn = self.conn()?;
        let db_product: DbUpdateProduct = product.clone().into();

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(products::table.filter(products::id.eq(id.get())))
                .set(db_product)
                .get_result::<DbProduct>(conn)
                .optional()?;

            let Some(updated) = updated else {
                return Ok(None);
            };

            // A supplied collection replaces the existing child rows wholesale;
            // an omitted one is left untouched.
            if let Some(images) = images {
                diesel::delete(
                    product_images::table.filter(product_images::product_id.eq(updated.id)),
                )
                .execute(conn)?;
                if !images.is_empty() {
                    diesel::insert_into(product_images::table)
                        .values(image_rows(updated.id, images))
                        .execute(conn)?;
                }
            }

            if let Some(faqs) = faqs {
                diesel::delete(
                    product_faqs::table.filter(product_faqs::product_id.eq(updated.id)),
                )
                .execute(conn)?;
                if !faqs.is_empty() {
                    diesel::insert_into(product_faqs::table)
                        .values(faq_rows(updated.id, faqs))
                        .execute(conn)?;
                }
            }

            Ok(Some(updated))
        })?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::{product_faqs, product_images, products};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(product_images::table.filter(product_images::product_id.eq(id.get())))
                .execute(conn)?;
            diesel::delete(product_faqs::table.filter(product_faqs::product_id.eq(id.get())))
                .execute(conn)?;
            let affected =
                diesel::delete(products::table.filter(products::id.eq(id.get()))).execute(conn)?;
            Ok(affected)
        })?;

        Ok(affected)
    }
}
