use std::collections::HashMap;

use crate::domain::auth::AdminUser;
use crate::domain::product::Product;
use crate::domain::types::{CategoryId, ProductId};
use crate::dto::products::{ProductDto, ProductListDto};
use crate::forms::products::ProductFormPayload;
use crate::repository::{
    CategoryReader, DEFAULT_ITEMS_PER_PAGE, ProductListQuery, ProductReader, ProductWriter,
    UserReader,
};
use crate::services::auth::authenticate_admin;

use super::{ServiceError, ServiceResult};

fn empty_page(page: usize) -> ProductListDto {
    ProductListDto {
        products: Vec::new(),
        total_count: 0,
        page,
        total_pages: 0,
    }
}

/// Joins child rows and category names onto a page of product rows.
fn assemble_products<R>(products: Vec<Product>, repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader + CategoryReader,
{
    let ids: Vec<ProductId> = products.iter().map(|product| product.id).collect();

    let images = match repo.list_product_images(&ids) {
        Ok(images) => images,
        Err(e) => {
            log::error!("Failed to list product images: {e}");
            return Err(ServiceError::Repository(e.to_string()));
        }
    };
    let faqs = match repo.list_product_faqs(&ids) {
        Ok(faqs) => faqs,
        Err(e) => {
            log::error!("Failed to list product FAQs: {e}");
            return Err(ServiceError::Repository(e.to_string()));
        }
    };
    let category_names: HashMap<CategoryId, String> = match repo.list_categories() {
        Ok(categories) => categories
            .into_iter()
            .map(|category| (category.id, category.name.into_inner()))
            .collect(),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Repository(e.to_string()));
        }
    };

    let mut images_by_product: HashMap<ProductId, Vec<_>> = HashMap::new();
    for image in images {
        images_by_product.entry(image.product_id).or_default().push(image);
    }
    let mut faqs_by_product: HashMap<ProductId, Vec<_>> = HashMap::new();
    for faq in faqs {
        faqs_by_product.entry(faq.product_id).or_default().push(faq);
    }

    Ok(products
        .into_iter()
        .map(|product| {
            let product_images = images_by_product.remove(&product.id).unwrap_or_default();
            let product_faqs = faqs_by_product.remove(&product.id).unwrap_or_default();
            let category_name = category_names.get(&product.category_id).cloned();
            ProductDto::assemble(product, product_images, product_faqs, category_name)
        })
        .collect())
}

fn assemble_one<R>(product: Product, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader + CategoryReader,
{
    let mut products = assemble_products(vec![product], repo)?;
    products.pop().ok_or(ServiceError::Internal)
}

/// Lists products for the public catalog, newest page parameters winning
/// over defaults.
///
/// `total_pages` counts full and partial pages of the filtered set; a
/// category filter that matches nothing yields an empty page, not an error.
pub fn list_products<R>(
    page: Option<usize>,
    limit: Option<usize>,
    category_id: Option<i32>,
    repo: &R,
) -> ServiceResult<ProductListDto>
where
    R: ProductReader + CategoryReader,
{
    let page = page.unwrap_or(1).max(1);
    let per_page = limit.unwrap_or(DEFAULT_ITEMS_PER_PAGE).max(1);

    let mut query = ProductListQuery::default().paginate(page, per_page);
    if let Some(category_id) = category_id {
        match CategoryId::new(category_id) {
            Ok(category_id) => query = query.category(category_id),
            // Ids that cannot exist match nothing.
            Err(_) => return Ok(empty_page(page)),
        }
    }

    let (total, products) = match repo.list_products(query) {
        Ok(listed) => listed,
        Err(e) => {
            log::error!("Failed to list products: {e}");
            return Err(ServiceError::Repository(e.to_string()));
        }
    };

    Ok(ProductListDto {
        products: assemble_products(products, repo)?,
        total_count: total,
        page,
        total_pages: total.div_ceil(per_page),
    })
}

/// Fetches one product with its images, FAQs and category name.
pub fn get_product<R>(product_id: i32, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader + CategoryReader,
{
    let product_id = match ProductId::new(product_id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let product = match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Repository(e.to_string()));
        }
    };

    assemble_one(product, repo)
}

/// Creates a product with its child rows. Admin only.
pub fn create_product<R>(
    claim: &AdminUser,
    payload: ProductFormPayload,
    repo: &R,
) -> ServiceResult<ProductDto>
where
    R: UserReader + ProductReader + ProductWriter + CategoryReader,
{
    authenticate_admin(claim, repo)?;

    let images = payload.images.unwrap_or_default();
    let faqs = payload.faqs.unwrap_or_default();
    let product = match repo.create_product(&payload.product, &images, &faqs) {
        Ok(product) => product,
        Err(e) => {
            log::error!("Failed to create product: {e}");
            return Err(ServiceError::Repository(e.to_string()));
        }
    };

    assemble_one(product, repo)
}

/// Updates a product. Admin only.
///
/// A supplied image or FAQ array, even an empty one, replaces the stored
/// rows wholesale; an absent array leaves them untouched.
pub fn update_product<R>(
    product_id: i32,
    claim: &AdminUser,
    payload: ProductFormPayload,
    repo: &R,
) -> ServiceResult<ProductDto>
where
    R: UserReader + ProductReader + ProductWriter + CategoryReader,
{
    authenticate_admin(claim, repo)?;

    let product_id = match ProductId::new(product_id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let product = match repo.update_product(
        product_id,
        &payload.product,
        payload.images.as_deref(),
        payload.faqs.as_deref(),
    ) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update product: {e}");
            return Err(ServiceError::Repository(e.to_string()));
        }
    };

    assemble_one(product, repo)
}

/// Deletes a product and its child rows. Admin only.
pub fn delete_product<R>(product_id: i32, claim: &AdminUser, repo: &R) -> ServiceResult<()>
where
    R: UserReader + ProductWriter,
{
    authenticate_admin(claim, repo)?;

    let product_id = match ProductId::new(product_id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.delete_product(product_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(ServiceError::Repository(e.to_string()))
        }
    }
}
