use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, NewProductFaq, Product, ProductFaq, ProductImage};
use crate::domain::shop::{NewShop, Shop};
use crate::domain::types::{CategoryId, ProductId, ShopId, ShopName, UserId};
use crate::domain::user::{NewUser, User};

pub mod category;
pub mod errors;
pub mod product;
pub mod shop;
#[cfg(test)]
pub mod test;
pub mod user;

pub use errors::{RepositoryError, RepositoryResult};

/// Pooled SQLite connections shared between request handlers.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Builds an `r2d2` pool for the given SQLite database path.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, diesel::r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Number of products per page when the client does not say otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Pagination parameters for range scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Query parameters used when listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Restrict to products in a category.
    pub category_id: Option<CategoryId>,
    /// Pagination parameters; `None` lists everything.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for user records.
pub trait UserReader {
    /// Retrieve a user by its identifier.
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    /// Retrieve a user whose email or username equals `identifier`.
    fn get_user_by_email_or_username(&self, identifier: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations for user records.
pub trait UserWriter {
    /// Persist a new user, returning the inserted row.
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category, returning the inserted row.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Update a category, returning the updated row or `None` if absent.
    fn update_category(
        &self,
        id: CategoryId,
        category: &NewCategory,
    ) -> RepositoryResult<Option<Category>>;
    /// Delete a category by id. Products referencing it are left alone.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for product entities and their children.
pub trait ProductReader {
    /// List products matching the supplied query parameters, with the total
    /// count before pagination.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// All image rows belonging to the given products.
    fn list_product_images(&self, product_ids: &[ProductId])
    -> RepositoryResult<Vec<ProductImage>>;
    /// All FAQ rows belonging to the given products.
    fn list_product_faqs(&self, product_ids: &[ProductId]) -> RepositoryResult<Vec<ProductFaq>>;
}

/// Write operations for product entities.
///
/// Parent and child rows are written in one transaction; a failed child
/// insert rolls back the whole write.
pub trait ProductWriter {
    /// Insert a product together with its ordered images and FAQs.
    fn create_product(
        &self,
        product: &NewProduct,
        images: &[String],
        faqs: &[NewProductFaq],
    ) -> RepositoryResult<Product>;
    /// Update a product row. `Some` child collections replace the existing
    /// rows wholesale (array position becomes `display_order`); `None` leaves
    /// them untouched.
    fn update_product(
        &self,
        id: ProductId,
        product: &NewProduct,
        images: Option<&[String]>,
        faqs: Option<&[NewProductFaq]>,
    ) -> RepositoryResult<Option<Product>>;
    /// Delete a product and its child rows.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}

/// Read-only operations for shop entities.
pub trait ShopReader {
    /// List all shops ordered by name.
    fn list_shops(&self) -> RepositoryResult<Vec<Shop>>;
}

/// Write operations for shop entities.
pub trait ShopWriter {
    /// Persist a new shop, returning the inserted row.
    fn create_shop(&self, shop: &NewShop) -> RepositoryResult<Shop>;
    /// Rename a shop, returning the updated row or `None` if absent.
    fn update_shop(&self, id: ShopId, name: &ShopName) -> RepositoryResult<Option<Shop>>;
    /// Delete a shop by id.
    fn delete_shop(&self, id: ShopId) -> RepositoryResult<usize>;
}
