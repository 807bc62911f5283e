use std::cell::{Cell, RefCell};

use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, NewProductFaq, Product, ProductFaq, ProductImage};
use crate::domain::shop::{NewShop, Shop};
use crate::domain::types::{CategoryId, ProductId, ShopId, ShopName, UserId};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CategoryReader, CategoryWriter, ProductListQuery, ProductReader, ProductWriter, ShopReader,
    ShopWriter, UserReader, UserWriter,
};

/// Simple in-memory repository used for unit tests.
///
/// Child-row writes are counted so tests can assert that omitting a
/// collection on update issues no mutation at all.
#[derive(Default)]
pub struct TestRepository {
    users: RefCell<Vec<User>>,
    categories: RefCell<Vec<Category>>,
    products: RefCell<Vec<Product>>,
    images: RefCell<Vec<ProductImage>>,
    faqs: RefCell<Vec<ProductFaq>>,
    shops: RefCell<Vec<Shop>>,
    image_mutations: Cell<usize>,
    faq_mutations: Cell<usize>,
}

impl TestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.borrow_mut() = users;
        self
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.borrow_mut() = categories;
        self
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        *self.products.borrow_mut() = products;
        self
    }

    pub fn with_images(self, images: Vec<ProductImage>) -> Self {
        *self.images.borrow_mut() = images;
        self
    }

    pub fn with_faqs(self, faqs: Vec<ProductFaq>) -> Self {
        *self.faqs.borrow_mut() = faqs;
        self
    }

    pub fn with_shops(self, shops: Vec<Shop>) -> Self {
        *self.shops.borrow_mut() = shops;
        self
    }

    /// Snapshot of all stored image rows.
    pub fn images(&self) -> Vec<ProductImage> {
        self.images.borrow().clone()
    }

    /// Snapshot of all stored FAQ rows.
    pub fn faqs(&self) -> Vec<ProductFaq> {
        self.faqs.borrow().clone()
    }

    /// Number of times the image child table was touched by a write.
    pub fn image_mutations(&self) -> usize {
        self.image_mutations.get()
    }

    /// Number of times the FAQ child table was touched by a write.
    pub fn faq_mutations(&self) -> usize {
        self.faq_mutations.get()
    }

    fn replace_images(&self, product_id: ProductId, images: &[String]) {
        self.image_mutations.set(self.image_mutations.get() + 1);
        let mut stored = self.images.borrow_mut();
        stored.retain(|image| image.product_id != product_id);
        for (index, url) in images.iter().enumerate() {
            let id = (stored.len() + 1) as i32;
            stored.push(ProductImage {
                id,
                product_id,
                image_url: url.clone(),
                display_order: index as i32,
            });
        }
    }

    fn replace_faqs(&self, product_id: ProductId, faqs: &[NewProductFaq]) {
        self.faq_mutations.set(self.faq_mutations.get() + 1);
        let mut stored = self.faqs.borrow_mut();
        stored.retain(|faq| faq.product_id != product_id);
        for (index, faq) in faqs.iter().enumerate() {
            let id = (stored.len() + 1) as i32;
            stored.push(ProductFaq {
                id,
                product_id,
                question: faq.question.clone(),
                answer: faq.answer.clone(),
                display_order: index as i32,
            });
        }
    }
}

fn materialize_product(id: ProductId, new: &NewProduct) -> Product {
    Product {
        id,
        name: new.name.clone(),
        category_id: new.category_id,
        description: new.description.clone(),
        shop_name: new.shop_name.clone(),
        fabric_type: new.fabric_type.clone(),
        size_range: new.size_range.clone(),
        price: new.price,
        low_price: new.low_price,
        recommended: new.recommended,
        created_at: new.created_at,
        updated_at: new.updated_at,
    }
}

impl UserReader for TestRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    fn get_user_by_email_or_username(&self, identifier: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|user| user.email == identifier || user.username == identifier)
            .cloned())
    }
}

impl UserWriter for TestRepository {
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User> {
        let mut users = self.users.borrow_mut();
        let created = User {
            id: UserId::new((users.len() + 1) as i32).expect("test user id"),
            email: user.email.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            password_hash: user.password_hash.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        };
        users.push(created.clone());
        Ok(created)
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self
            .categories
            .borrow()
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }
}

impl CategoryWriter for TestRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        let mut categories = self.categories.borrow_mut();
        let created = Category {
            id: CategoryId::new((categories.len() + 1) as i32).expect("test category id"),
            name: category.name.clone(),
            slug: category.slug.clone(),
        };
        categories.push(created.clone());
        Ok(created)
    }

    fn update_category(
        &self,
        id: CategoryId,
        category: &NewCategory,
    ) -> RepositoryResult<Option<Category>> {
        let mut categories = self.categories.borrow_mut();
        let Some(stored) = categories.iter_mut().find(|stored| stored.id == id) else {
            return Ok(None);
        };
        stored.name = category.name.clone();
        stored.slug = category.slug.clone();
        Ok(Some(stored.clone()))
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        let mut categories = self.categories.borrow_mut();
        let before = categories.len();
        categories.retain(|category| category.id != id);
        Ok(before - categories.len())
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        let mut items: Vec<Product> = self.products.borrow().clone();
        if let Some(category_id) = query.category_id {
            items.retain(|product| product.category_id == category_id);
        }
        let total = items.len();
        if let Some(pagination) = query.pagination {
            let offset = (pagination.page.max(1) - 1).saturating_mul(pagination.per_page);
            items = items
                .into_iter()
                .skip(offset)
                .take(pagination.per_page)
                .collect();
        }
        Ok((total, items))
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        Ok(self
            .products
            .borrow()
            .iter()
            .find(|product| product.id == id)
            .cloned())
    }

    fn list_product_images(
        &self,
        product_ids: &[ProductId],
    ) -> RepositoryResult<Vec<ProductImage>> {
        let mut items: Vec<ProductImage> = self
            .images
            .borrow()
            .iter()
            .filter(|image| product_ids.contains(&image.product_id))
            .cloned()
            .collect();
        items.sort_by_key(|image| (image.product_id, image.display_order));
        Ok(items)
    }

    fn list_product_faqs(&self, product_ids: &[ProductId]) -> RepositoryResult<Vec<ProductFaq>> {
        let mut items: Vec<ProductFaq> = self
            .faqs
            .borrow()
            .iter()
            .filter(|faq| product_ids.contains(&faq.product_id))
            .cloned()
            .collect();
        items.sort_by_key(|faq| (faq.product_id, faq.display_order));
        Ok(items)
    }
}

impl ProductWriter for TestRepository {
    fn create_product(
        &self,
        product: &NewProduct,
        images: &[String],
        faqs: &[NewProductFaq],
    ) -> RepositoryResult<Product> {
        let created = {
            let mut products = self.products.borrow_mut();
            let id = ProductId::new((products.len() + 1) as i32).expect("test product id");
            let created = materialize_product(id, product);
            products.push(created.clone());
            created
        };
        if !images.is_empty() {
            self.replace_images(created.id, images);
        }
        if !faqs.is_empty() {
            self.replace_faqs(created.id, faqs);
        }
        Ok(created)
    }

    fn update_product(
        &self,
        id: ProductId,
        product: &NewProduct,
        images: Option<&[String]>,
        faqs: Option<&[NewProductFaq]>,
    ) -> RepositoryResult<Option<Product>> {
        let updated = {
            let mut products = self.products.borrow_mut();
            let Some(stored) = products.iter_mut().find(|stored| stored.id == id) else {
                return Ok(None);
            };
            let created_at = stored.created_at;
            *stored = materialize_product(id, product);
            stored.created_at = created_at;
            stored.clone()
        };
        if let Some(images) = images {
            self.replace_images(id, images);
        }
        if let Some(faqs) = faqs {
            self.replace_faqs(id, faqs);
        }
        Ok(Some(updated))
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        let mut products = self.products.borrow_mut();
        let before = products.len();
        products.retain(|product| product.id != id);
        self.images.borrow_mut().retain(|image| image.product_id != id);
        self.faqs.borrow_mut().retain(|faq| faq.product_id != id);
        Ok(before - products.len())
    }
}

impl ShopReader for TestRepository {
    fn list_shops(&self) -> RepositoryResult<Vec<Shop>> {
        let mut shops = self.shops.borrow().clone();
        shops.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(shops)
    }
}

impl ShopWriter for TestRepository {
    fn create_shop(&self, shop: &NewShop) -> RepositoryResult<Shop> {
        let mut shops = self.shops.borrow_mut();
        let created = Shop {
            id: ShopId::new((shops.len() + 1) as i32).expect("test shop id"),
            name: shop.name.clone(),
        };
        shops.push(created.clone());
        Ok(created)
    }

    fn update_shop(&self, id: ShopId, name: &ShopName) -> RepositoryResult<Option<Shop>> {
        let mut shops = self.shops.borrow_mut();
        let Some(stored) = shops.iter_mut().find(|stored| stored.id == id) else {
            return Ok(None);
        };
        stored.name = name.clone();
        Ok(Some(stored.clone()))
    }

    fn delete_shop(&self, id: ShopId) -> RepositoryResult<usize> {
        let mut shops = self.shops.borrow_mut();
        let before = shops.len();
        shops.retain(|shop| shop.id != id);
        Ok(before - shops.len())
    }
}
