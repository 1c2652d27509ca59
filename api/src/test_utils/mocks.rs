//! In-memory implementations of the gateway traits
//!
//! They store entities in memory, record every call by method name, and can be
//! switched to fail writes so tests can check error propagation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Category, CategoryId, Product, ProductId};
use crate::domain::ports::{CategoryGateway, ProductGateway};
use crate::error::DomainError;

// ============================================================================
// In-Memory Category Gateway
// ============================================================================

#[derive(Default)]
pub struct InMemoryCategoryGateway {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
    calls: Arc<RwLock<Vec<&'static str>>>,
    fail_writes: bool,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway whose `create` and `update` always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a category for testing
    pub fn with_category(self, category: Category) -> Self {
        self.categories
            .write()
            .unwrap()
            .insert(category.id, category);
        self
    }

    /// Method names called so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.read().unwrap().clone()
    }

    pub fn was_called(&self, method: &str) -> bool {
        self.calls.read().unwrap().iter().any(|c| *c == method)
    }

    /// Current stored state of a category, bypassing the call log
    pub fn stored(&self, id: &CategoryId) -> Option<Category> {
        self.categories.read().unwrap().get(id).cloned()
    }

    pub fn count(&self) -> usize {
        self.categories.read().unwrap().len()
    }

    fn record(&self, method: &'static str) {
        self.calls.write().unwrap().push(method);
    }

    fn sorted(&self, filter: impl Fn(&Category) -> bool) -> Vec<Category> {
        let categories = self.categories.read().unwrap();
        let mut result: Vec<_> = categories.values().filter(|c| filter(c)).cloned().collect();
        result.sort_by(|a, b| a.name().cmp(b.name()));
        result
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: &Category) -> Result<(), DomainError> {
        self.record("create");
        if self.fail_writes {
            return Err(DomainError::Database("write refused".to_string()));
        }

        let mut categories = self.categories.write().unwrap();
        if categories.values().any(|c| c.name() == category.name()) {
            return Err(DomainError::DuplicateName(category.name().to_string()));
        }
        categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        self.record("update");
        if self.fail_writes {
            return Err(DomainError::Database("write refused".to_string()));
        }

        let mut categories = self.categories.write().unwrap();
        match categories.get_mut(&category.id) {
            Some(existing) => {
                *existing = category.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Category {} not found",
                category.id
            ))),
        }
    }

    async fn get_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        self.record("get_by_id");
        Ok(self.stored(id))
    }

    async fn list_active(&self) -> Result<Vec<Category>, DomainError> {
        self.record("list_active");
        Ok(self.sorted(|c| c.is_active()))
    }

    async fn list_all(&self) -> Result<Vec<Category>, DomainError> {
        self.record("list_all");
        Ok(self.sorted(|_| true))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        self.record("exists_by_name");
        let categories = self.categories.read().unwrap();
        Ok(categories.values().any(|c| c.name() == name))
    }
}

// ============================================================================
// In-Memory Product Gateway
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductGateway {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
    calls: Arc<RwLock<Vec<&'static str>>>,
    fail_writes: bool,
}

impl InMemoryProductGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway whose `create` and `update` always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        self.products.write().unwrap().insert(product.id, product);
        self
    }

    /// Method names called so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.read().unwrap().clone()
    }

    pub fn was_called(&self, method: &str) -> bool {
        self.calls.read().unwrap().iter().any(|c| *c == method)
    }

    /// True when `create` or `update` was attempted
    pub fn wrote(&self) -> bool {
        self.was_called("create") || self.was_called("update")
    }

    /// Current stored state of a product, bypassing the call log
    pub fn stored(&self, id: &ProductId) -> Option<Product> {
        self.products.read().unwrap().get(id).cloned()
    }

    pub fn count(&self) -> usize {
        self.products.read().unwrap().len()
    }

    fn record(&self, method: &'static str) {
        self.calls.write().unwrap().push(method);
    }

    fn sorted(&self, filter: impl Fn(&Product) -> bool) -> Vec<Product> {
        let products = self.products.read().unwrap();
        let mut result: Vec<_> = products.values().filter(|p| filter(p)).cloned().collect();
        result.sort_by(|a, b| (a.name(), a.sku()).cmp(&(b.name(), b.sku())));
        result
    }
}

#[async_trait]
impl ProductGateway for InMemoryProductGateway {
    async fn create(&self, product: &Product) -> Result<(), DomainError> {
        self.record("create");
        if self.fail_writes {
            return Err(DomainError::Database("write refused".to_string()));
        }

        let mut products = self.products.write().unwrap();
        if products.values().any(|p| p.sku() == product.sku()) {
            return Err(DomainError::DuplicateSku(product.sku().to_string()));
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        self.record("update");
        if self.fail_writes {
            return Err(DomainError::Database("write refused".to_string()));
        }

        let mut products = self.products.write().unwrap();
        match products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Product {} not found",
                product.id
            ))),
        }
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        self.record("get_by_id");
        Ok(self.stored(id))
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        self.record("list_all");
        Ok(self.sorted(|_| true))
    }

    async fn list_active(&self) -> Result<Vec<Product>, DomainError> {
        self.record("list_active");
        Ok(self.sorted(|p| p.is_active()))
    }

    async fn list_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Product>, DomainError> {
        self.record("list_by_category");
        Ok(self.sorted(|p| p.category_id == *category_id))
    }

    async fn list_active_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Product>, DomainError> {
        self.record("list_active_by_category");
        Ok(self.sorted(|p| p.category_id == *category_id && p.is_active()))
    }

    async fn exists_by_sku(&self, sku: &str) -> Result<bool, DomainError> {
        self.record("exists_by_sku");
        let products = self.products.read().unwrap();
        Ok(products.values().any(|p| p.sku() == sku))
    }
}
