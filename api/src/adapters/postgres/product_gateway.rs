//! PostgreSQL adapter for ProductGateway

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select, Set,
};

use super::{map_write_error, WriteTarget};
use crate::domain::entities::{CategoryId, NewProduct, Product, ProductId};
use crate::domain::ports::ProductGateway;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductGateway
pub struct PostgresProductGateway {
    db: DatabaseConnection,
}

impl PostgresProductGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: Select<products::Entity>) -> Result<Vec<Product>, DomainError> {
        let results = query
            .order_by_asc(products::Column::Name)
            .order_by_asc(products::Column::Sku)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Product::try_from).collect()
    }
}

fn to_active_model(product: &Product) -> products::ActiveModel {
    products::ActiveModel {
        id: Set(product.id.0),
        name: Set(product.name().to_string()),
        sku: Set(product.sku().to_string()),
        description: Set(product.description.clone()),
        price: Set(product.price),
        category_id: Set(product.category_id.0),
        active: Set(product.is_active()),
        image: Set(product.image.clone()),
        created_at: Set(product.created_at.fixed_offset()),
        updated_at: Set(product.updated_at.fixed_offset()),
    }
}

#[async_trait]
impl ProductGateway for PostgresProductGateway {
    async fn create(&self, product: &Product) -> Result<(), DomainError> {
        to_active_model(product)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, WriteTarget::Product(product)))?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        to_active_model(product)
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, WriteTarget::Product(product)))?;

        Ok(())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Product::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        self.fetch(products::Entity::find()).await
    }

    async fn list_active(&self) -> Result<Vec<Product>, DomainError> {
        self.fetch(products::Entity::find().filter(products::Column::Active.eq(true)))
            .await
    }

    async fn list_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Product>, DomainError> {
        self.fetch(
            products::Entity::find().filter(products::Column::CategoryId.eq(category_id.0)),
        )
        .await
    }

    async fn list_active_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Product>, DomainError> {
        self.fetch(
            products::Entity::find()
                .filter(products::Column::CategoryId.eq(category_id.0))
                .filter(products::Column::Active.eq(true)),
        )
        .await
    }

    async fn exists_by_sku(&self, sku: &str) -> Result<bool, DomainError> {
        let count = products::Entity::find()
            .filter(products::Column::Sku.eq(sku))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }
}

impl TryFrom<products::Model> for Product {
    type Error = DomainError;

    fn try_from(m: products::Model) -> Result<Self, Self::Error> {
        let id = m.id;
        Product::restore(
            ProductId(m.id),
            NewProduct {
                name: m.name,
                sku: m.sku,
                description: m.description,
                price: m.price,
                category_id: CategoryId(m.category_id),
                image: m.image,
            },
            m.active,
            m.created_at.with_timezone(&Utc),
            m.updated_at.with_timezone(&Utc),
        )
        .map_err(|e| DomainError::Internal(format!("Stored product {} is invalid: {}", id, e)))
    }
}
