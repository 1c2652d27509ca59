//! PostgreSQL adapter for CategoryGateway

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{map_write_error, WriteTarget};
use crate::domain::entities::{Category, CategoryId};
use crate::domain::ports::CategoryGateway;
use crate::entity::categories;
use crate::error::DomainError;

/// PostgreSQL implementation of CategoryGateway
pub struct PostgresCategoryGateway {
    db: DatabaseConnection,
}

impl PostgresCategoryGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(category: &Category) -> categories::ActiveModel {
    categories::ActiveModel {
        id: Set(category.id.0),
        name: Set(category.name().to_string()),
        description: Set(category.description.clone()),
        active: Set(category.is_active()),
        created_at: Set(category.created_at.fixed_offset()),
        updated_at: Set(category.updated_at.fixed_offset()),
    }
}

#[async_trait]
impl CategoryGateway for PostgresCategoryGateway {
    async fn create(&self, category: &Category) -> Result<(), DomainError> {
        to_active_model(category)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, WriteTarget::Category(category)))?;

        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        to_active_model(category)
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, WriteTarget::Category(category)))?;

        Ok(())
    }

    async fn get_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Category::try_from).transpose()
    }

    async fn list_active(&self) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .filter(categories::Column::Active.eq(true))
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Category::try_from).collect()
    }

    async fn list_all(&self) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Category::try_from).collect()
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let count = categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }
}

impl TryFrom<categories::Model> for Category {
    type Error = DomainError;

    fn try_from(m: categories::Model) -> Result<Self, Self::Error> {
        let id = m.id;
        Category::restore(
            CategoryId(m.id),
            m.name,
            m.description,
            m.active,
            m.created_at.with_timezone(&Utc),
            m.updated_at.with_timezone(&Utc),
        )
        .map_err(|e| DomainError::Internal(format!("Stored category {} is invalid: {}", id, e)))
    }
}
