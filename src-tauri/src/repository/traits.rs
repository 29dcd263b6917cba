//! Repository Layer - Core Traits
//!
//! Abstract interface for data access, keyed by the entity's id.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Keyed storage for one entity type
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert the entity, replacing any row with the same id
    async fn insert(&self, entity: &T) -> DomainResult<()>;

    /// Find the entity with this id
    async fn select_one(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// Delete the entity with this id; deleting a missing row is not an error
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}
