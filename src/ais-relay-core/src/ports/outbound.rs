use async_trait::async_trait;

use crate::{AisRecord, Entity, Result};

/// A downstream service vessel entities are published to.
#[async_trait]
pub trait EntitySink: Send + Sync {
    fn entity_from(&self, record: &AisRecord) -> Entity;
    /// Resolves once the sink has acknowledged the entity, failures are returned as is
    /// and never retried by the caller.
    async fn publish(&self, entity: Entity) -> Result<()>;
}
