use std::sync::Arc;

use ais_relay_core::EntitySink;
use tracing::{debug, instrument};

use crate::{Result, vessel_cache::VesselCache};

/// Publishes the latest known state of every tracked vessel to an [`EntitySink`].
#[derive(Clone)]
pub struct Publisher {
    cache: Arc<VesselCache>,
    sink: Arc<dyn EntitySink>,
}

impl Publisher {
    pub fn new(cache: Arc<VesselCache>, sink: Arc<dyn EntitySink>) -> Self {
        Self { cache, sink }
    }

    /// Runs a single publish cycle and returns the number of published entities.
    ///
    /// Entities are published one at a time in snapshot order, each publish is awaited before
    /// the next is started. Vessels without a known record are skipped. The first failing
    /// publish aborts the cycle and its error is returned, the remaining vessels are picked up
    /// by the next cycle.
    #[instrument(skip_all, fields(app.num_published))]
    pub async fn run(&self) -> Result<usize> {
        let snapshot = self.cache.snapshot();

        let mut num_published = 0;
        for record in snapshot.iter().flatten() {
            let entity = self.sink.entity_from(record);

            debug!(
                "MMSI={} VESSEL NAME={}\n\t{entity:?}",
                record.mmsi, record.vessel_name
            );

            self.sink.publish(entity).await?;
            num_published += 1;
        }

        tracing::Span::current().record("app.num_published", num_published);

        Ok(num_published)
    }
}
