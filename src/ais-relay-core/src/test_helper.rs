use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use snafu::IntoError;

use crate::{
    AisRecord, Entity, EntitySink, EntityTemplate, Mmsi, Result, sink_error::PublishSnafu,
};

impl AisRecord {
    pub fn test_default(mmsi: &str) -> AisRecord {
        AisRecord {
            mmsi: Mmsi::from(mmsi),
            latitude: 70.21,
            longitude: 19.1,
            vessel_name: format!("TEST VESSEL {mmsi}"),
        }
    }

    pub fn test_at(mmsi: &str, latitude: f64, longitude: f64) -> AisRecord {
        AisRecord {
            latitude,
            longitude,
            ..AisRecord::test_default(mmsi)
        }
    }
}

/// Sink that keeps every published entity in memory, optionally failing or delaying every
/// publish.
#[derive(Debug, Default)]
pub struct TestSink {
    published: Mutex<Vec<Entity>>,
    attempts: AtomicUsize,
    fail: bool,
    delay: Option<Duration>,
}

#[derive(Debug)]
struct TestSinkFailure;

impl TestSink {
    pub fn new() -> TestSink {
        TestSink::default()
    }

    pub fn failing() -> TestSink {
        TestSink {
            fail: true,
            ..Default::default()
        }
    }

    /// Every publish waits `delay` before the entity is recorded.
    pub fn slow(delay: Duration) -> TestSink {
        TestSink {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn published(&self) -> Vec<Entity> {
        self.published.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn test_time() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }
}

#[async_trait]
impl EntitySink for TestSink {
    fn entity_from(&self, record: &AisRecord) -> Entity {
        Entity::from_record(record, &EntityTemplate::default(), TestSink::test_time())
    }

    async fn publish(&self, entity: Entity) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(PublishSnafu {
                entity_id: entity.entity_id,
            }
            .into_error(Box::new(TestSinkFailure)));
        }

        self.published.lock().unwrap().push(entity);
        Ok(())
    }
}

impl std::fmt::Display for TestSinkFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("test sink configured to fail")
    }
}

impl std::error::Error for TestSinkFailure {}
