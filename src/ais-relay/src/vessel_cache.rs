use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use ais_relay_core::{AisRecord, Mmsi};

use crate::{dataset::Dataset, record_stream::RecordStream};

/// Latest known record of every tracked vessel.
///
/// The set of tracked vessels is fixed at construction. Slots start out unknown and only ever
/// move forward to newer records, a vessel whose stream is exhausted keeps its last record.
///
/// [`VesselCache::refresh`] and [`VesselCache::snapshot`] are the only ways to touch the slots
/// and both hold a single lock for their whole duration, so a snapshot never observes a
/// partially applied refresh.
#[derive(Debug)]
pub struct VesselCache {
    inner: Mutex<Vec<Slot>>,
}

#[derive(Debug)]
struct Slot {
    latest: Option<Arc<AisRecord>>,
    stream: RecordStream,
}

impl VesselCache {
    /// Duplicate mmsis in `tracked` are collapsed into the first occurrence.
    pub fn new(tracked: Vec<Mmsi>, mut dataset: Dataset) -> VesselCache {
        let mut seen = HashSet::with_capacity(tracked.len());

        let slots = tracked
            .into_iter()
            .filter(|mmsi| seen.insert(mmsi.clone()))
            .map(|mmsi| {
                let records = dataset.take_partition(&mmsi);
                Slot {
                    latest: None,
                    stream: RecordStream::new(mmsi, records),
                }
            })
            .collect();

        VesselCache {
            inner: Mutex::new(slots),
        }
    }

    /// Advances every tracked vessel by at most one record.
    pub fn refresh(&self) {
        let mut slots = self.lock();
        for slot in slots.iter_mut() {
            if let Some(record) = slot.stream.next() {
                slot.latest = Some(record);
            }
        }
    }

    /// The latest record of every tracked vessel, `None` for vessels without any record yet.
    pub fn snapshot(&self) -> Vec<Option<Arc<AisRecord>>> {
        self.lock().iter().map(|s| s.latest.clone()).collect()
    }

    pub fn tracked(&self) -> Vec<Mmsi> {
        self.lock().iter().map(|s| s.stream.mmsi().clone()).collect()
    }

    /// True once no further refresh can change the cache.
    pub fn all_exhausted(&self) -> bool {
        self.lock().iter().all(|s| s.stream.remaining() == 0)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Slots are only ever replaced whole, a panic while holding the lock cannot leave them in
    // an inconsistent state.
    fn lock(&self) -> MutexGuard<'_, Vec<Slot>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
