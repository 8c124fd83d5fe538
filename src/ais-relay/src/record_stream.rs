use std::{iter::FusedIterator, sync::Arc};

use ais_relay_core::{AisRecord, Mmsi};
use tracing::info;

/// Replays the records of a single vessel once, in dataset order.
///
/// The stream is a cursor over an immutable sequence of records. Once every record has been
/// yielded the stream is exhausted for good, the first call that discovers this is logged and
/// every following call returns `None`.
#[derive(Debug)]
pub struct RecordStream {
    mmsi: Mmsi,
    records: Vec<Arc<AisRecord>>,
    cursor: usize,
    exhausted: bool,
}

impl RecordStream {
    pub fn new(mmsi: Mmsi, records: Vec<Arc<AisRecord>>) -> RecordStream {
        RecordStream {
            mmsi,
            records,
            cursor: 0,
            exhausted: false,
        }
    }

    pub fn mmsi(&self) -> &Mmsi {
        &self.mmsi
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn remaining(&self) -> usize {
        self.records.len() - self.cursor
    }
}

impl Iterator for RecordStream {
    type Item = Arc<AisRecord>;

    fn next(&mut self) -> Option<Arc<AisRecord>> {
        match self.records.get(self.cursor) {
            Some(record) => {
                self.cursor += 1;
                Some(record.clone())
            }
            None => {
                if !self.exhausted {
                    self.exhausted = true;
                    info!(
                        mmsi = %self.mmsi,
                        "data generation complete, no more incoming vessel data for this mmsi"
                    );
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordStream {}

impl FusedIterator for RecordStream {}
