use std::{
    collections::{HashMap, HashSet},
    io::Read,
    path::Path,
    sync::Arc,
};

use ais_relay_core::{AisRecord, Mmsi};
use serde::Deserialize;
use snafu::ResultExt;
use tracing::{info, instrument};

use crate::{Result, error::error::DatasetSnafu};

/// Recorded AIS traffic grouped by vessel, each group kept in the order the rows appear in the
/// source.
#[derive(Debug, Default)]
pub struct Dataset {
    partitions: HashMap<Mmsi, Vec<Arc<AisRecord>>>,
}

// Only the columns we replay, every other column in the export is ignored.
#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "MMSI")]
    mmsi: String,
    #[serde(rename = "LAT")]
    latitude: f64,
    #[serde(rename = "LON")]
    longitude: f64,
    #[serde(rename = "VesselName", default)]
    vessel_name: Option<String>,
}

impl Dataset {
    /// Loads the csv file at `path`, rows belonging to vessels outside of `tracked` are dropped.
    #[instrument(skip(tracked))]
    pub fn load(path: &Path, tracked: &[Mmsi]) -> Result<Dataset> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Fields)
            .from_path(path)
            .context(DatasetSnafu { path })?;

        let dataset = Self::from_csv(reader, tracked).context(DatasetSnafu { path })?;

        info!(
            num_vessels = dataset.partitions.len(),
            num_records = dataset.num_records(),
            "loaded ais dataset"
        );

        Ok(dataset)
    }

    pub fn from_reader(
        reader: impl Read,
        tracked: &[Mmsi],
    ) -> std::result::Result<Dataset, csv::Error> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Fields)
            .from_reader(reader);

        Self::from_csv(reader, tracked)
    }

    fn from_csv<R: Read>(
        mut reader: csv::Reader<R>,
        tracked: &[Mmsi],
    ) -> std::result::Result<Dataset, csv::Error> {
        let tracked: HashSet<&str> = tracked.iter().map(AsRef::as_ref).collect();
        let mut partitions: HashMap<Mmsi, Vec<Arc<AisRecord>>> = HashMap::new();

        for row in reader.deserialize::<DatasetRow>() {
            let row = row?;
            if !tracked.contains(row.mmsi.as_str()) {
                continue;
            }

            let record = AisRecord::from(row);
            partitions
                .entry(record.mmsi.clone())
                .or_default()
                .push(Arc::new(record));
        }

        Ok(Dataset { partitions })
    }

    pub fn from_records(records: impl IntoIterator<Item = AisRecord>) -> Dataset {
        let mut partitions: HashMap<Mmsi, Vec<Arc<AisRecord>>> = HashMap::new();
        for record in records {
            partitions
                .entry(record.mmsi.clone())
                .or_default()
                .push(Arc::new(record));
        }
        Dataset { partitions }
    }

    /// Removes and returns the records of `mmsi`, vessels without any records yield an empty
    /// partition.
    pub fn take_partition(&mut self, mmsi: &Mmsi) -> Vec<Arc<AisRecord>> {
        self.partitions.remove(mmsi).unwrap_or_default()
    }

    pub fn num_records(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }
}

impl From<DatasetRow> for AisRecord {
    fn from(value: DatasetRow) -> Self {
        AisRecord {
            mmsi: Mmsi::from(value.mmsi),
            latitude: value.latitude,
            longitude: value.longitude,
            vessel_name: value.vessel_name.unwrap_or_default(),
        }
    }
}
