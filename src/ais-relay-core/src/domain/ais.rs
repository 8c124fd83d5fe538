use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Maritime Mobile Service Identity, the key every tracked vessel is identified by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mmsi(String);

/// A single observation of a vessel taken from the replayed dataset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AisRecord {
    pub mmsi: Mmsi,
    pub latitude: f64,
    pub longitude: f64,
    pub vessel_name: String,
}

impl AisRecord {
    /// The name to present downstream, vessels without a reported name are
    /// presented by their mmsi.
    pub fn display_name(&self) -> String {
        let name = self.vessel_name.trim();
        if name.is_empty() {
            format!("MMSI {}", self.mmsi)
        } else {
            name.to_string()
        }
    }
}

impl AsRef<str> for Mmsi {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Mmsi {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Mmsi {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
