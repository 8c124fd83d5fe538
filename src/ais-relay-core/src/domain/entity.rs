use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::AisRecord;

pub static AIS_DATA_TYPE: &str = "ais";

/// The downstream representation of a vessel, built fresh from the latest
/// record every publish cycle.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub entity_id: String,
    pub description: String,
    pub is_live: bool,
    pub created_time: DateTime<Utc>,
    pub expiry_time: DateTime<Utc>,
    pub aliases: Aliases,
    pub location: Location,
    pub mil_view: MilView,
    pub ontology: Ontology,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Aliases {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub latitude_degrees: f64,
    pub longitude_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MilView {
    pub disposition: Disposition,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Disposition {
    #[serde(rename = "DISPOSITION_NEUTRAL")]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Environment {
    #[serde(rename = "ENVIRONMENT_SURFACE")]
    Surface,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ontology {
    pub template: Template,
    pub platform_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Template {
    #[serde(rename = "TEMPLATE_TRACK")]
    Track,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub integration_name: String,
    pub data_type: String,
    pub source_update_time: DateTime<Utc>,
}

/// Parameters that are constant for every entity an integration emits.
#[derive(Debug, Clone)]
pub struct EntityTemplate {
    pub integration_name: String,
    pub expiry: Duration,
}

impl Entity {
    pub fn from_record(record: &AisRecord, template: &EntityTemplate, now: DateTime<Utc>) -> Self {
        Self {
            entity_id: entity_id(record),
            description: format!("AIS vessel {}", record.mmsi),
            is_live: true,
            created_time: now,
            expiry_time: now + template.expiry,
            aliases: Aliases {
                name: record.display_name(),
            },
            location: Location {
                position: Position {
                    latitude_degrees: record.latitude,
                    longitude_degrees: record.longitude,
                },
            },
            mil_view: MilView {
                disposition: Disposition::Neutral,
                environment: Environment::Surface,
            },
            ontology: Ontology {
                template: Template::Track,
                platform_type: "Surface Vessel".into(),
            },
            provenance: Provenance {
                integration_name: template.integration_name.clone(),
                data_type: AIS_DATA_TYPE.into(),
                source_update_time: now,
            },
        }
    }
}

// Publishing the same mmsi twice must update the same downstream entity.
fn entity_id(record: &AisRecord) -> String {
    format!("ais-vessel-{}", record.mmsi)
}

impl Default for EntityTemplate {
    fn default() -> Self {
        Self {
            integration_name: "ais-relay".into(),
            expiry: Duration::minutes(5),
        }
    }
}
