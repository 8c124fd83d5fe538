use ais_relay_core::{
    AisRecord, BoxedError, Entity, EntitySink, EntityTemplate,
    sink_error::{PublishSnafu, TimeoutSnafu},
};
use async_trait::async_trait;
use chrono::Utc;
use http_client::HttpClient;
use snafu::IntoError;
use tracing::trace;

use crate::{Result, settings::Settings};

pub static SANDBOX_AUTHORIZATION_HEADER: &str = "Anduril-Sandbox-Authorization";

/// Publishes vessel entities to the entity api of a Lattice mesh.
pub struct LatticeClient {
    client: HttpClient,
    url: String,
    sandbox_token: Option<String>,
    template: EntityTemplate,
}

impl LatticeClient {
    pub fn new(settings: &Settings) -> Result<LatticeClient> {
        let client = HttpClient::builder()
            .timeout(settings.publish_timeout)
            .max_retries(settings.max_retries)
            .bearer_token(&settings.lattice_bearer_token)
            .build()?;

        Ok(LatticeClient {
            client,
            url: settings.lattice_url(),
            sandbox_token: settings.sandbox_token.clone(),
            template: settings.entity_template(),
        })
    }
}

#[async_trait]
impl EntitySink for LatticeClient {
    fn entity_from(&self, record: &AisRecord) -> Entity {
        Entity::from_record(record, &self.template, Utc::now())
    }

    async fn publish(&self, entity: Entity) -> ais_relay_core::Result<()> {
        let mut request = self.client.put(&self.url).json(&entity);

        if let Some(token) = &self.sandbox_token {
            request = request.header(SANDBOX_AUTHORIZATION_HEADER, format!("Bearer {token}"));
        }

        match request.send().await {
            Ok(response) => {
                trace!(
                    entity_id = %entity.entity_id,
                    status = %response.status(),
                    "published entity"
                );
                Ok(())
            }
            Err(e) if e.is_timeout() => TimeoutSnafu {
                entity_id: entity.entity_id,
            }
            .fail(),
            Err(e) => Err(PublishSnafu {
                entity_id: entity.entity_id,
            }
            .into_error(BoxedError::from(e))),
        }
    }
}
