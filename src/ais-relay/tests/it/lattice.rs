use ais_relay::{lattice::LatticeClient, settings::Settings};
use ais_relay_core::{AisRecord, EntitySink, Error};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

use crate::helper::{ConfigFile, secs};

fn settings(server: &MockServer, extra: &str) -> Settings {
    let file = ConfigFile::new(&format!(
        "\
lattice-ip: \"{}\"
lattice-bearer-token: bearer-123
entity-update-rate-seconds: 1
ais-generate-interval-seconds: 1
vessel-mmsi: [\"257000000\"]
{extra}",
        server.uri()
    ));
    Settings::new(&file.path).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_entity_is_put_with_authorization_headers() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/entities"))
        .and(header("Authorization", "Bearer bearer-123"))
        .and(header("Anduril-Sandbox-Authorization", "Bearer sandbox-456"))
        .and(body_partial_json(serde_json::json!({
            "entityId": "ais-vessel-257000000",
            "aliases": { "name": "TEST VESSEL 257000000" },
            "provenance": { "integrationName": "ais-relay", "dataType": "ais" },
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings(&server, "sandbox-token: sandbox-456\n");
    let client = LatticeClient::new(&settings).unwrap();

    let entity = client.entity_from(&AisRecord::test_default("257000000"));
    client.publish(entity).await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sandbox_header_is_omitted_without_sandbox_token() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/entities"))
        .respond_with(|req: &wiremock::Request| {
            if req.headers.contains_key("Anduril-Sandbox-Authorization") {
                ResponseTemplate::new(400)
            } else {
                ResponseTemplate::new(200)
            }
        })
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings(&server, "");
    let client = LatticeClient::new(&settings).unwrap();

    let entity = client.entity_from(&AisRecord::test_default("257000000"));
    client.publish(entity).await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_entity_is_returned_as_publish_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/entities"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings(&server, "");
    let client = LatticeClient::new(&settings).unwrap();

    let entity = client.entity_from(&AisRecord::test_default("257000000"));
    let err = client.publish(entity).await.unwrap_err();

    assert!(matches!(err, Error::Publish { .. }));
    assert_eq!(err.entity_id(), "ais-vessel-257000000");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hanging_sink_is_reported_as_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/entities"))
        .respond_with(ResponseTemplate::new(200).set_delay(secs(5)))
        .mount(&server)
        .await;

    let settings = settings(&server, "publish-timeout: 200ms\n");
    let client = LatticeClient::new(&settings).unwrap();

    let entity = client.entity_from(&AisRecord::test_default("257000000"));
    let err = client.publish(entity).await.unwrap_err();

    assert!(matches!(err, Error::Timeout { .. }));
}
