use std::{sync::Arc, time::Duration};

use ais_relay::{Error, settings::Settings, startup::App};
use ais_relay_core::{Mmsi, TestSink};

use crate::helper::{ConfigFile, test_dataset_path};

static VALID: &str = "\
lattice-ip: lattice.example.com
lattice-bearer-token: token
entity-update-rate-seconds: 10
ais-generate-interval-seconds: 5
vessel-mmsi: [\"366940480\", \"367008090\"]
";

fn without(key: &str) -> String {
    VALID
        .lines()
        .filter(|l| !l.starts_with(key))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_settings_are_read_from_yaml_with_defaults() {
    let file = ConfigFile::new(VALID);
    let settings = Settings::new(&file.path).unwrap();

    assert_eq!(settings.lattice_ip, "lattice.example.com");
    assert_eq!(settings.sandbox_token, None);
    assert_eq!(
        settings.vessel_mmsi,
        vec![Mmsi::from("366940480"), Mmsi::from("367008090")]
    );
    assert_eq!(settings.refresh_interval(), Duration::from_secs(5));
    assert_eq!(settings.publish_interval(), Duration::from_secs(10));
    assert_eq!(settings.publish_timeout, Duration::from_secs(10));
    assert_eq!(settings.max_retries, 0);
}

#[test]
fn test_each_required_key_is_enforced() {
    for key in [
        "lattice-ip",
        "lattice-bearer-token",
        "entity-update-rate-seconds",
        "ais-generate-interval-seconds",
        "vessel-mmsi",
    ] {
        let file = ConfigFile::new(&without(key));
        let err = Settings::new(&file.path).unwrap_err();
        assert!(
            err.to_string().contains(key),
            "expected error about '{key}', got '{err}'"
        );
    }
}

#[test]
fn test_refresh_interval_is_clamped_at_configuration_time() {
    let file = ConfigFile::new(&VALID.replace(
        "ais-generate-interval-seconds: 5",
        "ais-generate-interval-seconds: 0",
    ));
    assert_eq!(
        Settings::new(&file.path).unwrap().refresh_interval(),
        Duration::from_secs(1)
    );

    let file = ConfigFile::new(&VALID.replace(
        "ais-generate-interval-seconds: 5",
        "ais-generate-interval-seconds: 500",
    ));
    assert_eq!(
        Settings::new(&file.path).unwrap().refresh_interval(),
        Duration::from_secs(60)
    );
}

#[test]
fn test_zero_publish_interval_publishes_every_second() {
    let file = ConfigFile::new(&VALID.replace(
        "entity-update-rate-seconds: 10",
        "entity-update-rate-seconds: 0",
    ));
    let settings = Settings::new(&file.path).unwrap();

    assert_eq!(settings.entity_update_rate_seconds, 0);
    assert_eq!(settings.publish_interval(), Duration::from_secs(1));
}

#[test]
fn test_startup_succeeds_without_tracked_vessels() {
    let file = ConfigFile::new(&format!(
        "{}\nvessel-mmsi: []\ndataset-path: \"{}\"\n",
        without("vessel-mmsi"),
        test_dataset_path().display()
    ));
    let settings = Settings::new(&file.path).unwrap();
    assert!(settings.vessel_mmsi.is_empty());

    let app = App::build_with_sink(&settings, Arc::new(TestSink::new())).unwrap();
    assert!(app.cache().is_empty());
    assert!(app.cache().snapshot().is_empty());
}

#[test]
fn test_missing_config_file_is_rejected() {
    assert!(Settings::new("does/not/exist.yml").is_err());
}

#[test]
fn test_startup_fails_on_missing_dataset() {
    let file = ConfigFile::new(&format!("{VALID}dataset-path: does/not/exist.csv\n"));
    let settings = Settings::new(&file.path).unwrap();

    let err = App::build_with_sink(&settings, Arc::new(TestSink::new())).err().unwrap();
    assert!(matches!(err, Error::Dataset { .. }));
}

#[test]
fn test_startup_succeeds_with_bundled_dataset() {
    let file = ConfigFile::new(&format!(
        "{VALID}dataset-path: \"{}\"\n",
        test_dataset_path().display()
    ));
    let settings = Settings::new(&file.path).unwrap();

    let app = App::build_with_sink(&settings, Arc::new(TestSink::new())).unwrap();
    assert_eq!(app.cache().len(), 2);
    assert_eq!(app.cache().snapshot(), vec![None, None]);
}
