use std::{io::Write, path::PathBuf, sync::Arc, time::Duration};

use ais_relay::{
    scheduler::{ShutdownTx, shutdown_channel},
    settings::Settings,
    startup::App,
    vessel_cache::VesselCache,
};
use ais_relay_core::TestSink;
use tempfile::TempDir;
use tokio::task::JoinHandle;

pub static TEST_DATASET: &str = "test_data/ais_vessels.csv";

pub struct TestHelper {
    pub sink: Arc<TestSink>,
    pub cache: Arc<VesselCache>,
    shutdown: ShutdownTx,
    handle: JoinHandle<()>,
}

pub struct ConfigFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestHelper {
    /// Starts the app against the bundled test dataset with a recording sink.
    pub fn spawn(settings: Settings) -> TestHelper {
        let sink = Arc::new(TestSink::new());
        let app = App::build_with_sink(&settings, sink.clone()).unwrap();
        let cache = app.cache().clone();

        let (shutdown, rx) = shutdown_channel();
        let handle = tokio::spawn(app.run_until(rx));

        TestHelper {
            sink,
            cache,
            shutdown,
            handle,
        }
    }

    pub async fn stop(self) {
        self.shutdown.send(true).unwrap();
        self.handle.await.unwrap();
    }
}

impl ConfigFile {
    pub fn new(contents: &str) -> ConfigFile {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();

        ConfigFile { _dir: dir, path }
    }
}

pub fn test_dataset_path() -> PathBuf {
    let mut path = PathBuf::new();
    path.push(env!("CARGO_MANIFEST_DIR"));
    path.push(TEST_DATASET);
    path
}

pub fn test_settings(vessel_mmsi: &[&str]) -> Settings {
    let mmsis = vessel_mmsi
        .iter()
        .map(|m| format!("  - \"{m}\""))
        .collect::<Vec<_>>()
        .join("\n");

    let file = ConfigFile::new(&format!(
        "\
lattice-ip: \"127.0.0.1:1\"
lattice-bearer-token: test
entity-update-rate-seconds: 3
ais-generate-interval-seconds: 1
dataset-path: \"{}\"
vessel-mmsi:
{mmsis}
",
        test_dataset_path().display()
    ));

    Settings::new(&file.path).unwrap()
}

pub fn secs(secs: u64) -> Duration {
    Duration::from_secs(secs)
}
