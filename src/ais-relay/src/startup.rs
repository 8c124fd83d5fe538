use std::sync::Arc;

use ais_relay_core::EntitySink;
use snafu::ResultExt;
use tracing::{info, warn};

use crate::{
    Result,
    dataset::Dataset,
    error::error::SignalSnafu,
    lattice::LatticeClient,
    publisher::Publisher,
    scheduler::{Scheduler, ShutdownRx, ShutdownTx, shutdown_channel},
    settings::Settings,
    vessel_cache::VesselCache,
};

pub struct App {
    cache: Arc<VesselCache>,
    scheduler: Scheduler,
}

impl App {
    pub async fn build(settings: &Settings) -> Result<App> {
        let sink = Arc::new(LatticeClient::new(settings)?);
        Self::build_with_sink(settings, sink)
    }

    /// Builds the app around `sink` instead of the Lattice client configured in `settings`.
    pub fn build_with_sink(settings: &Settings, sink: Arc<dyn EntitySink>) -> Result<App> {
        let dataset = Dataset::load(&settings.dataset_path, &settings.vessel_mmsi)?;
        let cache = Arc::new(VesselCache::new(settings.vessel_mmsi.clone(), dataset));

        let refresh_interval = settings.refresh_interval();
        let publish_interval = settings.publish_interval();

        info!(
            num_vessels = cache.len(),
            refresh_interval = ?refresh_interval,
            publish_interval = ?publish_interval,
            "built ais-relay"
        );

        let publisher = Publisher::new(cache.clone(), sink);
        let scheduler = Scheduler::new(
            cache.clone(),
            publisher,
            refresh_interval,
            publish_interval,
        );

        Ok(App { cache, scheduler })
    }

    pub fn cache(&self) -> &Arc<VesselCache> {
        &self.cache
    }

    /// Runs until the process receives SIGINT or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let (tx, rx) = shutdown_channel();

        let signals = tokio::spawn(listen_for_shutdown(tx));

        self.scheduler.run(rx).await;

        info!("shutting down ais-relay");

        match signals.await {
            Ok(res) => res,
            Err(e) => {
                warn!("shutdown listener exited unexpectedly: {e:?}");
                Ok(())
            }
        }
    }

    /// Runs until `shutdown` is signaled, intended for tests.
    pub async fn run_until(self, shutdown: ShutdownRx) {
        self.scheduler.run(shutdown).await;
    }
}

async fn listen_for_shutdown(tx: ShutdownTx) -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate()).context(SignalSnafu)?;

        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res.context(SignalSnafu)?;
                info!("sigint (ctrl+c) received, stopping scheduler");
            }
            _ = sigterm.recv() => {
                info!("sigterm received, stopping scheduler");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.context(SignalSnafu)?;
        info!("ctrl+c received, stopping scheduler");
    }

    // The scheduler only stops after this send, an error means it is already gone.
    let _ = tx.send(true);

    Ok(())
}
