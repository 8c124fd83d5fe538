use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    task::JoinSet,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::{error, info, instrument};

use crate::{publisher::Publisher, vessel_cache::VesselCache};

pub type ShutdownTx = watch::Sender<bool>;
pub type ShutdownRx = watch::Receiver<bool>;

pub fn shutdown_channel() -> (ShutdownTx, ShutdownRx) {
    watch::channel(false)
}

/// Drives the refresh and publish cycles on two independent timers.
pub struct Scheduler {
    cache: Arc<VesselCache>,
    publisher: Publisher,
    refresh_interval: Duration,
    publish_interval: Duration,
}

impl Scheduler {
    pub fn new(
        cache: Arc<VesselCache>,
        publisher: Publisher,
        refresh_interval: Duration,
        publish_interval: Duration,
    ) -> Self {
        Self {
            cache,
            publisher,
            refresh_interval,
            publish_interval,
        }
    }

    /// Runs both cycles until `shutdown` is signaled or its sender is dropped.
    ///
    /// A cycle that is in progress when shutdown is signaled runs to completion, no new cycles
    /// are started afterwards. Returns once both cycles have stopped.
    pub async fn run(self, shutdown: ShutdownRx) {
        let Self {
            cache,
            publisher,
            refresh_interval,
            publish_interval,
        } = self;

        let mut set = JoinSet::new();

        set.spawn(refresh_loop(cache, refresh_interval, shutdown.clone()));
        set.spawn(publish_loop(publisher, publish_interval, shutdown));

        while let Some(out) = set.join_next().await {
            if let Err(e) = out {
                error!("scheduled task exited unexpectedly: {e:?}");
            }
        }

        info!("scheduler stopped");
    }
}

async fn refresh_loop(cache: Arc<VesselCache>, period: Duration, mut shutdown: ShutdownRx) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.wait_for(|stop| *stop) => break,
            _ = interval.tick() => {}
        }
        refresh_cycle(&cache);
    }
}

#[instrument(skip_all)]
fn refresh_cycle(cache: &VesselCache) {
    cache.refresh();
}

async fn publish_loop(publisher: Publisher, period: Duration, mut shutdown: ShutdownRx) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.wait_for(|stop| *stop) => break,
            _ = interval.tick() => {}
        }
        publish_cycle(&publisher).await;
    }
}

#[instrument(skip_all)]
async fn publish_cycle(publisher: &Publisher) {
    if let Err(e) = publisher.run().await {
        error!("publish cycle failed: {e:?}");
    }
}
