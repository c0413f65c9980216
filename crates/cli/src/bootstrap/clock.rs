use ferrous_root_infrastructure::dns::cache::coarse_clock;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Advances the cache's coarse clock once a second until cancelled.
pub fn spawn_clock_ticker(shutdown: CancellationToken) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = interval.tick() => coarse_clock::tick(),
            }
        }
    });
}
