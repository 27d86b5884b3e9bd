use super::player_state::PlayerState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Periodic driver that moves the player by the wall-clock time elapsed between ticks.
///
/// Runs until `shutdown` is notified. Use `notify_one` so a request that arrives while
/// a tick is being processed is still observed.
pub async fn travel_task(player: Arc<PlayerState>, tick_interval: Duration, shutdown: Arc<Notify>) {
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last_update = Instant::now();

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!("travel driver stopping");
                break;
            }
            _ = interval.tick() => {
                // Measure instead of assuming the interval so late ticks don't drift.
                let now = Instant::now();
                let hours = now.duration_since(last_update).as_secs_f64() / SECONDS_PER_HOUR;
                last_update = now;

                player.advance(hours);
                debug!(player = %player.snapshot(), "player advanced");
            }
        }
    }
}
