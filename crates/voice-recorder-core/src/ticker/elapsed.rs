use crate::{controller::RecorderEvent, ticker::TickerHandle};

use std::time::Duration;

use tokio::{
    sync::{mpsc, watch},
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Cadence of the elapsed-time label.
pub const ELAPSED_TICK: Duration = Duration::from_secs(1);

/// Emit [`RecorderEvent::Elapsed`] every `period` until cancelled.
#[instrument(skip(events))]
pub fn spawn_elapsed_ticker(
    session_id: Uuid,
    started_at: Instant,
    period: Duration,
    events: mpsc::Sender<RecorderEvent>,
) -> TickerHandle {
    let (cancel_tx, mut cancel_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(started_at + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = cancel_rx.changed() => break,
                _ = interval.tick() => {
                    let event = RecorderEvent::Elapsed {
                        session_id,
                        elapsed: started_at.elapsed(),
                    };
                    if events.send(event).await.is_err() {
                        break;
                    }
                }
            }
        }

        debug!(session_id = %session_id, "Elapsed ticker stopped");
    });

    TickerHandle::new(cancel_tx, task)
}
