use crate::{controller::RecorderEvent, ticker::TickerHandle, waveform::PlaybackClock};

use std::time::Duration;

use tokio::{
    sync::{mpsc, watch},
    time::MissedTickBehavior,
};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Default cadence of the playback cursor animation.
pub const CURSOR_TICK: Duration = Duration::from_millis(20);

/// Emit [`RecorderEvent::CursorMoved`] every `period` and a final
/// [`RecorderEvent::PlaybackFinished`] once the clock reaches
/// `total_frames`.
#[instrument(skip(clock, events))]
pub fn spawn_cursor_ticker<C: PlaybackClock>(
    session_id: Uuid,
    clock: C,
    sample_rate: u32,
    total_frames: usize,
    period: Duration,
    events: mpsc::Sender<RecorderEvent>,
) -> TickerHandle {
    let (cancel_tx, mut cancel_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = cancel_rx.changed() => break,
                _ = interval.tick() => {
                    let frame = clock.cursor(sample_rate);
                    if frame >= total_frames {
                        let _ = events.send(RecorderEvent::PlaybackFinished { session_id }).await;
                        break;
                    }
                    if events
                        .send(RecorderEvent::CursorMoved { session_id, frame })
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
            }
        }

        debug!(session_id = %session_id, "Cursor ticker stopped");
    });

    TickerHandle::new(cancel_tx, task)
}
