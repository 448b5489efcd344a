use chrono::Utc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// How often the screen clock refreshes
pub const TICK_INTERVAL_SECS: u64 = 60;

/// Spawn the clock task that keeps a screen's "now" fresh.
///
/// Sends the current epoch-millisecond instant once per minute so the
/// calendar screen can re-classify events without refetching. The task
/// exits when the token is cancelled on screen teardown or when the
/// receiving screen is gone.
pub fn spawn_minute_ticker(
    tick_tx: mpsc::Sender<i64>,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(TICK_INTERVAL_SECS));
        // The first tick of a tokio interval fires immediately; the screen
        // already has a fresh instant at activation, so skip it.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = interval.tick() => {
                    if tick_tx.send(Utc::now().timestamp_millis()).await.is_err() {
                        break;
                    }
                }
            }
        }
    })
}

/// A running minute clock owned by one screen's lifecycle
pub struct ScreenClock {
    token: CancellationToken,
    tick_rx: mpsc::Receiver<i64>,
    _task: JoinHandle<()>,
}

impl ScreenClock {
    /// Start the clock; stopped explicitly on screen teardown
    pub fn start() -> Self {
        let (tick_tx, tick_rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let task = spawn_minute_ticker(tick_tx, token.clone());

        Self {
            token,
            tick_rx,
            _task: task,
        }
    }

    /// Wait for the next tick; None once the clock has stopped
    pub async fn next_tick(&mut self) -> Option<i64> {
        self.tick_rx.recv().await
    }

    /// Stop the clock
    pub fn stop(&self) {
        self.token.cancel();
    }
}
