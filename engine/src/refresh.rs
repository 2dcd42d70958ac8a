//! Periodic background work with an explicit cancellation handle.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// A spawned loop calling a tick function at a fixed interval.
///
/// The loop ends when the tick returns `false`, when [`cancel`](Self::cancel)
/// is called, or when the handle is dropped.
#[derive(Debug)]
pub struct RefreshTask {
    handle: JoinHandle<()>,
    interval: Duration,
}

impl RefreshTask {
    /// Spawn the loop. The first tick runs one `interval` after spawning.
    /// Must be called from within a Tokio runtime.
    pub fn spawn<F, Fut>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if !tick().await {
                    debug!("Refresh loop stopped by its tick");
                    break;
                }
            }
        });

        Self { handle, interval }
    }

    /// Stop the loop.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Check if the loop has ended.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(counter: Arc<AtomicUsize>) -> impl FnMut() -> std::future::Ready<bool> {
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(true)
        }
    }

    #[tokio::test]
    async fn test_ticks_until_cancelled() {
        let counter = Arc::new(AtomicUsize::new(0));
        let task = RefreshTask::spawn(Duration::from_millis(20), counting(counter.clone()));

        tokio::time::sleep(Duration::from_millis(90)).await;
        assert!(counter.load(Ordering::SeqCst) >= 2);

        task.cancel();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(task.is_finished());

        let seen = counter.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(counter.load(Ordering::SeqCst), seen);
    }

    #[tokio::test]
    async fn test_drop_cancels() {
        let counter = Arc::new(AtomicUsize::new(0));
        let task = RefreshTask::spawn(Duration::from_millis(20), counting(counter.clone()));
        drop(task);

        tokio::time::sleep(Duration::from_millis(70)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tick_can_stop_loop() {
        let task = RefreshTask::spawn(Duration::from_millis(10), || async { false });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(task.is_finished());
    }
}
