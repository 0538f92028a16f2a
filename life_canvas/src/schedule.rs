// schedule.rs - Repeating tick source with cancel-before-restart

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// Ticks buffered before the timer waits for the UI to catch up.
const TICK_BUFFER: usize = 64;

/// Called after each tick is queued, e.g. to wake the UI.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// One running repeating timer.
struct Schedule {
    id: u64,
    task: JoinHandle<()>,
    ticks: mpsc::Receiver<()>,
}

impl Schedule {
    /// Aborts the timer task and drops the receiver, so ticks already in
    /// flight are discarded with it.
    fn cancel(self) {
        self.task.abort();
        debug!(schedule = self.id, "Schedule cancelled");
    }
}

/// Owns at most one active [`Schedule`].
pub struct Scheduler {
    runtime: Handle,
    period: Duration,
    notify: Notify,
    active: Option<Schedule>,
    next_id: u64,
}

impl Scheduler {
    pub fn new(runtime: Handle, period: Duration, notify: Notify) -> Self {
        Self {
            runtime,
            period,
            notify,
            active: None,
            next_id: 1,
        }
    }

    /// Starts a fresh schedule, cancelling the active one first.
    /// The first tick arrives one period after this call.
    pub fn start(&mut self) -> u64 {
        self.stop();

        let id = self.next_id;
        self.next_id += 1;

        let (tx, ticks) = mpsc::channel(TICK_BUFFER);
        let period = self.period;
        let notify = Arc::clone(&self.notify);
        let task = self.runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
                notify();
            }
        });

        debug!(schedule = id, period_ms = period.as_millis() as u64, "Schedule started");
        self.active = Some(Schedule { id, task, ticks });
        id
    }

    pub fn stop(&mut self) {
        if let Some(schedule) = self.active.take() {
            schedule.cancel();
        }
    }

    pub fn active_id(&self) -> Option<u64> {
        self.active.as_ref().map(|s| s.id)
    }

    /// Number of ticks delivered by the active schedule since the last call.
    pub fn drain_ticks(&mut self) -> usize {
        let Some(schedule) = self.active.as_mut() else {
            return 0;
        };
        let mut count = 0;
        while schedule.ticks.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
