//! Rate-limiting task scheduler with coalescing.
//!
//! The wireless link to the display is slow; pushing a frame for every
//! location or heading event would queue faster than the link drains. The
//! [`CoalescingScheduler`] bounds the rate instead: a task scheduled while
//! the scheduler is idle runs immediately and starts a cool-down; tasks
//! scheduled during the cool-down replace each other, and only the latest
//! survivor runs when the cool-down elapses (restarting it).
//!
//! Every displaced task is explicitly told it was superseded, never
//! silently dropped, so callers can skip bookkeeping for work that will
//! not happen. Dropping the scheduler cancels the timer without invoking
//! whatever was still pending.
//!
//! # State machine
//!
//! ```text
//!              schedule: run task now, arm timer
//!   ┌──────┐ ──────────────────────────────────► ┌──────────────┐
//!   │ idle │                                     │ cooling-down │◄─┐
//!   └──────┘ ◄──────────────────────────────────  └──────────────┘  │
//!              timer elapsed, nothing pending        │  timer elapsed,
//!                                                    │  pending task:
//!                                                    └──  run it, re-arm
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Recommended cool-down between frame pushes.
pub const DEFAULT_COOL_DOWN: Duration = Duration::from_millis(200);

/// How a scheduled task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The task executed.
    Ran,
    /// A newer task replaced this one before it could run.
    Superseded,
}

type ScheduledTask = Box<dyn FnOnce(TaskOutcome) + Send + 'static>;

/// Rate limiter that keeps at most one task pending.
///
/// Tasks run on the caller's thread (when scheduled while idle) or on the
/// tokio timer task (when released by a cool-down), always outside the
/// internal lock, so a running task may safely schedule a successor.
pub struct CoalescingScheduler {
    inner: Arc<Inner>,
}

struct Inner {
    cool_down: Duration,
    state: Mutex<State>,
    shutdown: CancellationToken,
}

#[derive(Default)]
struct State {
    /// The single pending slot; a newer task displaces the older one.
    pending: Option<ScheduledTask>,
    /// Whether a cool-down timer is running.
    cooling_down: bool,
}

impl CoalescingScheduler {
    /// Create a scheduler with the given minimum time between task runs.
    pub fn new(cool_down: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                cool_down,
                state: Mutex::new(State::default()),
                shutdown: CancellationToken::new(),
            }),
        }
    }

    /// Schedule a task, displacing any pending one.
    ///
    /// The displaced task is resolved as [`TaskOutcome::Superseded`]
    /// before the new one can run. If the scheduler is idle the new task
    /// runs immediately on this thread; otherwise it waits for the
    /// cool-down to elapse.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime; the cool-down timer is
    /// a spawned tokio task.
    pub fn schedule<F>(&self, task: F)
    where
        F: FnOnce(TaskOutcome) + Send + 'static,
    {
        let (superseded, to_run) = {
            let mut state = self.inner.state.lock();
            let superseded = state.pending.replace(Box::new(task));
            let to_run = if state.cooling_down {
                None
            } else {
                state.cooling_down = true;
                state.pending.take()
            };
            (superseded, to_run)
        };

        if let Some(old) = superseded {
            trace!("pending task superseded");
            old(TaskOutcome::Superseded);
        }
        if let Some(task) = to_run {
            Inner::run_and_arm(&self.inner, task);
        }
    }
}

impl Inner {
    /// Run one task and start the cool-down timer.
    ///
    /// Must be called with `cooling_down` already set and the lock
    /// released: the task may re-enter `schedule`.
    fn run_and_arm(inner: &Arc<Inner>, task: ScheduledTask) {
        task(TaskOutcome::Ran);

        let inner = Arc::clone(inner);
        let shutdown = inner.shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(inner.cool_down) => Inner::cool_down_elapsed(&inner),
                _ = shutdown.cancelled() => {}
            }
        });
    }

    fn cool_down_elapsed(inner: &Arc<Inner>) {
        let to_run = {
            let mut state = inner.state.lock();
            match state.pending.take() {
                // A task waited out the cool-down: run it and re-arm
                Some(task) => Some(task),
                None => {
                    state.cooling_down = false;
                    None
                }
            }
        };
        if let Some(task) = to_run {
            Inner::run_and_arm(inner, task);
        }
    }
}

impl Drop for CoalescingScheduler {
    fn drop(&mut self) {
        // Cancel the timer; a still-pending task is dropped, not invoked
        self.inner.shutdown.cancel();
    }
}

impl std::fmt::Debug for CoalescingScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("CoalescingScheduler")
            .field("cool_down", &self.inner.cool_down)
            .field("cooling_down", &state.cooling_down)
            .field("has_pending", &state.pending.is_some())
            .finish()
    }
}
