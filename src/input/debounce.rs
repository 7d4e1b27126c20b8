//! Debounce core for live search.
//!
//! The browser wiring is a thin layer: the replace-don't-stack behavior lives
//! here, behind capability traits, so it can be exercised without a DOM.

/// A cancelable handle to a task scheduled but not yet run.
pub trait TaskHandle {
    /// Cancel the task; it will never run.
    fn cancel(self);
}

/// Capability for running a one-shot task after a delay.
pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Collapses a burst of calls into a single trailing execution.
///
/// Owns at most one pending handle. Scheduling a new task cancels the previous
/// one instead of stacking, so no matter how fast input arrives there is never
/// more than one outstanding callback.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// Schedule `task` to run after the quiet window, replacing any pending
    /// task.
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    /// Drop the pending task, if any, without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

/// Browser scheduler backed by `setTimeout`.
#[cfg(feature = "csr")]
pub struct TimeoutScheduler;

#[cfg(feature = "csr")]
impl TaskHandle for gloo_timers::callback::Timeout {
    fn cancel(self) {
        // dropping the handle clears the underlying timeout
        drop(self);
    }
}

#[cfg(feature = "csr")]
impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}
