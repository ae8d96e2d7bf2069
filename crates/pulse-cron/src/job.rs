//! Self-rescheduling timer around one cron rule.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::watch;
use tracing::error;

use crate::expr::CronExpr;
use crate::search::next_occurrence;

/// Lifecycle state of a [`CronJob`].
///
/// `Idle` and `Stopped` are behaviorally equivalent (no pending wake-up);
/// `Running` means exactly one wake-up is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Idle,
    Running,
    Stopped,
}

type TickFn = Arc<dyn Fn() + Send + Sync>;
type CompleteFn = Box<dyn Fn() + Send + Sync>;

/// A job that repeatedly fires a callback at instants matching its rule.
///
/// Each wake-up delay is recomputed from the wall clock at tick time
/// (`max(0, next - now)`), so latency in one tick does not accumulate into
/// subsequent ticks. Ticks of one job are strictly sequential: the next
/// wake-up is only armed after the callback returns.
pub struct CronJob {
    expr: CronExpr,
    on_tick: TickFn,
    on_complete: Option<CompleteFn>,
    state: Arc<Mutex<JobState>>,
    shutdown: Option<watch::Sender<bool>>,
}

impl CronJob {
    /// Create a job in the `Idle` state. Nothing runs until [`start`].
    ///
    /// [`start`]: CronJob::start
    pub fn new(expr: CronExpr, on_tick: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            expr,
            on_tick: Arc::new(on_tick),
            on_complete: None,
            state: Arc::new(Mutex::new(JobState::Idle)),
            shutdown: None,
        }
    }

    /// Register a callback invoked on every [`stop`], then return the job.
    ///
    /// [`stop`]: CronJob::stop
    pub fn on_complete(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> JobState {
        *self.state.lock().unwrap()
    }

    pub fn is_running(&self) -> bool {
        self.state() == JobState::Running
    }

    /// The rule this job was built from.
    pub fn rule(&self) -> &CronExpr {
        &self.expr
    }

    /// Arm the first wake-up and transition to `Running`.
    ///
    /// A no-op when the job is already running. Must be called from within a
    /// tokio runtime.
    pub fn start(&mut self) {
        {
            let mut state = self.state.lock().unwrap();
            if *state == JobState::Running {
                return;
            }
            *state = JobState::Running;
        }

        let (tx, mut rx) = watch::channel(false);
        self.shutdown = Some(tx);

        let expr = self.expr.clone();
        let on_tick = Arc::clone(&self.on_tick);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            loop {
                let now = Utc::now();
                let next = match next_occurrence(&expr, now) {
                    Ok(next) => next,
                    Err(e) => {
                        // Fatal for this job only; the rule cannot produce
                        // further occurrences and retrying cannot change that.
                        error!(rule = %expr, "scheduling halted: {e}");
                        *state.lock().unwrap() = JobState::Stopped;
                        return;
                    }
                };
                let delay = (next - now).to_std().unwrap_or(std::time::Duration::ZERO);

                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = rx.changed() => {}
                }

                // stop() flips the flag before returning, so a wake-up that
                // raced the cancellation must not fire the callback.
                if *rx.borrow() {
                    return;
                }
                on_tick();
            }
        });
    }

    /// Cancel any pending wake-up, transition to `Stopped`, and fire the
    /// completion callback if one was registered.
    ///
    /// The completion callback fires on every call, including on a job that
    /// was never started or is already stopped.
    pub fn stop(&mut self) {
        *self.state.lock().unwrap() = JobState::Stopped;
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(true);
        }
        if let Some(ref complete) = self.on_complete {
            complete();
        }
    }
}

impl Drop for CronJob {
    fn drop(&mut self) {
        // Cancel the wake-up loop without the completion notification.
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(true);
        }
    }
}
