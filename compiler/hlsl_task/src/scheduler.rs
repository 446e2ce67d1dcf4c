//! The continuation scheduler.
//!
//! # Execution Contexts
//!
//! - `Coordinator`: a queue owned by the thread that created the
//!   [`Scheduler`]. Jobs run only when that thread calls [`Scheduler::pump`]
//!   or [`Scheduler::blocking_wait`], so state owned by the coordinator is
//!   mutated sequentially.
//! - `Worker`: a dedicated rayon pool for CPU-bound analysis.
//!
//! # Lazy Cancellation
//!
//! A continuation never starts before its antecedent has finished, even if
//! its own token is cancelled first. Cancellation observed at that point
//! finishes the continuation as cancelled without running it.
//!
//! # Faults
//!
//! Bodies run under `catch_unwind`. Returning `Err(Cancelled)` or panicking
//! with a [`Cancelled`] payload after the body's own token fired is a normal
//! cancellation. Any other panic is a [`Fault`]: it is reported to the
//! [`FaultSink`] once and then propagates down the chain.

use std::fmt;
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::{Arc, Weak};
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver, Sender};

use crate::cancel::{CancellationToken, Cancelled};
use crate::config::SchedulerConfig;
use crate::error::{SchedulerError, WaitError};
use crate::fault::{AbortOnFault, Fault, FaultSink};
use crate::task::{Outcome, Task, TaskSource};
use crate::timer::Timer;

pub(crate) type Job = Box<dyn FnOnce() + Send>;

/// Where a body runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    /// The single coordinating thread.
    Coordinator,
    /// The worker pool.
    Worker,
}

/// Identity of a scheduled body, for fault reports.
#[derive(Copy, Clone, Debug)]
struct Origin {
    name: &'static str,
    location: &'static Location<'static>,
}

impl Origin {
    fn of<F>(location: &'static Location<'static>) -> Self {
        Origin {
            name: std::any::type_name::<F>(),
            location,
        }
    }
}

struct Inner {
    pool: rayon::ThreadPool,
    coordinator_tx: Sender<Job>,
    coordinator_rx: Receiver<Job>,
    coordinator_thread: ThreadId,
    timer: Timer,
    sink: Arc<dyn FaultSink>,
}

/// Schedules task bodies and continuations onto the two execution contexts.
///
/// Cheap to clone; clones share the pool, the coordinator queue and the timer.
/// Dropping the last clone stops the pool and the timer and discards queued
/// coordinator jobs. Continuations declared earlier then finish as cancelled
/// when their antecedent completes.
#[derive(Clone)]
pub struct Scheduler {
    inner: Arc<Inner>,
}

/// A [`Scheduler`] reference that does not keep it running.
///
/// Continuations capture this instead of a [`Scheduler`] so that queued work
/// never keeps its own scheduler alive.
#[derive(Clone)]
pub struct WeakScheduler {
    inner: Weak<Inner>,
}

impl WeakScheduler {
    pub fn upgrade(&self) -> Option<Scheduler> {
        self.inner.upgrade().map(|inner| Scheduler { inner })
    }
}

impl fmt::Debug for WeakScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.inner.strong_count() == 0 { "stopped" } else { "running" };
        write!(f, "WeakScheduler({state})")
    }
}

impl Scheduler {
    /// Start a scheduler whose coordinator is the calling thread.
    ///
    /// Unexpected faults terminate the process.
    pub fn new(config: &SchedulerConfig) -> Result<Self, SchedulerError> {
        Scheduler::with_fault_sink(config, Arc::new(AbortOnFault))
    }

    /// Start a scheduler that reports faults to `sink`.
    pub fn with_fault_sink(
        config: &SchedulerConfig,
        sink: Arc<dyn FaultSink>,
    ) -> Result<Self, SchedulerError> {
        let prefix = config.thread_name_prefix.clone();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_threads)
            .stack_size(config.stack_size)
            .thread_name(move |index| format!("{prefix}-{index}"))
            .build()?;
        let timer = Timer::spawn(format!("{}-timer", config.thread_name_prefix))?;
        let (coordinator_tx, coordinator_rx) = channel::unbounded();

        tracing::debug!(
            workers = pool.current_num_threads(),
            "scheduler started"
        );

        Ok(Scheduler {
            inner: Arc::new(Inner {
                pool,
                coordinator_tx,
                coordinator_rx,
                coordinator_thread: thread::current().id(),
                timer,
                sink,
            }),
        })
    }

    pub fn downgrade(&self) -> WeakScheduler {
        WeakScheduler {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Number of worker threads.
    pub fn worker_threads(&self) -> usize {
        self.inner.pool.current_num_threads()
    }

    /// Whether the calling thread is the coordinator.
    pub fn is_coordinator_thread(&self) -> bool {
        thread::current().id() == self.inner.coordinator_thread
    }

    fn dispatch(&self, context: ExecutionContext, job: Job) {
        match context {
            ExecutionContext::Worker => self.inner.pool.spawn(job),
            ExecutionContext::Coordinator => {
                if self.inner.coordinator_tx.send(job).is_err() {
                    tracing::warn!("coordinator queue closed, dropping job");
                }
            }
        }
    }

    /// Start `body` on `context`.
    ///
    /// If `token` is already cancelled the task finishes as cancelled and
    /// `body` never runs.
    #[track_caller]
    pub fn run<T, F>(&self, body: F, context: ExecutionContext, token: &CancellationToken) -> Task<T>
    where
        T: Clone + Send + 'static,
        F: FnOnce(&CancellationToken) -> Result<T, Cancelled> + Send + 'static,
    {
        let origin = Origin::of::<F>(Location::caller());
        if token.is_cancelled() {
            return Task::cancelled();
        }

        let source = TaskSource::new();
        let task = source.task();
        let sink = Arc::clone(&self.inner.sink);
        let token = token.clone();
        tracing::trace!(continuation = origin.name, ?context, "dispatch");
        self.dispatch(
            context,
            Box::new(move || execute(&*sink, &source, &token, origin, body)),
        );
        task
    }

    /// Run `continuation` with the antecedent's value once it completes.
    ///
    /// A cancelled or faulted antecedent finishes the continuation the same
    /// way without running it.
    #[track_caller]
    pub fn run_after<A, B, F>(
        &self,
        antecedent: &Task<A>,
        continuation: F,
        context: ExecutionContext,
        token: &CancellationToken,
    ) -> Task<B>
    where
        A: Clone + Send + 'static,
        B: Clone + Send + 'static,
        F: FnOnce(A, &CancellationToken) -> Result<B, Cancelled> + Send + 'static,
    {
        let origin = Origin::of::<F>(Location::caller());
        let source = TaskSource::new();
        let task = source.task();
        self.chain_into(antecedent, source, origin, continuation, context, token.clone());
        task
    }

    /// Like [`Scheduler::run_after`] for continuations that start more work;
    /// the returned task finishes with the task the continuation produced.
    #[track_caller]
    pub fn run_after_task<A, B, F>(
        &self,
        antecedent: &Task<A>,
        continuation: F,
        context: ExecutionContext,
        token: &CancellationToken,
    ) -> Task<B>
    where
        A: Clone + Send + 'static,
        B: Clone + Send + 'static,
        F: FnOnce(A, &CancellationToken) -> Result<Task<B>, Cancelled> + Send + 'static,
    {
        let origin = Origin::of::<F>(Location::caller());
        let source = TaskSource::new();
        let outer = source.task();
        self.chain_into(antecedent, source, origin, continuation, context, token.clone());
        flatten(&outer)
    }

    /// Run `continuation` once the antecedent completes and `delay` has
    /// elapsed after that.
    ///
    /// The delay observes `token`: cancelling it during the delay finishes
    /// the continuation as cancelled.
    #[track_caller]
    pub fn run_after_delay<A, B, F>(
        &self,
        antecedent: &Task<A>,
        continuation: F,
        delay: Duration,
        context: ExecutionContext,
        token: &CancellationToken,
    ) -> Task<B>
    where
        A: Clone + Send + 'static,
        B: Clone + Send + 'static,
        F: FnOnce(A, &CancellationToken) -> Result<B, Cancelled> + Send + 'static,
    {
        let origin = Origin::of::<F>(Location::caller());
        let source = TaskSource::new();
        let task = source.task();
        let scheduler = self.downgrade();
        let token = token.clone();

        antecedent.on_complete(move |outcome| {
            let value = match outcome.clone().propagate() {
                Ok(finished) => return finish_early(&source, finished, origin),
                Err(value) => value,
            };
            let Some(scheduler) = scheduler.upgrade() else {
                return abandon(&source, origin);
            };
            let timer = scheduler.delay(delay, &token);
            scheduler.chain_into(
                &timer,
                source,
                origin,
                move |(), token| continuation(value, token),
                context,
                token,
            );
        });
        task
    }

    fn chain_into<A, B, F>(
        &self,
        antecedent: &Task<A>,
        source: TaskSource<B>,
        origin: Origin,
        continuation: F,
        context: ExecutionContext,
        token: CancellationToken,
    ) where
        A: Clone + Send + 'static,
        B: Clone + Send + 'static,
        F: FnOnce(A, &CancellationToken) -> Result<B, Cancelled> + Send + 'static,
    {
        let scheduler = self.downgrade();
        antecedent.on_complete(move |outcome| {
            let value = match outcome.clone().propagate() {
                Ok(finished) => return finish_early(&source, finished, origin),
                Err(value) => value,
            };
            if token.is_cancelled() {
                tracing::trace!(continuation = origin.name, "cancelled before start");
                source.cancel();
                return;
            }
            let Some(scheduler) = scheduler.upgrade() else {
                return abandon(&source, origin);
            };

            let sink = Arc::clone(&scheduler.inner.sink);
            tracing::trace!(continuation = origin.name, ?context, "dispatch");
            scheduler.dispatch(
                context,
                Box::new(move || {
                    execute(&*sink, &source, &token, origin, |token| {
                        continuation(value, token)
                    });
                }),
            );
        });
    }

    /// A task that completes after `duration`, or finishes as cancelled as
    /// soon as `token` is cancelled.
    pub fn delay(&self, duration: Duration, token: &CancellationToken) -> Task<()> {
        if token.is_cancelled() {
            return Task::cancelled();
        }

        let source = TaskSource::new();
        let task = source.task();
        let registration = token.on_cancel({
            let source = source.clone();
            move || {
                source.cancel();
            }
        });
        self.inner.timer.schedule(
            Instant::now() + duration,
            Box::new(move || {
                drop(registration);
                source.set_result(());
            }),
        );
        task
    }

    /// Start an operation that is cancelled if it has not finished within
    /// `timeout`.
    ///
    /// `start` receives a child of `token`; the deadline cancels only that
    /// child. The child token belongs to the operation and is cancelled once
    /// it finishes, which also releases the deadline.
    pub fn with_timeout<T, F>(&self, timeout: Duration, token: &CancellationToken, start: F) -> Task<T>
    where
        T: Clone + Send + 'static,
        F: FnOnce(&CancellationToken) -> Task<T>,
    {
        let child = token.child();
        let task = start(&child);

        let deadline = self.delay(timeout, &child);
        let on_deadline = child.clone();
        deadline.on_complete(move |outcome| {
            if outcome.is_completed() && on_deadline.cancel() {
                tracing::debug!(?timeout, "deadline elapsed, cancelling operation");
            }
        });
        task.on_complete(move |_| {
            child.cancel();
        });
        task
    }

    /// Block until `task` finishes, running coordinator jobs meanwhile.
    ///
    /// Only the coordinator thread may wait this way; debug builds assert it.
    /// Returns `Err(WaitError::Cancelled)` as soon as `token` is cancelled,
    /// without affecting the task.
    pub fn blocking_wait<T>(&self, task: &Task<T>, token: &CancellationToken) -> Result<T, WaitError>
    where
        T: Clone + Send + 'static,
    {
        debug_assert!(
            self.is_coordinator_thread(),
            "blocking_wait called off the coordinator thread"
        );

        let _wake_on_cancel = token.on_cancel(self.waker());
        let wake = self.waker();
        task.on_complete(move |_| wake());

        loop {
            if let Some(outcome) = task.outcome() {
                return match outcome {
                    Outcome::Completed(value) => Ok(value),
                    Outcome::Cancelled => Err(WaitError::Cancelled),
                    Outcome::Faulted(fault) => Err(WaitError::Faulted(fault)),
                };
            }
            if token.is_cancelled() {
                return Err(WaitError::Cancelled);
            }
            match self.inner.coordinator_rx.recv() {
                Ok(job) => job(),
                Err(_) => return Err(WaitError::Cancelled),
            }
        }
    }

    /// Run every queued coordinator job. Returns how many ran.
    pub fn pump(&self) -> usize {
        debug_assert!(
            self.is_coordinator_thread(),
            "pump called off the coordinator thread"
        );

        let mut ran = 0;
        while let Ok(job) = self.inner.coordinator_rx.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Posts a no-op so a blocked coordinator re-checks its condition.
    fn waker(&self) -> impl Fn() + Send + 'static {
        let tx = self.inner.coordinator_tx.clone();
        move || {
            let _ = tx.send(Box::new(|| {}));
        }
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("worker_threads", &self.worker_threads())
            .field("queued", &self.inner.coordinator_rx.len())
            .finish_non_exhaustive()
    }
}

fn finish_early<B>(source: &TaskSource<B>, finished: Outcome<B>, origin: Origin)
where
    B: Clone + Send + 'static,
{
    if let Outcome::Faulted(fault) = &finished {
        tracing::debug!(continuation = origin.name, %fault, "antecedent faulted");
    }
    source.complete(finished);
}

/// Finish a continuation whose scheduler has been dropped.
fn abandon<B>(source: &TaskSource<B>, origin: Origin)
where
    B: Clone + Send + 'static,
{
    tracing::debug!(continuation = origin.name, "scheduler stopped, continuation cancelled");
    source.cancel();
}

/// Run one body and finish `source` with its classified outcome.
fn execute<T, F>(
    sink: &dyn FaultSink,
    source: &TaskSource<T>,
    token: &CancellationToken,
    origin: Origin,
    body: F,
) where
    T: Clone + Send + 'static,
    F: FnOnce(&CancellationToken) -> Result<T, Cancelled>,
{
    if token.is_cancelled() {
        tracing::trace!(continuation = origin.name, "cancelled before start");
        source.cancel();
        return;
    }

    let outcome = match panic::catch_unwind(AssertUnwindSafe(|| body(token))) {
        Ok(Ok(value)) => Outcome::Completed(value),
        Ok(Err(Cancelled)) => Outcome::Cancelled,
        Err(payload) if payload.is::<Cancelled>() && token.is_cancelled() => Outcome::Cancelled,
        Err(payload) => {
            let fault = Fault::from_panic(origin.name, origin.location, &*payload);
            sink.report(&fault);
            Outcome::Faulted(fault)
        }
    };
    source.complete(outcome);
}

/// Collapse a task of a task into the inner task's outcome.
fn flatten<B>(outer: &Task<Task<B>>) -> Task<B>
where
    B: Clone + Send + 'static,
{
    let source = TaskSource::new();
    let task = source.task();
    outer.on_complete(move |outcome| match outcome.clone().propagate() {
        Ok(finished) => {
            source.complete(finished);
        }
        Err(inner) => inner.on_complete(move |outcome| {
            source.complete(outcome.clone());
        }),
    });
    task
}

#[cfg(test)]
mod tests;
