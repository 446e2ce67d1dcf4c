//! Cancellation-safe continuation scheduling for semantic queries.
//!
//! Editor requests are built as chains of tasks: fetch the document, run a
//! query against the catalog, convert the answer. This crate provides those
//! chains with three guarantees:
//!
//! - **Ordering**: in a chain A → B → C, B's body never starts before A's has
//!   returned, and C's never before B's, no matter when tokens are cancelled.
//! - **Fail-fast**: a panic that is not cooperative cancellation is reported
//!   to a [`FaultSink`] with the identity of the body that raised it; the
//!   default sink terminates the process.
//! - **Confinement**: only the coordinator thread may block on a task.
//!
//! ```ignore
//! let scheduler = Scheduler::new(&SchedulerConfig::from_env())?;
//! let token = CancellationToken::new();
//! let parsed = scheduler.run(|_| Ok(parse()), ExecutionContext::Worker, &token);
//! let symbols = scheduler.run_after(&parsed, |tree, t| index(tree, t), ExecutionContext::Worker, &token);
//! let shown = scheduler.blocking_wait(&symbols, &token)?;
//! ```

mod cancel;
mod config;
mod error;
mod fault;
mod scheduler;
mod task;
mod timer;

pub use cancel::{CancellationRegistration, CancellationToken, Cancelled};
pub use config::{SchedulerConfig, WORKER_THREADS_ENV};
pub use error::{SchedulerError, WaitError};
pub use fault::{AbortOnFault, Fault, FaultLog, FaultSink};
pub use scheduler::{ExecutionContext, Scheduler, WeakScheduler};
pub use task::{Outcome, Task, TaskSource};
